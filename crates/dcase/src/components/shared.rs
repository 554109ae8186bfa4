//! Shared building blocks: badges, stat cards, form fields, dialogs, and
//! the transient toast.

use dioxus::prelude::*;

use crate::utils::formatting::initials;

/// CSS tone suffix for a status/priority label. Unknown labels fall back
/// to the neutral tone.
pub fn status_tone(label: &str) -> &'static str {
    match label {
        "Active" | "Paid" | "Low" | "Consultation" => "green",
        "Pending" | "Medium" => "yellow",
        "Overdue" | "High" | "Court Date" => "red",
        "Meeting" => "blue",
        "Deadline" => "orange",
        _ => "gray",
    }
}

/// Colored pill for a status, priority, or category label.
#[component]
pub fn StatusBadge(label: String) -> Element {
    let tone = status_tone(&label);
    rsx! {
        span { class: "dc-badge dc-badge--{tone}", "{label}" }
    }
}

/// Circular initials avatar used where no image is wanted.
#[component]
pub fn AvatarBubble(name: String) -> Element {
    let letters = initials(&name);
    rsx! {
        span { class: "dc-avatar", "{letters}" }
    }
}

/// Headline number card used on the dashboard and billing screens. `tone`
/// colors the value when set ("green", "red", "yellow").
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] tone: String) -> Element {
    let value_class = if tone.is_empty() {
        "dc-stat-value".to_string()
    } else {
        format!("dc-stat-value dc-stat-value--{tone}")
    };
    rsx! {
        div { class: "dc-card dc-stat-card",
            p { class: "dc-stat-label", "{label}" }
            p { class: "{value_class}", "{value}" }
        }
    }
}

/// Inline placeholder for an empty list: no search hits, no joined
/// records, or an id that resolved to nothing.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "dc-empty",
            p { class: "dc-empty-text", "{message}" }
        }
    }
}

/// Search input row shared by every list screen.
#[component]
pub fn SearchBox(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "dc-search-input",
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}

/// Labeled text input for the add/edit dialogs.
#[component]
pub fn FormField(
    label: String,
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "dc-field",
            label { class: "dc-field-label", "{label}" }
            input {
                class: "dc-field-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Labeled multi-line input.
#[component]
pub fn FormTextarea(
    label: String,
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "dc-field",
            label { class: "dc-field-label", "{label}" }
            textarea {
                class: "dc-field-input dc-field-textarea",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Labeled select over fixed option labels.
#[component]
pub fn FormSelect(
    label: String,
    value: String,
    options: Vec<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "dc-field",
            label { class: "dc-field-label", "{label}" }
            select {
                class: "dc-field-input",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                for option_label in options {
                    option { value: "{option_label}", "{option_label}" }
                }
            }
        }
    }
}

/// Modal dialog. Renders nothing while closed; the close button is the
/// only way out, matching the source dialogs.
#[component]
pub fn Dialog(title: String, open: Signal<bool>, children: Element) -> Element {
    if !open() {
        return rsx! {};
    }
    rsx! {
        div { class: "dc-dialog-backdrop",
            div { class: "dc-dialog",
                header { class: "dc-dialog-header",
                    h2 { class: "dc-dialog-title", "{title}" }
                    button {
                        class: "dc-dialog-close",
                        onclick: move |_| open.set(false),
                        "✕"
                    }
                }
                div { class: "dc-dialog-body", {children} }
            }
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub error: bool,
}

impl Toast {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            error: false,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            error: true,
        }
    }
}

/// Renders the current toast, if any, with a dismiss button.
#[component]
pub fn ToastView(toast: Signal<Option<Toast>>) -> Element {
    let Some(current) = toast() else {
        return rsx! {};
    };
    let class = if current.error {
        "dc-toast dc-toast--error"
    } else {
        "dc-toast"
    };
    rsx! {
        div { class: "{class}",
            div {
                p { class: "dc-toast-title", "{current.title}" }
                p { class: "dc-toast-body", "{current.body}" }
            }
            button {
                class: "dc-toast-dismiss",
                onclick: move |_| toast.set(None),
                "✕"
            }
        }
    }
}
