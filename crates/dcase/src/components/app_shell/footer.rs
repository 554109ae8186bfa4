use dioxus::prelude::*;

/// Footer with session-only messaging
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "dc-footer",
            span { class: "dc-footer-text",
                "Session data only • records live in memory and reset on reload."
            }
        }
    }
}
