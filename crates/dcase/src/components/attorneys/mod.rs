//! Attorney roster screen.

mod detail;

pub use detail::AttorneyDetailView;

use dcase_core::model::{Attorney, AttorneyDraft, EntityId};
use dioxus::prelude::*;

use crate::components::shared::{
    AvatarBubble, Dialog, EmptyState, FormField, FormTextarea, SearchBox,
};
use crate::components::{use_attorneys, use_navigator, View};
use crate::utils::formatting::stars;

#[component]
pub fn AttorneysView() -> Element {
    let mut attorneys = use_attorneys();
    let mut nav = use_navigator();
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(AttorneyDraft::default);

    let (visible, query) = {
        let controller = attorneys.read();
        (
            controller
                .visible()
                .into_iter()
                .cloned()
                .collect::<Vec<Attorney>>(),
            controller.query().to_string(),
        )
    };

    let submit = move |_| {
        if attorneys.write().add(draft()).is_ok() {
            draft.set(AttorneyDraft::default());
            dialog_open.set(false);
        }
    };

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Attorneys" }
                button {
                    class: "dc-btn dc-btn--primary",
                    onclick: move |_| {
                        draft.set(AttorneyDraft::default());
                        dialog_open.set(true);
                    },
                    "+ Add Attorney"
                }
            }

            div { class: "dc-toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search attorneys by name or specialization…",
                    on_input: move |q: String| attorneys.write().set_query(q),
                }
            }

            div { class: "dc-card-grid",
                for attorney in visible.clone() {
                    AttorneyCard {
                        key: "{attorney.id}",
                        attorney: attorney.clone(),
                        on_view: move |id| nav.write().go(View::AttorneyDetail(id)),
                        on_delete: move |id| attorneys.write().remove(id),
                    }
                }
            }
            if visible.is_empty() {
                EmptyState { message: "No attorneys found matching your search." }
            }

            Dialog { title: "Add New Attorney", open: dialog_open,
                div { class: "dc-form-grid",
                    FormField {
                        label: "Name",
                        value: draft().name,
                        placeholder: "Enter attorney name",
                        on_input: move |v| draft.write().name = v,
                    }
                    FormField {
                        label: "Email",
                        value: draft().email,
                        placeholder: "Enter email address",
                        on_input: move |v| draft.write().email = v,
                    }
                    FormField {
                        label: "Phone",
                        value: draft().phone,
                        placeholder: "Enter phone number",
                        on_input: move |v| draft.write().phone = v,
                    }
                    FormField {
                        label: "Specialization",
                        value: draft().specialization,
                        placeholder: "e.g. Employment Lawyer",
                        on_input: move |v| draft.write().specialization = v,
                    }
                    FormField {
                        label: "Experience (years)",
                        value: draft().experience.map(|e| e.to_string()).unwrap_or_default(),
                        placeholder: "0",
                        on_input: move |v: String| draft.write().experience = v.parse().ok(),
                    }
                }
                FormTextarea {
                    label: "Bio",
                    value: draft().bio,
                    placeholder: "Short professional bio",
                    on_input: move |v| draft.write().bio = v,
                }
                button {
                    class: "dc-btn dc-btn--primary dc-btn--block",
                    onclick: submit,
                    "Add Attorney"
                }
            }
        }
    }
}

#[component]
fn AttorneyCard(
    attorney: Attorney,
    on_view: EventHandler<EntityId>,
    on_delete: EventHandler<EntityId>,
) -> Element {
    let id = attorney.id;
    let rating = stars(attorney.rating);
    rsx! {
        article { class: "dc-card dc-entity-card dc-entity-card--center",
            AvatarBubble { name: attorney.name.clone() }
            h3 { "{attorney.name}" }
            p { class: "dc-entity-sub", "{attorney.specialization}" }
            p { class: "dc-rating", "{rating} {attorney.rating}" }
            div { class: "dc-entity-meta",
                span { "{attorney.experience} years experience" }
                span { "{attorney.active_cases} active cases" }
            }
            footer { class: "dc-entity-actions",
                button { class: "dc-btn", onclick: move |_| on_view.call(id), "View Profile" }
                button {
                    class: "dc-btn dc-btn--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
