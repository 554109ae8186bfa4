//! Case management screen.

mod detail;

pub use detail::CaseDetailView;

use dcase_core::model::{Case, CaseDraft, CasePriority, CaseStatus, EntityId};
use dioxus::prelude::*;

use crate::components::shared::{
    Dialog, EmptyState, FormField, FormSelect, FormTextarea, SearchBox, StatusBadge,
};
use crate::components::{use_cases, use_navigator, View};

#[component]
pub fn CasesView() -> Element {
    let mut cases = use_cases();
    let mut nav = use_navigator();
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(CaseDraft::default);

    let (visible, query) = {
        let controller = cases.read();
        (
            controller
                .visible()
                .into_iter()
                .cloned()
                .collect::<Vec<Case>>(),
            controller.query().to_string(),
        )
    };

    let submit = move |_| {
        if cases.write().add(draft()).is_ok() {
            draft.set(CaseDraft::default());
            dialog_open.set(false);
        }
    };

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Case Management" }
                button {
                    class: "dc-btn dc-btn--primary",
                    onclick: move |_| {
                        draft.set(CaseDraft::default());
                        dialog_open.set(true);
                    },
                    "+ Add Case"
                }
            }

            div { class: "dc-toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search cases by title, client, or attorney…",
                    on_input: move |q: String| cases.write().set_query(q),
                }
            }

            div { class: "dc-card-grid",
                for case in visible.clone() {
                    CaseCard {
                        key: "{case.id}",
                        case: case.clone(),
                        on_view: move |id| nav.write().go(View::CaseDetail(id)),
                        on_delete: move |id| cases.write().remove(id),
                    }
                }
            }
            if visible.is_empty() {
                EmptyState { message: "No cases found matching your search." }
            }

            Dialog { title: "Add New Case", open: dialog_open,
                div { class: "dc-form-grid",
                    FormField {
                        label: "Title",
                        value: draft().title,
                        placeholder: "Enter case title",
                        on_input: move |v| draft.write().title = v,
                    }
                    FormField {
                        label: "Case Type",
                        value: draft().case_type,
                        placeholder: "e.g. Business Law",
                        on_input: move |v| draft.write().case_type = v,
                    }
                    FormField {
                        label: "Client",
                        value: draft().client,
                        placeholder: "Enter client name",
                        on_input: move |v| draft.write().client = v,
                    }
                    FormField {
                        label: "Attorney",
                        value: draft().attorney,
                        placeholder: "Enter attorney name",
                        on_input: move |v| draft.write().attorney = v,
                    }
                    FormSelect {
                        label: "Status",
                        value: draft().status.unwrap_or(CaseStatus::Pending).to_string(),
                        options: CaseStatus::ALL.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                        on_change: move |v: String| draft.write().status = CaseStatus::parse(&v),
                    }
                    FormSelect {
                        label: "Priority",
                        value: draft().priority.unwrap_or(CasePriority::Medium).to_string(),
                        options: CasePriority::ALL.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
                        on_change: move |v: String| draft.write().priority = CasePriority::parse(&v),
                    }
                }
                FormField {
                    label: "Deadline",
                    value: draft().deadline,
                    placeholder: "YYYY-MM-DD",
                    on_input: move |v| draft.write().deadline = v,
                }
                FormTextarea {
                    label: "Description",
                    value: draft().description,
                    placeholder: "Describe the case",
                    on_input: move |v| draft.write().description = v,
                }
                button {
                    class: "dc-btn dc-btn--primary dc-btn--block",
                    onclick: submit,
                    "Add Case"
                }
            }
        }
    }
}

#[component]
fn CaseCard(case: Case, on_view: EventHandler<EntityId>, on_delete: EventHandler<EntityId>) -> Element {
    let id = case.id;
    rsx! {
        article { class: "dc-card dc-entity-card",
            header { class: "dc-entity-head",
                div { class: "dc-entity-title",
                    h3 { "{case.title}" }
                    p { class: "dc-entity-sub", "{case.case_type}" }
                }
                div { class: "dc-badge-row",
                    StatusBadge { label: case.status.to_string() }
                    StatusBadge { label: case.priority.to_string() }
                }
            }
            div { class: "dc-entity-meta",
                span { "Client: {case.client}" }
                span { "Attorney: {case.attorney}" }
                span { "Deadline: {case.deadline}" }
            }
            if let Some(progress) = case.progress {
                div { class: "dc-progress",
                    div { class: "dc-progress-bar", style: "width: {progress}%;" }
                }
            }
            footer { class: "dc-entity-actions",
                button { class: "dc-btn", onclick: move |_| on_view.call(id), "View" }
                button {
                    class: "dc-btn dc-btn--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
