//! Case detail screen. Cases embed their party names, so there is no join
//! here; the timeline and document list render straight off the record.

use dcase_core::model::EntityId;
use dcase_core::resolve::resolve_case;
use dioxus::prelude::*;

use crate::components::shared::{EmptyState, StatusBadge};
use crate::components::{use_cases, use_navigator};

#[component]
pub fn CaseDetailView(id: EntityId) -> Element {
    let cases = use_cases();
    let mut nav = use_navigator();

    let case = {
        let cases = cases.read();
        resolve_case(cases.store(), id)
    };

    let Some(case) = case else {
        return rsx! {
            div { class: "dc-page",
                button {
                    class: "dc-btn dc-btn--ghost",
                    onclick: move |_| nav.write().back(),
                    "← Back to Cases"
                }
                EmptyState { message: "Case not found." }
            }
        };
    };

    rsx! {
        div { class: "dc-page",
            button {
                class: "dc-btn dc-btn--ghost",
                onclick: move |_| nav.write().back(),
                "← Back to Cases"
            }

            section { class: "dc-card",
                header { class: "dc-entity-head",
                    div { class: "dc-entity-title",
                        h1 { class: "dc-page-title", "{case.title}" }
                        p { class: "dc-entity-sub", "{case.case_type}" }
                    }
                    div { class: "dc-badge-row",
                        StatusBadge { label: case.status.to_string() }
                        StatusBadge { label: case.priority.to_string() }
                    }
                }
                dl { class: "dc-detail-list",
                    dt { "Client" }
                    dd { "{case.client}" }
                    dt { "Attorney" }
                    dd { "{case.attorney}" }
                    dt { "Deadline" }
                    dd { "{case.deadline}" }
                }
                p { class: "dc-detail-notes", "{case.description}" }
                if let Some(progress) = case.progress {
                    div { class: "dc-progress-labeled",
                        span { class: "dc-entity-sub", "Progress: {progress}%" }
                        div { class: "dc-progress",
                            div { class: "dc-progress-bar", style: "width: {progress}%;" }
                        }
                    }
                }
            }

            if let Some(timeline) = case.timeline.clone() {
                section { class: "dc-card",
                    h2 { class: "dc-section-title", "Timeline" }
                    for entry in timeline {
                        article { class: "dc-timeline-entry",
                            span { class: "dc-timeline-date", "{entry.date}" }
                            div {
                                h3 { class: "dc-related-title", "{entry.event}" }
                                p { class: "dc-entity-sub", "{entry.description}" }
                            }
                        }
                    }
                }
            }

            if let Some(documents) = case.documents.clone() {
                section { class: "dc-card",
                    h2 { class: "dc-section-title", "Documents" }
                    ul { class: "dc-doc-list",
                        for name in documents {
                            li { "{name}" }
                        }
                    }
                }
            }
        }
    }
}
