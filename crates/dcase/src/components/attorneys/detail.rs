//! Attorney profile screen with the cases assigned to this attorney's
//! name.

use dcase_core::model::EntityId;
use dcase_core::resolve::resolve_attorney;
use dioxus::prelude::*;

use crate::components::shared::{AvatarBubble, EmptyState, StatusBadge};
use crate::components::{use_attorneys, use_cases, use_navigator, View};
use crate::utils::formatting::stars;

#[component]
pub fn AttorneyDetailView(id: EntityId) -> Element {
    let attorneys = use_attorneys();
    let cases = use_cases();
    let mut nav = use_navigator();

    let detail = {
        let attorneys = attorneys.read();
        let cases = cases.read();
        resolve_attorney(attorneys.store(), cases.store(), id)
    };

    let Some(detail) = detail else {
        return rsx! {
            div { class: "dc-page",
                button {
                    class: "dc-btn dc-btn--ghost",
                    onclick: move |_| nav.write().back(),
                    "← Back to Attorneys"
                }
                EmptyState { message: "Attorney not found." }
            }
        };
    };
    let attorney = detail.attorney;
    let rating = stars(attorney.rating);

    rsx! {
        div { class: "dc-page",
            button {
                class: "dc-btn dc-btn--ghost",
                onclick: move |_| nav.write().back(),
                "← Back to Attorneys"
            }

            div { class: "dc-detail-grid",
                section { class: "dc-card dc-detail-profile",
                    header { class: "dc-entity-head",
                        AvatarBubble { name: attorney.name.clone() }
                        div { class: "dc-entity-title",
                            h1 { class: "dc-page-title", "{attorney.name}" }
                            p { class: "dc-entity-sub", "{attorney.specialization}" }
                        }
                    }
                    p { class: "dc-rating", "{rating} {attorney.rating}" }
                    dl { class: "dc-detail-list",
                        dt { "Email" }
                        dd { "{attorney.email}" }
                        dt { "Phone" }
                        dd { "{attorney.phone}" }
                        dt { "Experience" }
                        dd { "{attorney.experience} years" }
                        dt { "Active cases" }
                        dd { "{attorney.active_cases}" }
                        dt { "Joined" }
                        dd { "{attorney.join_date}" }
                    }
                    p { class: "dc-detail-notes", "{attorney.bio}" }

                    if let Some(education) = attorney.education.clone() {
                        h2 { class: "dc-section-title", "Education" }
                        ul { class: "dc-doc-list",
                            for entry in education {
                                li { "{entry}" }
                            }
                        }
                    }
                    if let Some(certifications) = attorney.certifications.clone() {
                        h2 { class: "dc-section-title", "Certifications" }
                        ul { class: "dc-doc-list",
                            for entry in certifications {
                                li { "{entry}" }
                            }
                        }
                    }
                }

                section { class: "dc-card",
                    h2 { class: "dc-section-title", "Assigned Cases" }
                    if detail.cases.is_empty() {
                        EmptyState { message: "No cases assigned." }
                    }
                    for case in detail.cases.clone() {
                        article { class: "dc-related-row",
                            div {
                                h3 { class: "dc-related-title", "{case.title}" }
                                p { class: "dc-entity-sub",
                                    "{case.client} • Due {case.deadline}"
                                }
                            }
                            StatusBadge { label: case.status.to_string() }
                            button {
                                class: "dc-btn",
                                onclick: move |_| nav.write().go(View::CaseDetail(case.id)),
                                "Open"
                            }
                        }
                    }
                }
            }
        }
    }
}
