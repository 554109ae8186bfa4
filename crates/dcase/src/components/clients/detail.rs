//! Client detail screen: profile plus the cases filed under this client's
//! name.

use dcase_core::model::EntityId;
use dcase_core::resolve::resolve_client;
use dioxus::prelude::*;

use crate::components::shared::{AvatarBubble, EmptyState, StatusBadge};
use crate::components::{use_cases, use_clients, use_navigator, View};

#[component]
pub fn ClientDetailView(id: EntityId) -> Element {
    let clients = use_clients();
    let cases = use_cases();
    let mut nav = use_navigator();

    let detail = {
        let clients = clients.read();
        let cases = cases.read();
        resolve_client(clients.store(), cases.store(), id)
    };

    let Some(detail) = detail else {
        return rsx! {
            div { class: "dc-page",
                button {
                    class: "dc-btn dc-btn--ghost",
                    onclick: move |_| nav.write().back(),
                    "← Back to Clients"
                }
                EmptyState { message: "Client not found." }
            }
        };
    };
    let client = detail.client;

    rsx! {
        div { class: "dc-page",
            button {
                class: "dc-btn dc-btn--ghost",
                onclick: move |_| nav.write().back(),
                "← Back to Clients"
            }

            div { class: "dc-detail-grid",
                section { class: "dc-card dc-detail-profile",
                    header { class: "dc-entity-head",
                        AvatarBubble { name: client.name.clone() }
                        div { class: "dc-entity-title",
                            h1 { class: "dc-page-title", "{client.name}" }
                            if let Some(company) = &client.company {
                                p { class: "dc-entity-sub", "{company}" }
                            }
                        }
                        StatusBadge { label: client.case_status.to_string() }
                    }
                    dl { class: "dc-detail-list",
                        dt { "Email" }
                        dd { "{client.email}" }
                        dt { "Phone" }
                        dd { "{client.phone}" }
                        dt { "Address" }
                        dd { "{client.address}" }
                        dt { "Client since" }
                        dd { "{client.join_date}" }
                    }
                    if let Some(notes) = &client.notes {
                        p { class: "dc-detail-notes", "{notes}" }
                    }
                    if let Some(links) = &client.social_media {
                        div { class: "dc-social-row",
                            if let Some(url) = &links.linkedin {
                                a { class: "dc-social-link", href: "{url}", "LinkedIn" }
                            }
                            if let Some(url) = &links.twitter {
                                a { class: "dc-social-link", href: "{url}", "Twitter" }
                            }
                            if let Some(url) = &links.facebook {
                                a { class: "dc-social-link", href: "{url}", "Facebook" }
                            }
                            if let Some(url) = &links.instagram {
                                a { class: "dc-social-link", href: "{url}", "Instagram" }
                            }
                        }
                    }
                }

                section { class: "dc-card",
                    h2 { class: "dc-section-title", "Cases" }
                    if detail.cases.is_empty() {
                        EmptyState { message: "No cases assigned." }
                    }
                    for case in detail.cases.clone() {
                        article { class: "dc-related-row",
                            div {
                                h3 { class: "dc-related-title", "{case.title}" }
                                p { class: "dc-entity-sub",
                                    "{case.case_type} • {case.attorney} • Due {case.deadline}"
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
