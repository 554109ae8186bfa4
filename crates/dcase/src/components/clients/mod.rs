//! Client management screen: searchable card list plus the add/edit dialog.

mod detail;

pub use detail::ClientDetailView;

use dcase_core::model::{CaseStatus, Client, ClientDraft, EntityId};
use dioxus::prelude::*;

use crate::components::shared::{
    AvatarBubble, Dialog, EmptyState, FormField, FormSelect, FormTextarea, SearchBox, StatusBadge,
};
use crate::components::{use_clients, use_navigator, View};

#[component]
pub fn ClientsView() -> Element {
    let mut clients = use_clients();
    let mut nav = use_navigator();
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(ClientDraft::default);
    let mut editing = use_signal(|| None::<EntityId>);

    let (visible, query, facet) = {
        let controller = clients.read();
        (
            controller
                .visible()
                .into_iter()
                .cloned()
                .collect::<Vec<Client>>(),
            controller.query().to_string(),
            controller.facet().unwrap_or("all").to_string(),
        )
    };

    let submit = move |_| {
        let payload = draft();
        let saved = match editing() {
            Some(id) => clients.write().update(id, payload).is_ok(),
            None => clients.write().add(payload).is_ok(),
        };
        // A rejected draft keeps the dialog open with what was typed; the
        // source surfaces no message for it.
        if saved {
            draft.set(ClientDraft::default());
            editing.set(None);
            dialog_open.set(false);
        }
    };

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Client Management" }
                button {
                    class: "dc-btn dc-btn--primary",
                    onclick: move |_| {
                        draft.set(ClientDraft::default());
                        editing.set(None);
                        dialog_open.set(true);
                    },
                    "+ Add Client"
                }
            }

            div { class: "dc-toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search clients by name, email, or company…",
                    on_input: move |q: String| clients.write().set_query(q),
                }
                select {
                    class: "dc-select",
                    value: "{facet}",
                    onchange: move |evt| {
                        let picked = evt.value();
                        clients
                            .write()
                            .set_facet((picked != "all").then_some(picked));
                    },
                    option { value: "all", "All Statuses" }
                    for status in CaseStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
            }

            div { class: "dc-card-grid",
                for client in visible.clone() {
                    ClientCard {
                        key: "{client.id}",
                        client: client.clone(),
                        on_view: move |id| nav.write().go(View::ClientDetail(id)),
                        on_edit: move |edited: Client| {
                            draft.set(draft_from(&edited));
                            editing.set(Some(edited.id));
                            dialog_open.set(true);
                        },
                        on_delete: move |id| clients.write().remove(id),
                    }
                }
            }
            if visible.is_empty() {
                EmptyState { message: "No clients found matching your search." }
            }

            Dialog {
                title: dialog_title(editing().is_some()),
                open: dialog_open,
                div { class: "dc-form-grid",
                    FormField {
                        label: "Name",
                        value: draft().name,
                        placeholder: "Enter client name",
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
                        label: "Company",
                        value: draft().company.unwrap_or_default(),
                        placeholder: "Enter company name",
                        on_input: move |v: String| {
                            draft.write().company = (!v.is_empty()).then_some(v);
                        },
                    }
                }
                FormField {
                    label: "Address",
                    value: draft().address,
                    placeholder: "Enter address",
                    on_input: move |v| draft.write().address = v,
                }
                FormSelect {
                    label: "Case Status",
                    value: draft().case_status.unwrap_or(CaseStatus::Pending).to_string(),
                    options: CaseStatus::ALL.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    on_change: move |v: String| draft.write().case_status = CaseStatus::parse(&v),
                }
                FormTextarea {
                    label: "Notes",
                    value: draft().notes.unwrap_or_default(),
                    placeholder: "Additional notes about the client",
                    on_input: move |v: String| {
                        draft.write().notes = (!v.is_empty()).then_some(v);
                    },
                }
                button {
                    class: "dc-btn dc-btn--primary dc-btn--block",
                    onclick: submit,
                    if editing().is_some() { "Save Changes" } else { "Add Client" }
                }
            }
        }
    }
}

fn dialog_title(editing: bool) -> String {
    let title = if editing { "Edit Client" } else { "Add New Client" };
    title.to_string()
}

fn draft_from(client: &Client) -> ClientDraft {
    ClientDraft {
        name: client.name.clone(),
        email: client.email.clone(),
        phone: client.phone.clone(),
        address: client.address.clone(),
        case_status: Some(client.case_status),
        company: client.company.clone(),
        notes: client.notes.clone(),
        social_media: client.social_media.clone(),
    }
}

#[component]
fn ClientCard(
    client: Client,
    on_view: EventHandler<EntityId>,
    on_edit: EventHandler<Client>,
    on_delete: EventHandler<EntityId>,
) -> Element {
    let id = client.id;
    let for_edit = client.clone();
    rsx! {
        article { class: "dc-card dc-entity-card",
            header { class: "dc-entity-head",
                AvatarBubble { name: client.name.clone() }
                div { class: "dc-entity-title",
                    h3 { "{client.name}" }
                    if let Some(company) = &client.company {
                        p { class: "dc-entity-sub", "{company}" }
                    }
                }
                StatusBadge { label: client.case_status.to_string() }
            }
            div { class: "dc-entity-meta",
                span { "{client.email}" }
                span { "{client.phone}" }
                span { "Joined {client.join_date}" }
            }
            footer { class: "dc-entity-actions",
                button { class: "dc-btn", onclick: move |_| on_view.call(id), "View" }
                button { class: "dc-btn", onclick: move |_| on_edit.call(for_edit.clone()), "Edit" }
                button {
                    class: "dc-btn dc-btn--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
