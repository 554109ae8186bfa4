//! Document management screen: searchable, category-faceted list with a
//! simulated upload/download flow. No real file ever moves; uploads record
//! metadata and downloads just wait out a short delay before reporting
//! success, the way the rest of the export surface does.

use dcase_core::model::{Document, DocumentCategory, DocumentDraft, EntityId};
use dioxus::prelude::*;

use crate::components::shared::{
    Dialog, EmptyState, FormField, FormSelect, SearchBox, StatusBadge, Toast, ToastView,
};
use crate::components::use_documents;
use crate::platform;

const FILE_KINDS: [&str; 5] = ["PDF", "DOCX", "XLSX", "ZIP", "Other"];

#[component]
pub fn DocumentsView() -> Element {
    let mut documents = use_documents();
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(DocumentDraft::default);
    let mut toast = use_signal(|| None::<Toast>);

    let (visible, query, facet) = {
        let controller = documents.read();
        (
            controller
                .visible()
                .into_iter()
                .cloned()
                .collect::<Vec<Document>>(),
            controller.query().to_string(),
            controller.facet().unwrap_or("all").to_string(),
        )
    };

    let submit = move |_| {
        match documents.write().add(draft()) {
            Ok(stored) => {
                toast.set(Some(Toast::success(
                    "Document Uploaded",
                    format!("{} has been successfully uploaded.", stored.name),
                )));
                draft.set(DocumentDraft::default());
                dialog_open.set(false);
            }
            Err(_) => {
                // Missing required fields: dialog stays open, nothing changes.
            }
        }
    };

    let download = move |document: Document| {
        spawn(async move {
            platform::sleep_ms(1000).await;
            toast.set(Some(Toast::success(
                "Download Started",
                format!("{} is being downloaded.", document.name),
            )));
        });
    };

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Document Management" }
                button {
                    class: "dc-btn dc-btn--primary",
                    onclick: move |_| {
                        draft.set(DocumentDraft::default());
                        dialog_open.set(true);
                    },
                    "+ Upload Document"
                }
            }

            div { class: "dc-toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search documents by name, client, or case…",
                    on_input: move |q: String| documents.write().set_query(q),
                }
                select {
                    class: "dc-select",
                    value: "{facet}",
                    onchange: move |evt| {
                        let picked = evt.value();
                        documents
                            .write()
                            .set_facet((picked != "all").then_some(picked));
                    },
                    option { value: "all", "All Categories" }
                    for category in DocumentCategory::ALL {
                        option { value: category.as_str(), "{category}" }
                    }
                }
            }

            div { class: "dc-row-list",
                for document in visible.clone() {
                    DocumentRow {
                        key: "{document.id}",
                        document: document.clone(),
                        on_download: download,
                        on_delete: move |id| {
                            let name = documents
                                .read()
                                .get(id)
                                .map(|d: &Document| d.name.clone())
                                .unwrap_or_default();
                            documents.write().remove(id);
                            toast.set(Some(Toast::success(
                                "Document Deleted",
                                format!("{name} has been deleted successfully."),
                            )));
                        },
                    }
                }
            }
            if visible.is_empty() {
                EmptyState { message: "No documents found matching your search." }
            }

            Dialog { title: "Upload Document", open: dialog_open,
                FormField {
                    label: "File Name",
                    value: draft().name,
                    placeholder: "e.g. Retainer_Agreement.pdf",
                    on_input: move |v| draft.write().name = v,
                }
                div { class: "dc-form-grid",
                    FormSelect {
                        label: "Type",
                        value: if draft().kind.is_empty() { "PDF".to_string() } else { draft().kind },
                        options: FILE_KINDS.iter().map(|k| k.to_string()).collect::<Vec<_>>(),
                        on_change: move |v| draft.write().kind = v,
                    }
                    FormSelect {
                        label: "Category",
                        value: draft().category.unwrap_or(DocumentCategory::Other).to_string(),
                        options: DocumentCategory::ALL.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                        on_change: move |v: String| {
                            draft.write().category = DocumentCategory::parse(&v);
                        },
                    }
                    FormField {
                        label: "Client",
                        value: draft().client,
                        placeholder: "Enter client name",
                        on_input: move |v| draft.write().client = v,
                    }
                    FormField {
                        label: "Case",
                        value: draft().case,
                        placeholder: "Enter case title",
                        on_input: move |v| draft.write().case = v,
                    }
                }
                button {
                    class: "dc-btn dc-btn--primary dc-btn--block",
                    onclick: submit,
                    "Upload"
                }
            }

            ToastView { toast }
        }
    }
}

#[component]
fn DocumentRow(
    document: Document,
    on_download: EventHandler<Document>,
    on_delete: EventHandler<EntityId>,
) -> Element {
    let id = document.id;
    let for_download = document.clone();
    rsx! {
        article { class: "dc-card dc-doc-row",
            div { class: "dc-doc-icon", "{document.kind}" }
            div { class: "dc-entity-title",
                h3 { "{document.name}" }
                p { class: "dc-entity-sub",
                    "{document.client} • {document.case} • {document.size} • {document.upload_date}"
                }
            }
            StatusBadge { label: document.category.to_string() }
            footer { class: "dc-entity-actions",
                button {
                    class: "dc-btn",
                    onclick: move |_| on_download.call(for_download.clone()),
                    "Download"
                }
                button {
                    class: "dc-btn dc-btn--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
