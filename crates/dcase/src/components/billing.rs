//! Billing screen: invoice totals, searchable invoice list, and the
//! create-invoice dialog. Totals are recomputed from the store on every
//! render rather than cached anywhere.

use dcase_core::model::{EntityId, Invoice, InvoiceDraft};
use dcase_core::reports::billing_summary;
use dioxus::prelude::*;

use crate::components::shared::{
    Dialog, EmptyState, FormField, FormTextarea, SearchBox, StatCard, StatusBadge,
};
use crate::components::use_invoices;
use crate::utils::formatting::dollars;

#[component]
pub fn BillingView() -> Element {
    let mut invoices = use_invoices();
    let mut dialog_open = use_signal(|| false);
    let mut draft = use_signal(InvoiceDraft::default);
    let mut amount_text = use_signal(String::new);

    let (visible, query, summary) = {
        let controller = invoices.read();
        (
            controller
                .visible()
                .into_iter()
                .cloned()
                .collect::<Vec<Invoice>>(),
            controller.query().to_string(),
            billing_summary(controller.list()),
        )
    };

    let submit = move |_| {
        let mut payload = draft();
        payload.amount = amount_text().parse().unwrap_or(0.0);
        if invoices.write().add(payload).is_ok() {
            draft.set(InvoiceDraft::default());
            amount_text.set(String::new());
            dialog_open.set(false);
        }
    };

    rsx! {
        div { class: "dc-page",
            header { class: "dc-page-header",
                h1 { class: "dc-page-title", "Billing & Invoicing" }
                button {
                    class: "dc-btn dc-btn--primary",
                    onclick: move |_| {
                        draft.set(InvoiceDraft::default());
                        amount_text.set(String::new());
                        dialog_open.set(true);
                    },
                    "+ Create Invoice"
                }
            }

            div { class: "dc-stat-grid",
                StatCard {
                    label: "Total Revenue",
                    value: dollars(summary.total_revenue),
                    tone: "green",
                }
                StatCard {
                    label: "Pending Amount",
                    value: dollars(summary.pending_amount),
                    tone: "yellow",
                }
                StatCard {
                    label: "Overdue Amount",
                    value: dollars(summary.overdue_amount),
                    tone: "red",
                }
            }

            div { class: "dc-toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search invoices by client or number…",
                    on_input: move |q: String| invoices.write().set_query(q),
                }
            }

            div { class: "dc-row-list",
                for invoice in visible.clone() {
                    InvoiceRow {
                        key: "{invoice.id}",
                        invoice: invoice.clone(),
                        on_delete: move |id| invoices.write().remove(id),
                    }
                }
            }
            if visible.is_empty() {
                EmptyState { message: "No invoices found matching your search." }
            }

            Dialog { title: "Create New Invoice", open: dialog_open,
                FormField {
                    label: "Client",
                    value: draft().client,
                    placeholder: "Enter client name",
                    on_input: move |v| draft.write().client = v,
                }
                div { class: "dc-form-grid",
                    FormField {
                        label: "Amount ($)",
                        value: amount_text(),
                        placeholder: "0.00",
                        on_input: move |v| amount_text.set(v),
                    }
                    FormField {
                        label: "Due Date",
                        value: draft().due_date,
                        placeholder: "YYYY-MM-DD",
                        on_input: move |v| draft.write().due_date = v,
                    }
                }
                FormTextarea {
                    label: "Description",
                    value: draft().description,
                    placeholder: "Describe the billed services",
                    on_input: move |v| draft.write().description = v,
                }
                button {
                    class: "dc-btn dc-btn--primary dc-btn--block",
                    onclick: submit,
                    "Create Invoice"
                }
            }
        }
    }
}

#[component]
fn InvoiceRow(invoice: Invoice, on_delete: EventHandler<EntityId>) -> Element {
    let id = invoice.id;
    let amount = dollars(invoice.amount);
    rsx! {
        article { class: "dc-card dc-doc-row",
            div { class: "dc-entity-title",
                h3 { "{invoice.invoice_number}" }
                p { class: "dc-entity-sub", "{invoice.client} • {invoice.description}" }
            }
            div { class: "dc-invoice-figures",
                span { class: "dc-invoice-amount", "{amount}" }
                span { class: "dc-entity-sub",
                    "Issued {invoice.issue_date} • Due {invoice.due_date}"
                }
            }
            StatusBadge { label: invoice.status.to_string() }
            footer { class: "dc-entity-actions",
                button {
                    class: "dc-btn dc-btn--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
