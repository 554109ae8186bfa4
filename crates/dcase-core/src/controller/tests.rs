//! Tests for the entity list controller.

use pretty_assertions::assert_eq;

use super::*;
use crate::fixtures::{seed_documents, seed_invoices};
use crate::model::{Document, DocumentDraft, Invoice, InvoiceDraft};
use crate::store::EntityStore;

fn invoices() -> ListController<Invoice> {
    ListController::new(EntityStore::seeded(seed_invoices()))
}

fn documents() -> ListController<Document> {
    ListController::new(EntityStore::seeded(seed_documents()))
}

#[test]
fn visible_defaults_to_the_full_collection() {
    let controller = invoices();
    assert_eq!(controller.visible().len(), controller.len());
}

#[test]
fn query_narrows_and_clearing_restores() {
    let mut controller = invoices();
    controller.set_query("INV-2024-002");
    let hits = controller.visible();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].client, "Jane Smith");

    controller.set_query("");
    assert_eq!(controller.visible().len(), controller.len());
}

#[test]
fn facet_composes_with_query() {
    let mut controller = documents();
    controller.set_facet(Some("Evidence".to_string()));
    assert_eq!(controller.visible().len(), 1);

    controller.set_query("John");
    assert!(controller.visible().is_empty());

    controller.set_facet(None);
    controller.set_query("John");
    assert_eq!(controller.visible().len(), 1);
}

#[test]
fn add_appends_and_shows_up_in_visible() {
    let mut controller = invoices();
    let before = controller.len();
    let added = controller
        .add(InvoiceDraft {
            client: "Ada Lovelace".to_string(),
            amount: 1200.0,
            due_date: "2025-03-01".to_string(),
            description: "Analytical engine licensing review".to_string(),
        })
        .unwrap();
    assert_eq!(controller.len(), before + 1);
    assert_eq!(controller.visible().last().map(|i| i.id), Some(added.id));
    assert_eq!(added.status, crate::model::InvoiceStatus::Pending);
}

#[test]
fn rejected_add_changes_nothing() {
    let mut controller = documents();
    let before: Vec<_> = controller.list().to_vec();
    let err = controller.add(DocumentDraft::default()).unwrap_err();
    assert!(matches!(err, crate::error::StoreError::Validation(_)));
    assert_eq!(controller.list(), before.as_slice());
}

#[test]
fn remove_then_get_is_none() {
    let mut controller = documents();
    let id = controller.list()[0].id;
    controller.remove(id);
    assert!(controller.get(id).is_none());
}

#[test]
fn filtered_view_survives_mutation() {
    // The query stays applied while records come and go underneath it.
    let mut controller = documents();
    controller.set_query("wilson");
    assert_eq!(controller.visible().len(), 1);

    let id = controller.visible()[0].id;
    controller.remove(id);
    assert!(controller.visible().is_empty());
    assert_eq!(controller.query(), "wilson");
}
