//! End-to-end tests over the seeded stores.
//!
//! These tests exercise the workflows the UI drives: seed the stores,
//! search and facet a list, create and delete records, resolve detail
//! views with their joins, and export a report.

use pretty_assertions::assert_eq;

use dcase_core::calendar::{appointments_on, MonthCursor};
use dcase_core::controller::ListController;
use dcase_core::error::StoreError;
use dcase_core::export::{export_report, ReportFormat};
use dcase_core::filter::filter_records;
use dcase_core::fixtures;
use dcase_core::model::{
    Case, CaseDraft, Client, ClientDraft, EntityId, InvoiceDraft,
};
use dcase_core::reports::{billing_summary, ReportPeriod, ReportType};
use dcase_core::resolve::{resolve_attorney, resolve_case, resolve_client};
use dcase_core::store::EntityStore;

// ============================================================================
// Client lifecycle
// ============================================================================

#[test]
fn create_list_delete_resolve_round_trip() {
    let mut clients = EntityStore::seeded(fixtures::seed_clients());
    let cases = EntityStore::seeded(fixtures::seed_cases());
    let existing: Vec<EntityId> = clients.list().iter().map(|c| c.id).collect();

    let added = clients
        .add(ClientDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ..ClientDraft::default()
        })
        .unwrap();

    // Exactly one new record, with an id unlike any pre-existing one.
    assert_eq!(clients.len(), existing.len() + 1);
    assert!(!existing.contains(&added.id));
    assert_eq!(
        clients.list().iter().filter(|c| c.id == added.id).count(),
        1
    );

    clients.remove(added.id);
    assert!(resolve_client(&clients, &cases, added.id).is_none());
}

#[test]
fn blank_required_fields_never_change_any_collection() {
    let mut clients = EntityStore::<Client>::seeded(fixtures::seed_clients());
    let mut cases = EntityStore::<Case>::seeded(fixtures::seed_cases());
    let (n_clients, n_cases) = (clients.len(), cases.len());

    assert!(clients.add(ClientDraft::default()).is_err());
    assert!(cases
        .add(CaseDraft {
            title: "Orphan Filing".to_string(),
            client: "John Doe".to_string(),
            attorney: "".to_string(),
            ..CaseDraft::default()
        })
        .is_err());

    assert_eq!(clients.len(), n_clients);
    assert_eq!(cases.len(), n_cases);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn empty_query_is_identity_for_every_kind() {
    fn is_identity<T: dcase_core::filter::Searchable + PartialEq>(records: &[T]) {
        let kept = filter_records(records, "", None);
        assert_eq!(kept.len(), records.len());
        assert!(kept.iter().zip(records.iter()).all(|(a, b)| **a == *b));
    }
    is_identity(&fixtures::seed_clients());
    is_identity(&fixtures::seed_cases());
    is_identity(&fixtures::seed_attorneys());
    is_identity(&fixtures::seed_invoices());
    is_identity(&fixtures::seed_appointments());
    is_identity(&fixtures::seed_documents());
}

// ============================================================================
// Detail resolution and joins
// ============================================================================

#[test]
fn client_join_returns_all_name_matches_in_store_order() {
    let clients = EntityStore::seeded(fixtures::seed_clients());
    let mut cases = EntityStore::seeded(fixtures::seed_cases());

    // Two more cases for John Doe on top of the seeded one.
    for title in ["Trademark Opposition", "Lease Dispute"] {
        cases
            .add(CaseDraft {
                title: title.to_string(),
                client: "John Doe".to_string(),
                attorney: "Sarah Johnson".to_string(),
                ..CaseDraft::default()
            })
            .unwrap();
    }

    let detail = resolve_client(&clients, &cases, EntityId::from_u64(1)).unwrap();
    let titles: Vec<&str> = detail.cases.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Business Litigation Case",
            "Trademark Opposition",
            "Lease Dispute"
        ]
    );
}

#[test]
fn attorney_join_follows_reassignment() {
    let attorneys = EntityStore::seeded(fixtures::seed_attorneys());
    let mut cases = EntityStore::seeded(fixtures::seed_cases());

    let case_id = cases.list()[1].id;
    cases
        .update(
            case_id,
            CaseDraft {
                attorney: "Ms. Sophia".to_string(),
                ..CaseDraft::default()
            },
        )
        .unwrap();

    let detail = resolve_attorney(&attorneys, &cases, EntityId::from_u64(3)).unwrap();
    assert_eq!(detail.cases.len(), 1);
    assert_eq!(detail.cases[0].title, "Family Custody Case");
    // The rest of the record was untouched by the partial update.
    assert_eq!(detail.cases[0].client, "Jane Smith");
}

#[test]
fn unknown_ids_resolve_to_not_found_everywhere() {
    let clients = EntityStore::seeded(fixtures::seed_clients());
    let cases = EntityStore::seeded(fixtures::seed_cases());
    let attorneys = EntityStore::seeded(fixtures::seed_attorneys());
    let ghost = EntityId::from_u64(9999);

    assert!(resolve_client(&clients, &cases, ghost).is_none());
    assert!(resolve_case(&cases, ghost).is_none());
    assert!(resolve_attorney(&attorneys, &cases, ghost).is_none());
}

// ============================================================================
// Billing
// ============================================================================

#[test]
fn new_invoices_are_numbered_from_the_collection_size() {
    let mut invoices = ListController::new(EntityStore::seeded(fixtures::seed_invoices()));
    let added = invoices
        .add(InvoiceDraft {
            client: "John Doe".to_string(),
            amount: 950.0,
            due_date: "2025-02-01".to_string(),
            description: "Deposition preparation".to_string(),
        })
        .unwrap();

    let year = dcase_core::model::today()[..4].to_string();
    assert_eq!(added.invoice_number, format!("INV-{year}-004"));

    // The new Pending invoice moves the pending bucket, nothing else.
    let summary = billing_summary(invoices.list());
    assert_eq!(summary.total_revenue, 5500.0);
    assert_eq!(summary.pending_amount, 3200.0 + 950.0);
    assert_eq!(summary.overdue_amount, 7800.0);

    let err = invoices
        .add(InvoiceDraft {
            client: "John Doe".to_string(),
            amount: 0.0,
            due_date: String::new(),
            description: "Zero-value line".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, StoreError::Validation("amount"));
}

// ============================================================================
// Calendar
// ============================================================================

#[test]
fn appointment_appears_only_in_its_own_cell() {
    let appointments = fixtures::seed_appointments();
    let january = MonthCursor::new(2025, 1);

    for cell in january.grid() {
        let Some(day) = cell else { continue };
        let date = january.cell_date(day);
        let hits = appointments_on(&appointments, &date);
        match day {
            15 | 20 | 22 => assert_eq!(hits.len(), 1, "day {day}"),
            _ => assert!(hits.is_empty(), "day {day}"),
        }
    }

    // The same dates in another month match nothing.
    let february = january.next();
    assert!(appointments_on(&appointments, &february.cell_date(20)).is_empty());
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn csv_export_round_trips_field_values() {
    let snapshot = fixtures::report_snapshot();
    let payload = export_report(
        &snapshot,
        ReportType::Overview,
        ReportPeriod::Monthly,
        ReportFormat::Csv,
        "2025-01-20",
    );

    assert_eq!(payload.filename, "D-CASE_overview_Report_2025-01-20.csv");
    let text = payload.text().into_owned();
    let lines: Vec<&str> = text.lines().collect();
    let n = snapshot.kpis.len() + snapshot.outcomes.len() + snapshot.attorneys.len();
    assert_eq!(lines.len(), n + 1);

    // Attorney rows sit last; splitting on commas recovers their fields.
    let last: Vec<&str> = lines[lines.len() - 1].split(',').collect();
    assert_eq!(last, vec!["Attorney", "Mr. Jacob", "8", "4.6", "25000"]);
}
