//! UI components for the D-CASE application.
//!
//! Modules mirror the sidebar: one module per content screen, plus the
//! persistent app shell and a handful of shared building blocks.
//!
//! # Context Providers
//!
//! The app root owns one list controller per entity kind and provides each
//! through Dioxus context. Components reach them with the `use_*` helpers:
//!
//! ```ignore
//! let mut clients = use_clients();
//! clients.write().set_query("jane");
//! let visible = clients.read().visible();
//! ```
//!
//! Navigation state is a [`Navigator`] in context as well; screens switch
//! views through it rather than knowing about each other.

mod app_shell;
mod attorneys;
mod billing;
mod calendar;
mod cases;
mod clients;
mod dashboard;
mod documents;
mod reports;
mod shared;

pub use app_shell::{Footer, Navigator, Sidebar, View};

use dcase_core::controller::ListController;
use dcase_core::fixtures;
use dcase_core::model::{Appointment, Attorney, Case, Client, Document, Invoice};
use dcase_core::store::EntityStore;
use dioxus::prelude::*;

use attorneys::{AttorneyDetailView, AttorneysView};
use billing::BillingView;
use calendar::CalendarView;
use cases::{CaseDetailView, CasesView};
use clients::{ClientDetailView, ClientsView};
use dashboard::DashboardView;
use documents::DocumentsView;
use reports::ReportsView;

const MAIN_CSS: Asset = asset!("/assets/dcase.css");

pub fn use_navigator() -> Signal<Navigator> {
    use_context()
}

pub fn use_clients() -> Signal<ListController<Client>> {
    use_context()
}

pub fn use_cases() -> Signal<ListController<Case>> {
    use_context()
}

pub fn use_attorneys() -> Signal<ListController<Attorney>> {
    use_context()
}

pub fn use_invoices() -> Signal<ListController<Invoice>> {
    use_context()
}

pub fn use_appointments() -> Signal<ListController<Appointment>> {
    use_context()
}

pub fn use_documents() -> Signal<ListController<Document>> {
    use_context()
}

/// Application root: seeds the stores, provides context, and routes the
/// active [`View`] to its screen.
#[component]
pub fn App() -> Element {
    let nav = use_context_provider(|| Signal::new(Navigator::new()));
    use_context_provider(|| {
        Signal::new(ListController::new(EntityStore::seeded(
            fixtures::seed_clients(),
        )))
    });
    use_context_provider(|| {
        Signal::new(ListController::new(EntityStore::seeded(
            fixtures::seed_cases(),
        )))
    });
    use_context_provider(|| {
        Signal::new(ListController::new(EntityStore::seeded(
            fixtures::seed_attorneys(),
        )))
    });
    use_context_provider(|| {
        Signal::new(ListController::new(EntityStore::seeded(
            fixtures::seed_invoices(),
        )))
    });
    use_context_provider(|| {
        Signal::new(ListController::new(EntityStore::seeded(
            fixtures::seed_appointments(),
        )))
    });
    use_context_provider(|| {
        Signal::new(ListController::new(EntityStore::seeded(
            fixtures::seed_documents(),
        )))
    });

    let view = nav.read().current();

    let screen = match view {
        View::Dashboard => rsx! { DashboardView {} },
        View::Clients => rsx! { ClientsView {} },
        View::Cases => rsx! { CasesView {} },
        View::Calendar => rsx! { CalendarView {} },
        View::Attorneys => rsx! { AttorneysView {} },
        View::Documents => rsx! { DocumentsView {} },
        View::Billing => rsx! { BillingView {} },
        View::Reports => rsx! { ReportsView {} },
        View::ClientDetail(id) => rsx! { ClientDetailView { id } },
        View::CaseDetail(id) => rsx! { CaseDetailView { id } },
        View::AttorneyDetail(id) => rsx! { AttorneyDetailView { id } },
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "dc-app",
            Sidebar { active: view }
            div { class: "dc-main",
                main { class: "dc-content", {screen} }
                Footer {}
            }
        }
    }
}
