use dcase_core::model::EntityId;
use dioxus::prelude::*;

use crate::components::use_navigator;

/// The screens the app can show. Detail views carry the id they resolve;
/// an id with no matching record renders that screen's not-found
/// placeholder rather than crashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Clients,
    Cases,
    Calendar,
    Attorneys,
    Documents,
    Billing,
    Reports,
    ClientDetail(EntityId),
    CaseDetail(EntityId),
    AttorneyDetail(EntityId),
}

impl View {
    /// The list screen a view belongs to; list screens map to themselves.
    pub fn list_parent(&self) -> View {
        match self {
            View::ClientDetail(_) => View::Clients,
            View::CaseDetail(_) => View::Cases,
            View::AttorneyDetail(_) => View::Attorneys,
            other => *other,
        }
    }

    /// The path this view is addressed by (`/clients/3`).
    pub fn path(&self) -> String {
        match self {
            View::Dashboard => "/".to_string(),
            View::Clients => "/clients".to_string(),
            View::Cases => "/cases".to_string(),
            View::Calendar => "/calendar".to_string(),
            View::Attorneys => "/attorneys".to_string(),
            View::Documents => "/documents".to_string(),
            View::Billing => "/billing".to_string(),
            View::Reports => "/reports".to_string(),
            View::ClientDetail(id) => format!("/clients/{id}"),
            View::CaseDetail(id) => format!("/cases/{id}"),
            View::AttorneyDetail(id) => format!("/attorneys/{id}"),
        }
    }

    /// Parses a path back into a view. A well-formed detail path with an
    /// unknown id still parses; the detail screen renders its not-found
    /// placeholder for it. Malformed paths yield `None`.
    pub fn parse_path(path: &str) -> Option<View> {
        let mut segments = path.trim_matches('/').splitn(2, '/');
        let head = segments.next().unwrap_or("");
        let rest = segments.next();
        match (head, rest) {
            ("", None) => Some(View::Dashboard),
            ("clients", None) => Some(View::Clients),
            ("cases", None) => Some(View::Cases),
            ("calendar", None) => Some(View::Calendar),
            ("attorneys", None) => Some(View::Attorneys),
            ("documents", None) => Some(View::Documents),
            ("billing", None) => Some(View::Billing),
            ("reports", None) => Some(View::Reports),
            ("clients", Some(id)) => id.parse().ok().map(View::ClientDetail),
            ("cases", Some(id)) => id.parse().ok().map(View::CaseDetail),
            ("attorneys", Some(id)) => id.parse().ok().map(View::AttorneyDetail),
            _ => None,
        }
    }
}

/// Single-level navigation history.
///
/// `go` remembers the view it left so detail screens can offer "back"
/// without knowing where the user came from. Only one level is kept: a
/// second back lands on the current screen's list parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: View,
    prior: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: View::Dashboard,
            prior: View::Dashboard,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn go(&mut self, to: View) {
        if to != self.current {
            self.prior = self.current;
            self.current = to;
        }
    }

    pub fn back(&mut self) {
        self.current = self.prior;
        self.prior = self.current.list_parent();
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

const MENU_ITEMS: [(View, &str); 8] = [
    (View::Dashboard, "Dashboard"),
    (View::Clients, "Clients"),
    (View::Cases, "Cases"),
    (View::Calendar, "Appointments"),
    (View::Attorneys, "Attorneys"),
    (View::Documents, "Documents"),
    (View::Billing, "Billing"),
    (View::Reports, "Reports"),
];

/// Persistent side menu. The active entry follows the current view's list
/// parent, so detail screens keep their section highlighted.
#[component]
pub fn Sidebar(active: View) -> Element {
    let mut nav = use_navigator();
    let section = active.list_parent();
    let items: Vec<(View, &str, String)> = MENU_ITEMS
        .iter()
        .map(|(view, label)| (*view, *label, view.path()))
        .collect();

    rsx! {
        aside { class: "dc-sidebar",
            div { class: "dc-sidebar-header",
                div { class: "dc-sidebar-mark", "§" }
                div {
                    h2 { class: "dc-sidebar-title", "D-CASE" }
                    p { class: "dc-sidebar-subtitle", "Legal Management" }
                }
            }
            nav { class: "dc-sidebar-menu",
                for (view, label, path) in items {
                    button {
                        key: "{path}",
                        class: if view == section {
                            "dc-menu-item dc-menu-item--active"
                        } else {
                            "dc-menu-item"
                        },
                        title: "{path}",
                        onclick: move |_| nav.write().go(view),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_is_a_single_level_pop() {
        let mut nav = Navigator::new();
        nav.go(View::Clients);
        nav.go(View::ClientDetail(EntityId::from_u64(1)));
        nav.back();
        assert_eq!(nav.current(), View::Clients);
    }

    #[test]
    fn detail_to_detail_back_returns_to_the_first_detail() {
        let mut nav = Navigator::new();
        nav.go(View::ClientDetail(EntityId::from_u64(1)));
        nav.go(View::CaseDetail(EntityId::from_u64(2)));
        nav.back();
        assert_eq!(nav.current(), View::ClientDetail(EntityId::from_u64(1)));
        // No deeper stack: the next back falls out to the list.
        nav.back();
        assert_eq!(nav.current(), View::Clients);
    }

    #[test]
    fn navigating_to_the_current_view_does_not_clobber_history() {
        let mut nav = Navigator::new();
        nav.go(View::Billing);
        nav.go(View::Billing);
        nav.back();
        assert_eq!(nav.current(), View::Dashboard);
    }

    #[test]
    fn paths_round_trip_through_parse() {
        let views = [
            View::Dashboard,
            View::Clients,
            View::Reports,
            View::ClientDetail(EntityId::from_u64(3)),
            View::CaseDetail(EntityId::from_u64(12)),
            View::AttorneyDetail(EntityId::from_u64(2)),
        ];
        for view in views {
            assert_eq!(View::parse_path(&view.path()), Some(view));
        }
    }

    #[test]
    fn unknown_detail_ids_still_parse_but_garbage_does_not() {
        // An unmatched id is a valid address; it renders the not-found state.
        assert_eq!(
            View::parse_path("/clients/9999"),
            Some(View::ClientDetail(EntityId::from_u64(9999)))
        );
        assert_eq!(View::parse_path("/clients/not-a-number"), None);
        assert_eq!(View::parse_path("/nonsense"), None);
    }
}
