//! Detail resolution.
//!
//! Backs the single-record views: look a record up by id and join any
//! related sub-collections. Joins are exact string matches on denormalized
//! names, kept deliberately as documented weak references: two clients with
//! the same name would merge their joined case lists, and the source this
//! dashboard reproduces offers no disambiguation, so none is invented here.
//!
//! "Not found" is a valid terminal display state (`None`), not an error,
//! and a join that matches nothing is an explicit empty list.

use crate::model::{Attorney, Case, Client, EntityId};
use crate::store::EntityStore;

/// A resolved client with the cases filed under their name, store order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetail {
    pub client: Client,
    pub cases: Vec<Case>,
}

/// A resolved attorney with the cases assigned to their name, store order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttorneyDetail {
    pub attorney: Attorney,
    pub cases: Vec<Case>,
}

/// Resolves a client by id and joins cases where `case.client` equals the
/// client's name exactly.
pub fn resolve_client(
    clients: &EntityStore<Client>,
    cases: &EntityStore<Case>,
    id: EntityId,
) -> Option<ClientDetail> {
    let client = clients.get(id)?.clone();
    let cases = cases
        .list()
        .iter()
        .filter(|c| c.client == client.name)
        .cloned()
        .collect();
    Some(ClientDetail { client, cases })
}

/// Resolves a case by id. Cases embed their party names, so there is no
/// further join.
pub fn resolve_case(cases: &EntityStore<Case>, id: EntityId) -> Option<Case> {
    cases.get(id).cloned()
}

/// Resolves an attorney by id and joins cases where `case.attorney` equals
/// the attorney's name exactly.
pub fn resolve_attorney(
    attorneys: &EntityStore<Attorney>,
    cases: &EntityStore<Case>,
    id: EntityId,
) -> Option<AttorneyDetail> {
    let attorney = attorneys.get(id)?.clone();
    let cases = cases
        .list()
        .iter()
        .filter(|c| c.attorney == attorney.name)
        .cloned()
        .collect();
    Some(AttorneyDetail { attorney, cases })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{seed_attorneys, seed_cases, seed_clients};

    #[test]
    fn client_detail_joins_cases_by_exact_name() {
        let clients = EntityStore::seeded(seed_clients());
        let cases = EntityStore::seeded(seed_cases());

        let detail = resolve_client(&clients, &cases, EntityId::from_u64(1)).unwrap();
        assert_eq!(detail.client.name, "John Doe");
        assert_eq!(detail.cases.len(), 1);
        assert_eq!(detail.cases[0].title, "Business Litigation Case");
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let clients = EntityStore::seeded(seed_clients());
        let cases = EntityStore::seeded(seed_cases());
        assert!(resolve_client(&clients, &cases, EntityId::from_u64(404)).is_none());
        assert!(resolve_case(&cases, EntityId::from_u64(404)).is_none());
    }

    #[test]
    fn join_with_no_matches_is_an_empty_list() {
        let clients = EntityStore::seeded(seed_clients());
        let cases = EntityStore::seeded(seed_cases());

        // Mike Wilson's old case is not in the seeded case store.
        let detail = resolve_client(&clients, &cases, EntityId::from_u64(3)).unwrap();
        assert_eq!(detail.client.name, "Mike Wilson");
        assert!(detail.cases.is_empty());
    }

    #[test]
    fn attorney_detail_joins_by_attorney_name() {
        let attorneys = EntityStore::seeded(seed_attorneys());
        let cases = EntityStore::seeded(seed_cases());

        // None of the seeded attorneys is assigned to a seeded case, so the
        // join is empty rather than an error.
        let detail = resolve_attorney(&attorneys, &cases, EntityId::from_u64(1)).unwrap();
        assert_eq!(detail.attorney.name, "Mr. Tristan");
        assert!(detail.cases.is_empty());
    }

    #[test]
    fn deleting_a_client_leaves_case_references_orphaned() {
        let mut clients = EntityStore::seeded(seed_clients());
        let cases = EntityStore::seeded(seed_cases());

        clients.remove(EntityId::from_u64(1));
        assert!(resolve_client(&clients, &cases, EntityId::from_u64(1)).is_none());
        // The case still carries the orphaned name.
        assert!(cases.list().iter().any(|c| c.client == "John Doe"));
    }
}
