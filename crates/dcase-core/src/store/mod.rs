//! Generic in-memory entity store.
//!
//! One [`EntityStore`] holds the authoritative collection for one record
//! kind for the lifetime of a session. There is no persistence behind it
//! and exactly one writer (the local UI), so every operation is synchronous
//! and the store never needs locking.

use tracing::debug;

use crate::error::StoreError;
use crate::model::{today, EntityId, Record};

/// Ordered in-memory collection for one entity kind.
///
/// Records keep insertion order; the store imposes no other ordering.
/// Ids come from a monotonic per-store counter and are never reused, even
/// after a removal.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Record> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record + Clone> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store pre-populated with fixture records, seeding the id
    /// counter past the largest existing id so fresh ids never collide.
    pub fn seeded(records: Vec<T>) -> Self {
        let max_id = records.iter().map(|r| r.id().as_u64()).max().unwrap_or(0);
        Self {
            records,
            next_id: max_id + 1,
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Validates and appends a new record built from `draft`.
    ///
    /// A draft with a blank required field fails with
    /// [`StoreError::Validation`] and leaves the collection unchanged.
    pub fn add(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        T::validate(&draft)?;
        let id = EntityId::from_u64(self.next_id);
        self.next_id += 1;
        let record = T::from_draft(id, &today(), self.records.len() + 1, draft);
        debug!(kind = T::KIND, %id, "record added");
        self.records.push(record.clone());
        Ok(record)
    }

    /// Removes the record with the given id.
    ///
    /// Removing an absent id is a no-op, not an error: deletion is always
    /// presented as successful. Removal never cascades; records referencing
    /// the removed one by name keep their now-orphaned reference.
    pub fn remove(&mut self, id: EntityId) {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() < before {
            debug!(kind = T::KIND, %id, "record removed");
        }
    }

    /// Merges the supplied fields of `patch` into the record with the given
    /// id and returns the updated record.
    pub fn update(&mut self, id: EntityId, patch: T::Draft) -> Result<T, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        record.merge(patch);
        debug!(kind = T::KIND, %id, "record updated");
        Ok(record.clone())
    }
}

impl<T: Record + Clone> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Client, ClientDraft};

    fn draft(name: &str, email: &str) -> ClientDraft {
        ClientDraft {
            name: name.to_string(),
            email: email.to_string(),
            ..ClientDraft::default()
        }
    }

    #[test]
    fn add_assigns_fresh_monotonic_ids() {
        let mut store = EntityStore::<Client>::new();
        let a = store.add(draft("Ada Lovelace", "ada@example.com")).unwrap();
        let b = store.add(draft("Grace Hopper", "grace@example.com")).unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_with_blank_required_field_leaves_collection_unchanged() {
        let mut store = EntityStore::<Client>::new();
        let err = store.add(draft("", "ada@example.com")).unwrap_err();
        assert_eq!(err, StoreError::Validation("name"));
        let err = store.add(draft("Ada Lovelace", "   ")).unwrap_err();
        assert_eq!(err, StoreError::Validation("email"));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_is_a_no_op_for_unknown_ids() {
        let mut store = EntityStore::<Client>::new();
        store.add(draft("Ada Lovelace", "ada@example.com")).unwrap();
        store.remove(EntityId::from_u64(999));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut store = EntityStore::<Client>::new();
        let a = store.add(draft("Ada Lovelace", "ada@example.com")).unwrap();
        store.remove(a.id);
        let b = store.add(draft("Grace Hopper", "grace@example.com")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut store = EntityStore::<Client>::new();
        let added = store.add(draft("Ada Lovelace", "ada@example.com")).unwrap();
        let patch = ClientDraft {
            phone: "+1 555 0100".to_string(),
            ..ClientDraft::default()
        };
        let updated = store.update(added.id, patch).unwrap();
        assert_eq!(updated.phone, "+1 555 0100");
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = EntityStore::<Client>::new();
        let err = store
            .update(EntityId::from_u64(7), ClientDraft::default())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(EntityId::from_u64(7)));
    }

    #[test]
    fn seeded_store_continues_past_fixture_ids() {
        let mut store = EntityStore::<Client>::seeded(crate::fixtures::seed_clients());
        let added = store.add(draft("Ada Lovelace", "ada@example.com")).unwrap();
        assert!(store
            .list()
            .iter()
            .filter(|c| c.id != added.id)
            .all(|c| c.id < added.id));
    }
}
