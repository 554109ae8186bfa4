//! The entity list controller.
//!
//! Every content screen in the dashboard is the same machine: an in-memory
//! collection, a live search string, an optional facet, and add/remove/
//! update actions. [`ListController`] is that machine, written once and
//! instantiated per entity kind by the application root instead of being
//! re-implemented per screen.

use crate::error::StoreError;
use crate::filter::{filter_records, Searchable};
use crate::model::{EntityId, Record};
use crate::store::EntityStore;

/// List-screen state for one entity kind: the authoritative store plus the
/// current search query and facet selection.
///
/// Controllers are owned by the application root and handed down
/// explicitly; nothing in this crate holds one in module-level state.
#[derive(Debug, Clone)]
pub struct ListController<T: Record + Searchable + Clone> {
    store: EntityStore<T>,
    query: String,
    facet: Option<String>,
}

impl<T: Record + Searchable + Clone> ListController<T> {
    pub fn new(store: EntityStore<T>) -> Self {
        Self {
            store,
            query: String::new(),
            facet: None,
        }
    }

    /// The records currently visible: the store filtered by query and
    /// facet, insertion order preserved.
    pub fn visible(&self) -> Vec<&T> {
        filter_records(self.store.list(), &self.query, self.facet.as_deref())
    }

    /// The full collection, unfiltered.
    pub fn list(&self) -> &[T] {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn facet(&self) -> Option<&str> {
        self.facet.as_deref()
    }

    /// Sets the facet; `None` (the UI's "all" option) disables it.
    pub fn set_facet(&mut self, facet: Option<String>) {
        self.facet = facet;
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.store.get(id)
    }

    pub fn add(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        self.store.add(draft)
    }

    pub fn remove(&mut self, id: EntityId) {
        self.store.remove(id);
    }

    pub fn update(&mut self, id: EntityId, patch: T::Draft) -> Result<T, StoreError> {
        self.store.update(id, patch)
    }

    /// Read access to the underlying store, for joins across entity kinds.
    pub fn store(&self) -> &EntityStore<T> {
        &self.store
    }
}

#[cfg(test)]
mod tests;
