//! Entity records for the practice dashboard.
//!
//! All records are flat serde structs. Cross-entity relationships are
//! denormalized display names (`Case::client` holds a client *name*, not an
//! id); lookups against them are exact string matches that yield an empty
//! result when nothing matches. See [`crate::resolve`].

mod appointment;
mod attorney;
mod case;
mod client;
mod document;
mod invoice;

pub use appointment::{Appointment, AppointmentDraft, AppointmentKind};
pub use attorney::{Attorney, AttorneyDraft};
pub use case::{Case, CaseDraft, CasePriority, CaseStatus, TimelineEntry};
pub use client::{Client, ClientDraft};
pub use document::{Document, DocumentCategory, DocumentDraft};
pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Unique record identifier, scoped to one store for one session.
///
/// The source of truth for uniqueness is the owning store's monotonic
/// counter: ids are assigned at creation time and never reused. Fixture
/// records use small literal ids; the counter is seeded past the largest of
/// them on load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an id from a raw value. Used by fixtures and URL parsing;
    /// stores assign fresh ids themselves.
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value of this id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// One record kind held by an [`crate::store::EntityStore`].
///
/// Each implementation defines its creation draft, which fields that draft
/// must supply, and how an existing record merges a partial edit.
pub trait Record {
    /// Form payload submitted by the add/edit dialogs.
    type Draft;

    /// Kind label used in log lines (`"client"`, `"invoice"`, ...).
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Rejects drafts with blank required fields. Must not mutate anything;
    /// a failed add leaves the collection untouched.
    fn validate(draft: &Self::Draft) -> Result<(), StoreError>;

    /// Builds the stored record from a validated draft.
    ///
    /// `today` is the ISO date assigned to join/issue/upload dates; `seq` is
    /// the 1-based position the record will take in the collection (used by
    /// invoices to derive their display number).
    fn from_draft(id: EntityId, today: &str, seq: usize, draft: Self::Draft) -> Self;

    /// Merges the supplied fields of a partial edit. Blank strings and
    /// `None` values mean "keep the current value".
    fn merge(&mut self, patch: Self::Draft);
}

/// Optional per-platform profile links carried by clients and attorneys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.facebook.is_none()
            && self.twitter.is_none()
            && self.linkedin.is_none()
            && self.instagram.is_none()
    }
}

/// Returns the current date as an ISO `YYYY-MM-DD` string.
///
/// Uses `instant::SystemTime` so the same code path works on WASM and
/// native targets. Falls back to the epoch date if the clock is somehow
/// before UNIX_EPOCH rather than panicking.
pub fn today() -> String {
    let secs = instant::SystemTime::now()
        .duration_since(instant::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    chrono::DateTime::from_timestamp(secs as i64, 0)
        .map(|dt| dt.date_naive().format(crate::config::DATE_FORMAT).to_string())
        .unwrap_or_else(|| "1970-01-01".to_string())
}

/// Validation helper: rejects blank required fields.
pub(crate) fn required(value: &str, field: &'static str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        Err(StoreError::Validation(field))
    } else {
        Ok(())
    }
}

/// Merge helper: overwrite `slot` only when the patch supplied a non-blank
/// value.
pub(crate) fn merge_text(slot: &mut String, patch: String) {
    if !patch.trim().is_empty() {
        *slot = patch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_round_trips_through_display() {
        let id = EntityId::from_u64(42);
        let parsed: EntityId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn entity_id_rejects_garbage() {
        assert!("not-an-id".parse::<EntityId>().is_err());
    }

    #[test]
    fn today_is_iso_formatted() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
