//! Error types for dcase-core.
//!
//! No error here is fatal. Store errors are handled at the point of use and
//! rendered inline; export errors surface as a transient notification.

use thiserror::Error;

use crate::model::EntityId;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field was blank or absent on create. The collection is
    /// left unchanged.
    #[error("required field `{0}` is blank")]
    Validation(&'static str),
    /// No record with the given id. Detail views render this as a stable
    /// "not found" placeholder, never as a crash.
    #[error("no record with id {0}")]
    NotFound(EntityId),
}

/// Errors that can occur while delivering an export payload.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The platform download mechanism rejected the payload.
    #[error("failed to deliver report download: {0}")]
    DownloadFailed(String),
}

impl From<String> for ExportError {
    fn from(s: String) -> Self {
        ExportError::DownloadFailed(s)
    }
}
