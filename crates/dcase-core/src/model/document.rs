//! Document records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::filter::Searchable;
use crate::model::{merge_text, required, EntityId, Record};

/// Filing category of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    Contract,
    Evidence,
    #[serde(rename = "Legal Brief")]
    LegalBrief,
    #[serde(rename = "Court Filing")]
    CourtFiling,
    Other,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 5] = [
        DocumentCategory::Contract,
        DocumentCategory::Evidence,
        DocumentCategory::LegalBrief,
        DocumentCategory::CourtFiling,
        DocumentCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Contract => "Contract",
            DocumentCategory::Evidence => "Evidence",
            DocumentCategory::LegalBrief => "Legal Brief",
            DocumentCategory::CourtFiling => "Court Filing",
            DocumentCategory::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filed document. `client` holds a client name and `case` a case title;
/// both are weak references. The size is a display string captured at
/// upload time, not a measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub name: String,
    /// File-extension label shown on the card ("PDF", "DOCX", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub client: String,
    pub case: String,
    pub upload_date: String,
    pub category: DocumentCategory,
}

/// Form payload for uploading a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentDraft {
    pub name: String,
    pub kind: String,
    pub client: String,
    pub case: String,
    pub category: Option<DocumentCategory>,
}

impl Record for Document {
    type Draft = DocumentDraft;

    const KIND: &'static str = "document";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(draft: &DocumentDraft) -> Result<(), StoreError> {
        required(&draft.name, "name")?;
        required(&draft.client, "client")?;
        required(&draft.case, "case")
    }

    fn from_draft(id: EntityId, today: &str, _seq: usize, draft: DocumentDraft) -> Self {
        Document {
            id,
            name: draft.name,
            kind: if draft.kind.trim().is_empty() {
                "PDF".to_string()
            } else {
                draft.kind
            },
            // No real file is stored, so no real size either.
            size: "1.0 MB".to_string(),
            client: draft.client,
            case: draft.case,
            upload_date: today.to_string(),
            category: draft.category.unwrap_or(DocumentCategory::Other),
        }
    }

    fn merge(&mut self, patch: DocumentDraft) {
        merge_text(&mut self.name, patch.name);
        merge_text(&mut self.kind, patch.kind);
        merge_text(&mut self.client, patch.client);
        merge_text(&mut self.case, patch.case);
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.client.as_str(),
            self.case.as_str(),
        ]
    }

    fn facet_value(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}
