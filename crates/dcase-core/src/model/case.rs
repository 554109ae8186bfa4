//! Case records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_AVATAR;
use crate::error::StoreError;
use crate::filter::Searchable;
use crate::model::{merge_text, required, EntityId, Record};

/// Engagement status shared by cases and clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Active,
    Pending,
    Closed,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 3] = [CaseStatus::Active, CaseStatus::Pending, CaseStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Active => "Active",
            CaseStatus::Pending => "Pending",
            CaseStatus::Closed => "Closed",
        }
    }

    /// Parses the exact display label; anything else is `None`.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasePriority {
    High,
    Medium,
    Low,
}

impl CasePriority {
    pub const ALL: [CasePriority; 3] =
        [CasePriority::High, CasePriority::Medium, CasePriority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            CasePriority::High => "High",
            CasePriority::Medium => "Medium",
            CasePriority::Low => "Low",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == label)
    }
}

impl fmt::Display for CasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dated event in a case's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub event: String,
    pub description: String,
}

/// A legal case. `client` and `attorney` are denormalized display names,
/// not ids; deleting either party leaves this record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: EntityId,
    pub title: String,
    pub client: String,
    pub attorney: String,
    pub case_type: String,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub deadline: String,
    pub description: String,
    pub client_avatar: String,
    /// Completion estimate, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEntry>>,
}

/// Form payload for creating or editing a case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseDraft {
    pub title: String,
    pub client: String,
    pub attorney: String,
    pub case_type: String,
    pub status: Option<CaseStatus>,
    pub priority: Option<CasePriority>,
    pub deadline: String,
    pub description: String,
}

impl Record for Case {
    type Draft = CaseDraft;

    const KIND: &'static str = "case";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(draft: &CaseDraft) -> Result<(), StoreError> {
        required(&draft.title, "title")?;
        required(&draft.client, "client")?;
        required(&draft.attorney, "attorney")
    }

    fn from_draft(id: EntityId, _today: &str, _seq: usize, draft: CaseDraft) -> Self {
        Case {
            id,
            title: draft.title,
            client: draft.client,
            attorney: draft.attorney,
            case_type: if draft.case_type.trim().is_empty() {
                "General".to_string()
            } else {
                draft.case_type
            },
            status: draft.status.unwrap_or(CaseStatus::Pending),
            priority: draft.priority.unwrap_or(CasePriority::Medium),
            deadline: draft.deadline,
            description: draft.description,
            client_avatar: PLACEHOLDER_AVATAR.to_string(),
            progress: None,
            documents: None,
            timeline: None,
        }
    }

    fn merge(&mut self, patch: CaseDraft) {
        merge_text(&mut self.title, patch.title);
        merge_text(&mut self.client, patch.client);
        merge_text(&mut self.attorney, patch.attorney);
        merge_text(&mut self.case_type, patch.case_type);
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        merge_text(&mut self.deadline, patch.deadline);
        merge_text(&mut self.description, patch.description);
    }
}

impl Searchable for Case {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.client.as_str(),
            self.attorney.as_str(),
        ]
    }

    fn facet_value(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}
