//! Client records.

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_AVATAR;
use crate::error::StoreError;
use crate::filter::Searchable;
use crate::model::case::CaseStatus;
use crate::model::{merge_text, required, EntityId, Record, SocialLinks};

/// A client of the firm.
///
/// `case_status` summarizes the client's overall engagement; the client's
/// actual cases live in the case store and are joined by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub case_status: CaseStatus,
    pub avatar: String,
    pub join_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialLinks>,
}

/// Form payload for creating or editing a client. Name and email are
/// required on create; everything else defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub case_status: Option<CaseStatus>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub social_media: Option<SocialLinks>,
}

impl Record for Client {
    type Draft = ClientDraft;

    const KIND: &'static str = "client";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(draft: &ClientDraft) -> Result<(), StoreError> {
        required(&draft.name, "name")?;
        required(&draft.email, "email")
    }

    fn from_draft(id: EntityId, today: &str, _seq: usize, draft: ClientDraft) -> Self {
        Client {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            case_status: draft.case_status.unwrap_or(CaseStatus::Pending),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            join_date: today.to_string(),
            company: draft.company,
            notes: draft.notes,
            social_media: draft.social_media,
        }
    }

    fn merge(&mut self, patch: ClientDraft) {
        merge_text(&mut self.name, patch.name);
        merge_text(&mut self.email, patch.email);
        merge_text(&mut self.phone, patch.phone);
        merge_text(&mut self.address, patch.address);
        if let Some(status) = patch.case_status {
            self.case_status = status;
        }
        if patch.company.is_some() {
            self.company = patch.company;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if patch.social_media.is_some() {
            self.social_media = patch.social_media;
        }
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(company) = &self.company {
            fields.push(company.as_str());
        }
        fields
    }

    fn facet_value(&self) -> Option<&str> {
        Some(self.case_status.as_str())
    }
}
