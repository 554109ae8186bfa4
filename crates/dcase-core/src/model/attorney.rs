//! Attorney records.

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_AVATAR;
use crate::error::StoreError;
use crate::filter::Searchable;
use crate::model::{merge_text, required, EntityId, Record, SocialLinks};

/// An attorney at the firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attorney {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    /// Years of practice.
    pub experience: u32,
    /// Client rating, 0.0-5.0.
    pub rating: f64,
    pub active_cases: u32,
    pub bio: String,
    pub avatar: String,
    pub join_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

/// Form payload for creating or editing an attorney. New attorneys start
/// at a 4.0 rating with no active cases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttorneyDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub experience: Option<u32>,
    pub bio: String,
}

impl Record for Attorney {
    type Draft = AttorneyDraft;

    const KIND: &'static str = "attorney";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(draft: &AttorneyDraft) -> Result<(), StoreError> {
        required(&draft.name, "name")?;
        required(&draft.email, "email")?;
        required(&draft.specialization, "specialization")
    }

    fn from_draft(id: EntityId, today: &str, _seq: usize, draft: AttorneyDraft) -> Self {
        Attorney {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            specialization: draft.specialization,
            experience: draft.experience.unwrap_or(0),
            rating: 4.0,
            active_cases: 0,
            bio: draft.bio,
            avatar: PLACEHOLDER_AVATAR.to_string(),
            join_date: today.to_string(),
            social_media: None,
            education: None,
            certifications: None,
        }
    }

    fn merge(&mut self, patch: AttorneyDraft) {
        merge_text(&mut self.name, patch.name);
        merge_text(&mut self.email, patch.email);
        merge_text(&mut self.phone, patch.phone);
        merge_text(&mut self.specialization, patch.specialization);
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        merge_text(&mut self.bio, patch.bio);
    }
}

impl Searchable for Attorney {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.specialization.as_str()]
    }
}
