//! Appointment records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::filter::Searchable;
use crate::model::{merge_text, required, EntityId, Record};

/// What kind of calendar entry an appointment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentKind {
    Meeting,
    #[serde(rename = "Court Date")]
    CourtDate,
    Consultation,
    Deadline,
}

impl AppointmentKind {
    pub const ALL: [AppointmentKind; 4] = [
        AppointmentKind::Meeting,
        AppointmentKind::CourtDate,
        AppointmentKind::Consultation,
        AppointmentKind::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentKind::Meeting => "Meeting",
            AppointmentKind::CourtDate => "Court Date",
            AppointmentKind::Consultation => "Consultation",
            AppointmentKind::Deadline => "Deadline",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == label)
    }
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar appointment. Placement in the month grid is an exact string
/// match on `date`; see [`crate::calendar::appointments_on`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: EntityId,
    pub title: String,
    pub client: String,
    pub attorney: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour wall time, `HH:MM`.
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub description: String,
}

/// Form payload for scheduling an appointment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    pub title: String,
    pub client: String,
    pub attorney: String,
    pub date: String,
    pub time: String,
    pub kind: Option<AppointmentKind>,
    pub description: String,
}

impl Record for Appointment {
    type Draft = AppointmentDraft;

    const KIND: &'static str = "appointment";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(draft: &AppointmentDraft) -> Result<(), StoreError> {
        required(&draft.title, "title")?;
        required(&draft.client, "client")?;
        required(&draft.date, "date")?;
        required(&draft.time, "time")
    }

    fn from_draft(id: EntityId, _today: &str, _seq: usize, draft: AppointmentDraft) -> Self {
        Appointment {
            id,
            title: draft.title,
            client: draft.client,
            attorney: draft.attorney,
            date: draft.date,
            time: draft.time,
            kind: draft.kind.unwrap_or(AppointmentKind::Meeting),
            description: draft.description,
        }
    }

    fn merge(&mut self, patch: AppointmentDraft) {
        merge_text(&mut self.title, patch.title);
        merge_text(&mut self.client, patch.client);
        merge_text(&mut self.attorney, patch.attorney);
        merge_text(&mut self.date, patch.date);
        merge_text(&mut self.time, patch.time);
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        merge_text(&mut self.description, patch.description);
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.client.as_str(),
            self.attorney.as_str(),
        ]
    }

    fn facet_value(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}
