//! Invoice records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::filter::Searchable;
use crate::model::{merge_text, required, EntityId, Record};

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billing invoice. `client` is a denormalized client name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: EntityId,
    /// Display number of the form `INV-<year>-<seq>`, assigned on create.
    pub invoice_number: String,
    pub client: String,
    /// Billed amount in dollars, never negative.
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: String,
    pub issue_date: String,
    pub description: String,
}

/// Form payload for creating an invoice. New invoices are issued today,
/// numbered from the collection size, and start out Pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceDraft {
    pub client: String,
    pub amount: f64,
    pub due_date: String,
    pub description: String,
}

/// Formats an invoice display number: `INV-2025-007`.
pub(crate) fn format_invoice_number(year: &str, seq: usize) -> String {
    format!("INV-{year}-{seq:03}")
}

impl Record for Invoice {
    type Draft = InvoiceDraft;

    const KIND: &'static str = "invoice";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(draft: &InvoiceDraft) -> Result<(), StoreError> {
        required(&draft.client, "client")?;
        required(&draft.description, "description")?;
        if draft.amount <= 0.0 {
            return Err(StoreError::Validation("amount"));
        }
        Ok(())
    }

    fn from_draft(id: EntityId, today: &str, seq: usize, draft: InvoiceDraft) -> Self {
        // The issue date is ISO formatted, so the year is its first segment.
        let year = today.split('-').next().unwrap_or(today);
        Invoice {
            id,
            invoice_number: format_invoice_number(year, seq),
            client: draft.client,
            amount: draft.amount,
            status: InvoiceStatus::Pending,
            due_date: draft.due_date,
            issue_date: today.to_string(),
            description: draft.description,
        }
    }

    fn merge(&mut self, patch: InvoiceDraft) {
        merge_text(&mut self.client, patch.client);
        if patch.amount > 0.0 {
            self.amount = patch.amount;
        }
        merge_text(&mut self.due_date, patch.due_date);
        merge_text(&mut self.description, patch.description);
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client.as_str(), self.invoice_number.as_str()]
    }

    fn facet_value(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_numbers_are_zero_padded() {
        assert_eq!(format_invoice_number("2025", 4), "INV-2025-004");
        assert_eq!(format_invoice_number("2025", 120), "INV-2025-120");
    }
}
