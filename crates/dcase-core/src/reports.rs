//! Report aggregates and billing summaries.
//!
//! The reporting screen works over pre-assembled aggregates (KPIs, case
//! outcomes by practice area, attorney performance) seeded from fixtures,
//! plus a billing summary computed live from the invoice store.

use serde::{Deserialize, Serialize};

use crate::model::{Invoice, InvoiceStatus};

/// Direction of a KPI's period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// One headline number on the reports screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEntry {
    pub title: String,
    /// Pre-formatted display value ("$125,400", "87%").
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// Won/lost/pending tallies for one practice area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub category: String,
    pub won: u32,
    pub lost: u32,
    pub pending: u32,
}

/// Per-attorney performance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttorneyPerformance {
    pub name: String,
    pub cases: u32,
    pub rating: f64,
    pub revenue: u64,
}

/// Everything the reports screen and the export generator consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub kpis: Vec<KpiEntry>,
    pub outcomes: Vec<CaseOutcome>,
    pub attorneys: Vec<AttorneyPerformance>,
}

/// Which report the user selected for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Overview,
    Financial,
    Cases,
    Clients,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Overview,
        ReportType::Financial,
        ReportType::Cases,
        ReportType::Clients,
    ];

    /// Identifier used in filenames and select values.
    pub fn key(&self) -> &'static str {
        match self {
            ReportType::Overview => "overview",
            ReportType::Financial => "financial",
            ReportType::Cases => "cases",
            ReportType::Clients => "clients",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Overview => "Overview",
            ReportType::Financial => "Financial",
            ReportType::Cases => "Case Analysis",
            ReportType::Clients => "Client Reports",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Weekly,
        ReportPeriod::Monthly,
        ReportPeriod::Quarterly,
        ReportPeriod::Yearly,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Quarterly => "quarterly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Quarterly => "Quarterly",
            ReportPeriod::Yearly => "Yearly",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Invoice totals grouped by payment status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Sum of Paid invoices.
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
}

/// Sums invoice amounts by status.
pub fn billing_summary(invoices: &[Invoice]) -> BillingSummary {
    let sum_for = |status: InvoiceStatus| {
        invoices
            .iter()
            .filter(|i| i.status == status)
            .map(|i| i.amount)
            .sum()
    };
    BillingSummary {
        total_revenue: sum_for(InvoiceStatus::Paid),
        pending_amount: sum_for(InvoiceStatus::Pending),
        overdue_amount: sum_for(InvoiceStatus::Overdue),
    }
}

/// Headline counters on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_cases: u32,
    pub won_cases: u32,
    pub lost_cases: u32,
    pub monthly_revenue: u64,
}

/// One point of the dashboard revenue trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: u64,
}

/// Renders an integer with thousands separators: `45000` -> `"45,000"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders a dollar amount the way the cards do: thousands-separated, with
/// cents only when they are non-zero (`5500.0` -> `"5,500"`,
/// `3200.5` -> `"3,200.50"`).
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    if frac == 0 {
        format_thousands(whole)
    } else {
        format!("{}.{:02}", format_thousands(whole), frac)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::seed_invoices;

    #[test]
    fn billing_summary_groups_by_status() {
        let invoices = seed_invoices();
        let summary = billing_summary(&invoices);
        assert_eq!(summary.total_revenue, 5500.0);
        assert_eq!(summary.pending_amount, 3200.0);
        assert_eq!(summary.overdue_amount, 7800.0);
    }

    #[test]
    fn empty_invoice_list_sums_to_zero() {
        let summary = billing_summary(&[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.pending_amount, 0.0);
        assert_eq!(summary.overdue_amount, 0.0);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(45000), "45,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn money_shows_cents_only_when_present() {
        assert_eq!(format_money(5500.0), "5,500");
        assert_eq!(format_money(3200.5), "3,200.50");
        assert_eq!(format_money(0.25), "0.25");
    }

    #[test]
    fn report_keys_round_trip() {
        for t in ReportType::ALL {
            assert_eq!(ReportType::parse(t.key()), Some(t));
        }
        for p in ReportPeriod::ALL {
            assert_eq!(ReportPeriod::parse(p.key()), Some(p));
        }
    }
}
