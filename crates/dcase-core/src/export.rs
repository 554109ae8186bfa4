//! Export payload rendering.
//!
//! Builds the downloadable report in three formats. Only the CSV output is
//! genuinely structured; the "PDF" and "Excel" outputs are plain text
//! carrying a PDF/Excel extension and MIME type. That mismatch reproduces
//! the behavior of the product this dashboard is modeled on and is kept on
//! purpose rather than silently upgraded to real document generation.

use std::borrow::Cow;

use crate::config::{FIRM_NAME, REPORT_PREFIX};
use crate::reports::{format_thousands, ReportPeriod, ReportSnapshot, ReportType};

/// Output format of a report export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Pdf => "pdf",
            // .xlsx despite the text body; see the module docs.
            ReportFormat::Excel => "xlsx",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv;charset=utf-8;",
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Excel => "application/vnd.ms-excel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        }
    }
}

/// A rendered report ready for the platform download bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    /// The payload as text. Every format this module renders is UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Download filename: `D-CASE_overview_Report_2025-01-20.csv`.
pub fn report_filename(report_type: ReportType, date: &str, format: ReportFormat) -> String {
    format!(
        "{}_{}_Report_{}.{}",
        REPORT_PREFIX,
        report_type.key(),
        date,
        format.extension()
    )
}

/// Renders a report snapshot into a downloadable payload.
///
/// `date` is the ISO date stamped into the filename and the report header.
pub fn export_report(
    snapshot: &ReportSnapshot,
    report_type: ReportType,
    period: ReportPeriod,
    format: ReportFormat,
    date: &str,
) -> ExportPayload {
    let body = match format {
        ReportFormat::Csv => render_report_csv(snapshot),
        ReportFormat::Pdf => render_report_text(snapshot, report_type, period, date),
        ReportFormat::Excel => render_report_sheets(snapshot),
    };
    ExportPayload {
        filename: report_filename(report_type, date, format),
        mime: format.mime(),
        bytes: body.into_bytes(),
    }
}

/// Joins a header row and data rows into CSV text.
///
/// Values are comma-joined verbatim: no quoting and no escaping of embedded
/// commas. Callers own keeping commas out of field values; the report
/// aggregates rendered here never contain any.
pub fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// CSV report: KPI, outcome, and attorney rows flattened into one table.
/// The header follows the first row kind; outcome and attorney rows carry
/// their own trailing columns (preserved report layout).
fn render_report_csv(snapshot: &ReportSnapshot) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for kpi in &snapshot.kpis {
        rows.push(vec![
            "KPI".to_string(),
            kpi.title.clone(),
            kpi.value.clone(),
            kpi.change.clone(),
        ]);
    }
    for outcome in &snapshot.outcomes {
        rows.push(vec![
            "Case Outcome".to_string(),
            outcome.category.clone(),
            outcome.won.to_string(),
            outcome.lost.to_string(),
            outcome.pending.to_string(),
        ]);
    }
    for attorney in &snapshot.attorneys {
        rows.push(vec![
            "Attorney".to_string(),
            attorney.name.clone(),
            attorney.cases.to_string(),
            attorney.rating.to_string(),
            attorney.revenue.to_string(),
        ]);
    }
    render_csv(&["type", "name", "value", "change"], &rows)
}

/// The "PDF": a sectioned plain-text report.
fn render_report_text(
    snapshot: &ReportSnapshot,
    report_type: ReportType,
    period: ReportPeriod,
    date: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} - {} REPORT\n",
        FIRM_NAME,
        report_type.key().to_uppercase()
    ));
    out.push_str(&format!("Generated on: {date}\n"));
    out.push_str(&format!("Period: {}\n", period.key()));

    out.push_str("\n=== KEY PERFORMANCE INDICATORS ===\n");
    for kpi in &snapshot.kpis {
        out.push_str(&format!("{}: {} ({})\n", kpi.title, kpi.value, kpi.change));
    }

    out.push_str("\n=== CASE OUTCOMES BY PRACTICE AREA ===\n");
    for outcome in &snapshot.outcomes {
        out.push_str(&format!(
            "{}: Won: {}, Lost: {}, Pending: {}\n",
            outcome.category, outcome.won, outcome.lost, outcome.pending
        ));
    }

    out.push_str("\n=== ATTORNEY PERFORMANCE ===\n");
    for attorney in &snapshot.attorneys {
        out.push_str(&format!(
            "{}: {} cases, Rating: {}, Revenue: ${}\n",
            attorney.name,
            attorney.cases,
            attorney.rating,
            format_thousands(attorney.revenue)
        ));
    }

    out.push_str("\n=== SUMMARY ===\n");
    out.push_str(&format!(
        "This report provides a comprehensive overview of the firm's performance for the {} period.\n",
        period.key()
    ));
    for kpi in &snapshot.kpis {
        out.push_str(&format!("{}: {}\n", kpi.title, kpi.value));
    }
    out
}

/// The "Excel": blank-line separated "sheets" of comma-joined rows.
fn render_report_sheets(snapshot: &ReportSnapshot) -> String {
    let kpi_sheet = format!(
        "KPI Data\n{}",
        snapshot
            .kpis
            .iter()
            .map(|k| format!("{},{},{}", k.title, k.value, k.change))
            .collect::<Vec<_>>()
            .join("\n")
    );
    let outcome_sheet = format!(
        "\n\nCase Outcomes\n{}",
        snapshot
            .outcomes
            .iter()
            .map(|o| format!("{},{},{},{}", o.category, o.won, o.lost, o.pending))
            .collect::<Vec<_>>()
            .join("\n")
    );
    let attorney_sheet = format!(
        "\n\nAttorney Performance\n{}",
        snapshot
            .attorneys
            .iter()
            .map(|a| format!("{},{},{},{}", a.name, a.cases, a.rating, a.revenue))
            .collect::<Vec<_>>()
            .join("\n")
    );
    format!("{kpi_sheet}{outcome_sheet}{attorney_sheet}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::report_snapshot;

    #[test]
    fn csv_has_header_plus_one_line_per_row() {
        let rows: Vec<Vec<String>> = vec![
            vec!["a".into(), "1".into()],
            vec!["b".into(), "2".into()],
            vec!["c".into(), "3".into()],
        ];
        let csv = render_csv(&["name", "value"], &rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), rows.len() + 1);
        assert_eq!(lines[0], "name,value");
        // Splitting on commas recovers the original field values.
        for (line, row) in lines[1..].iter().zip(&rows) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields, row.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    #[test]
    fn report_csv_flattens_all_aggregate_rows() {
        let snapshot = report_snapshot();
        let payload = export_report(
            &snapshot,
            ReportType::Overview,
            ReportPeriod::Monthly,
            ReportFormat::Csv,
            "2025-01-20",
        );
        let expected_rows =
            snapshot.kpis.len() + snapshot.outcomes.len() + snapshot.attorneys.len();
        assert_eq!(payload.text().lines().count(), expected_rows + 1);
    }

    #[test]
    fn filenames_follow_the_prefix_scheme() {
        assert_eq!(
            report_filename(ReportType::Overview, "2025-01-20", ReportFormat::Csv),
            "D-CASE_overview_Report_2025-01-20.csv"
        );
        assert_eq!(
            report_filename(ReportType::Financial, "2025-01-20", ReportFormat::Excel),
            "D-CASE_financial_Report_2025-01-20.xlsx"
        );
    }

    #[test]
    fn pdf_payload_is_labeled_pdf_but_is_text() {
        let payload = export_report(
            &report_snapshot(),
            ReportType::Overview,
            ReportPeriod::Monthly,
            ReportFormat::Pdf,
            "2025-01-20",
        );
        assert_eq!(payload.mime, "application/pdf");
        let text = payload.text();
        assert!(text.starts_with("D-CASE Law Firm - OVERVIEW REPORT"));
        assert!(text.contains("=== KEY PERFORMANCE INDICATORS ==="));
        assert!(text.contains("=== ATTORNEY PERFORMANCE ==="));
    }

    #[test]
    fn excel_payload_simulates_sheets() {
        let payload = export_report(
            &report_snapshot(),
            ReportType::Cases,
            ReportPeriod::Quarterly,
            ReportFormat::Excel,
            "2025-01-20",
        );
        assert_eq!(payload.mime, "application/vnd.ms-excel");
        let text = payload.text();
        assert!(text.starts_with("KPI Data\n"));
        assert!(text.contains("\n\nCase Outcomes\n"));
        assert!(text.contains("\n\nAttorney Performance\n"));
    }
}
