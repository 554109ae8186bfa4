//! Shared configuration constants.
//!
//! These values are referenced from both crates in the workspace. Keeping
//! them in one place means the export filenames, simulated delays, and
//! placeholder assets stay consistent between the core logic and the UI.

/// Filename prefix for every generated report
/// (`D-CASE_<type>_Report_<date>.<ext>`).
pub const REPORT_PREFIX: &str = "D-CASE";

/// Firm name as rendered in report headers and the sidebar.
pub const FIRM_NAME: &str = "D-CASE Law Firm";

/// Simulated processing delay before an export download resolves, in
/// milliseconds. The delay is fixed and always resolves; there is no real
/// report generation behind it.
pub const EXPORT_DELAY_MS: u64 = 1500;

/// Simulated delay before "email report" reports success, in milliseconds.
pub const EMAIL_DELAY_MS: u64 = 2000;

/// Avatar used when a record is created without one.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// ISO date format used for all date strings (`2025-01-20`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_prefix_has_no_separator_chars() {
        // The prefix is joined into filenames with underscores.
        assert!(!REPORT_PREFIX.contains('_'));
        assert!(!REPORT_PREFIX.contains('.'));
    }

    #[test]
    fn delays_are_subsecond_scale() {
        assert!(EXPORT_DELAY_MS < 10_000);
        assert!(EMAIL_DELAY_MS < 10_000);
    }
}
