//! Month-grid calendar math.
//!
//! The calendar view renders a Sunday-first month grid. Appointment
//! placement is an exact string match between the appointment's ISO date
//! and the cell's date key; an appointment whose date never parses simply
//! never appears, it does not error.

use chrono::{Datelike, NaiveDate};

use crate::model::Appointment;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown by the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    /// 1-12.
    month: u32,
}

impl MonthCursor {
    /// Creates a cursor for the given year and 1-based month. Out-of-range
    /// months are clamped into the calendar year.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Cursor for the month containing today.
    pub fn current() -> Self {
        let today = crate::model::today();
        Self::from_date(&today).unwrap_or(Self {
            year: 1970,
            month: 1,
        })
    }

    /// Cursor for the month containing an ISO date string.
    pub fn from_date(date: &str) -> Option<Self> {
        let parsed = NaiveDate::parse_from_str(date, crate::config::DATE_FORMAT).ok()?;
        Some(Self {
            year: parsed.year(),
            month: parsed.month(),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The previous month, crossing year boundaries.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month, crossing year boundaries.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Header label, e.g. "January 2025".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Cells for a Sunday-first month grid: one leading `None` per weekday
    /// before the 1st, then `Some(day)` for each day of the month.
    pub fn grid(&self) -> Vec<Option<u32>> {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<u32>> = vec![None; offset];
        cells.extend((1..=days_in_month(self.year, self.month)).map(Some));
        cells
    }

    /// The ISO date key for a day cell in this month: `2025-01-20`.
    pub fn cell_date(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Appointments whose date equals `date` exactly, store order.
pub fn appointments_on<'a>(appointments: &'a [Appointment], date: &str) -> Vec<&'a Appointment> {
    appointments.iter().filter(|a| a.date == date).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::seed_appointments;

    #[test]
    fn grid_starts_on_the_right_weekday() {
        // 2025-01-01 is a Wednesday: three leading blanks.
        let cursor = MonthCursor::new(2025, 1);
        let grid = cursor.grid();
        assert_eq!(&grid[..4], &[None, None, None, Some(1)]);
        assert_eq!(grid.len(), 3 + 31);
    }

    #[test]
    fn month_lengths_respect_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn cursor_navigation_crosses_year_boundaries() {
        let jan = MonthCursor::new(2025, 1);
        assert_eq!(jan.prev(), MonthCursor::new(2024, 12));
        assert_eq!(MonthCursor::new(2024, 12).next(), jan);
        assert_eq!(jan.label(), "January 2025");
    }

    #[test]
    fn appointment_lands_in_exactly_one_cell() {
        let appointments = seed_appointments();
        let cursor = MonthCursor::new(2025, 1);

        let mut total = 0;
        for day in 1..=31 {
            let hits = appointments_on(&appointments, &cursor.cell_date(day));
            if day == 20 {
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].title, "Court Hearing");
            }
            total += hits.len();
        }
        // Every seeded appointment is in January 2025, each in one cell.
        assert_eq!(total, appointments.len());
    }

    #[test]
    fn cell_dates_are_zero_padded_iso() {
        let cursor = MonthCursor::new(2025, 3);
        assert_eq!(cursor.cell_date(5), "2025-03-05");
    }
}
