use chrono::{Days, NaiveDate};

use crate::app::{NebulaError, Result};

/// Window length used when nothing else is configured.
pub const DEFAULT_WINDOW_DAYS: u64 = 14;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(NebulaError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days`-long window ending on `today` (today counts as one day).
    pub fn default_window(today: NaiveDate, days: u64) -> Self {
        let span = days.max(1) - 1;
        let start = today.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Cap both bounds at `today`.
    pub fn clamp_to(self, today: NaiveDate) -> Self {
        Self {
            start: self.start.min(today),
            end: self.end.min(today),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Long-form date used on cards and in the detail view, e.g. "January 10, 2024".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date as typed on the command line.
pub fn parse_iso_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}
