//! Date range selected by the picker.
//!
//! Endpoints are local wall-clock times in the configured timezone. They
//! travel to and from the host as ISO strings with minute precision
//! (`2024-01-13T09:00`), the format of an HTML `datetime-local` input.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{WeekenderError, WeekenderResult};

/// Format used for ISO-minute strings.
pub const ISO_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A possibly half-selected date range.
/// None values mean that endpoint has not been picked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateRange {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Build a range from the host's input strings.
    /// Empty or unparseable strings leave that endpoint unset.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        DateRange {
            start: parse_input(start),
            end: parse_input(end),
        }
    }

    /// Both endpoints as ISO-minute strings, empty when unset.
    pub fn to_inputs(&self) -> (String, String) {
        (format_input(self.start), format_input(self.end))
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn start_day(&self) -> Option<NaiveDate> {
        self.start.map(|dt| dt.date())
    }

    pub fn end_day(&self) -> Option<NaiveDate> {
        self.end.map(|dt| dt.date())
    }

    /// True if `day` is the start or end day of the range.
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        self.start_day() == Some(day) || self.end_day() == Some(day)
    }

    /// True if `day` lies within the range, inclusive, compared at day granularity.
    /// Always false while either endpoint is unset.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        match (self.start_day(), self.end_day()) {
            (Some(start), Some(end)) => start <= day && day <= end,
            _ => false,
        }
    }

    /// Shift both endpoints by a whole number of days.
    pub fn shifted_days(&self, days: i64) -> Self {
        let shift = |dt: NaiveDateTime| dt + chrono::Duration::days(days);
        DateRange {
            start: self.start.map(shift),
            end: self.end.map(shift),
        }
    }
}

/// Format a timestamp as an ISO-minute string, or "" when unset.
pub fn format_input(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(ISO_MINUTE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Lenient parse used for host-provided values: anything invalid is "unset".
pub fn parse_input(s: &str) -> Option<NaiveDateTime> {
    parse_datetime(s).ok()
}

/// Parse `YYYY-MM-DDTHH:MM`, with optional seconds.
pub fn parse_datetime(s: &str) -> WeekenderResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, ISO_MINUTE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| WeekenderError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> WeekenderResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| WeekenderError::InvalidDate(s.to_string()))
}
