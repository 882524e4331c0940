//! Month grid generation.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::date_range::DateRange;
use crate::error::{WeekenderError, WeekenderResult};

/// Six rows of seven days.
pub const GRID_DAYS: usize = 42;

/// One cell of the month grid. Derived per render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    pub is_past: bool,
    pub is_selected: bool,
    pub is_in_range: bool,
}

impl CalendarDay {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Only future-or-today days of the visible month accept clicks.
    pub fn is_clickable(&self) -> bool {
        self.is_current_month && !self.is_past
    }
}

/// Build the Sunday-first 42-day grid for the month containing `month`.
pub fn month_grid(month: NaiveDate, today: NaiveDate, range: &DateRange) -> Vec<CalendarDay> {
    let first = first_of_month(month);
    let lead = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(lead);

    (0..GRID_DAYS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarDay {
                date,
                is_current_month: date.year() == first.year() && date.month() == first.month(),
                is_today: date == today,
                is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                is_past: date < today,
                is_selected: range.is_endpoint(date),
                is_in_range: range.contains_day(date),
            }
        })
        .collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move the visible month forward (positive) or back (negative).
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(month);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> WeekenderResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| WeekenderError::InvalidMonth(s.to_string()))
}
