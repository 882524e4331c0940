//! Date-range picker logic.
//!
//! - `grid`: the 6-week month grid and per-day classification
//! - `preset`: quick-select shortcuts (this weekend, next weekend, Friday night)
//! - `picker`: the click-to-select state machine that ties them together

pub mod grid;
pub mod picker;
pub mod preset;

use chrono::NaiveTime;

pub use grid::{CalendarDay, GRID_DAYS, first_of_month, month_grid, parse_month, shift_month};
pub use picker::{DatePicker, SelectionMode};
pub use preset::{QuickSelect, upcoming_saturday, upcoming_weekend};

/// Times of day applied to picked dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    /// Time given to a clicked start date and to weekend presets.
    pub day_start: NaiveTime,
    /// Time given to a clicked end date and to every preset's end.
    pub day_end: NaiveTime,
    /// Start time of the Friday night preset.
    pub friday_start: NaiveTime,
}

impl DayHours {
    /// Build from whole hours. Hours outside 0..24 are clamped to 23.
    pub fn from_hours(day_start: u32, day_end: u32, friday_start: u32) -> Self {
        let hour = |h: u32| NaiveTime::from_hms_opt(h.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
        DayHours {
            day_start: hour(day_start),
            day_end: hour(day_end),
            friday_start: hour(friday_start),
        }
    }
}

impl Default for DayHours {
    fn default() -> Self {
        DayHours::from_hours(9, 21, 18)
    }
}
