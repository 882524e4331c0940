//! Quick-select presets.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use super::DayHours;
use crate::date_range::DateRange;
use crate::error::WeekenderError;

/// One-click shortcuts that fill both endpoints of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickSelect {
    ThisWeekend,
    NextWeekend,
    FridayNight,
}

impl QuickSelect {
    pub const ALL: [QuickSelect; 3] = [
        QuickSelect::ThisWeekend,
        QuickSelect::NextWeekend,
        QuickSelect::FridayNight,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            QuickSelect::ThisWeekend => "this-weekend",
            QuickSelect::NextWeekend => "next-weekend",
            QuickSelect::FridayNight => "friday-night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickSelect::ThisWeekend => "This Weekend",
            QuickSelect::NextWeekend => "Next Weekend",
            QuickSelect::FridayNight => "Friday Night",
        }
    }

    /// The range this preset selects when today is `today`.
    pub fn range(&self, today: NaiveDate, hours: DayHours) -> DateRange {
        let weekend = upcoming_weekend(today, hours);
        match self {
            QuickSelect::ThisWeekend => weekend,
            QuickSelect::NextWeekend => weekend.shifted_days(7),
            QuickSelect::FridayNight => {
                let friday = upcoming_saturday(today) - Duration::days(1);
                DateRange {
                    start: Some(friday.and_time(hours.friday_start)),
                    end: weekend.end,
                }
            }
        }
    }
}

impl fmt::Display for QuickSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for QuickSelect {
    type Err = WeekenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickSelect::ALL
            .into_iter()
            .find(|preset| preset.slug() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| WeekenderError::UnknownPreset(s.to_string()))
    }
}

/// The next Saturday on or after `today`.
pub fn upcoming_saturday(today: NaiveDate) -> NaiveDate {
    let from_sunday = today.weekday().num_days_from_sunday() as i64;
    today + Duration::days((6 - from_sunday) % 7)
}

/// Upcoming Saturday at the day-start hour through the following Sunday at
/// the day-end hour.
pub fn upcoming_weekend(today: NaiveDate, hours: DayHours) -> DateRange {
    let saturday = upcoming_saturday(today);
    let sunday = saturday + Duration::days(1);
    DateRange::new(saturday.and_time(hours.day_start), sunday.and_time(hours.day_end))
}
