//! Itinerary request and response types.
//!
//! The request mirrors the planner form: where you start, how far you are
//! willing to go, when, and what you like. Generation itself happens on
//! the server.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::{DateRange, parse_input};
use crate::error::{WeekenderError, WeekenderResult};

/// Interests the planner knows how to plan around.
pub const AVAILABLE_INTERESTS: [&str; 9] = [
    "food", "museums", "art", "music", "sports", "outdoors", "shopping", "history", "nightlife",
];

pub const DEFAULT_CITY: &str = "Pittsburgh, PA";
pub const DEFAULT_ADDRESS: &str = "Hamburg Hall, 4800 Forbes Ave, Pittsburgh, PA 15213";
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 5.0;

macro_rules! choice_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = WeekenderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(WeekenderError::InvalidChoice {
                        field: $field,
                        value: s.to_string(),
                        expected: concat!($($text, " "),+),
                    }),
                }
            }
        }
    };
}

choice_enum!(BudgetLevel, "budget", { Low => "low", Medium => "medium", High => "high" });
choice_enum!(Mobility, "mobility", { Walk => "walk", Transit => "transit", Drive => "drive" });
choice_enum!(EnvironmentPreference, "environment", {
    Indoor => "indoor",
    Outdoor => "outdoor",
    Either => "either",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub budget_level: BudgetLevel,
    pub interests: Vec<String>,
    pub mobility: Mobility,
    pub environment: EnvironmentPreference,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            budget_level: BudgetLevel::Medium,
            interests: vec!["food".to_string(), "museums".to_string()],
            mobility: Mobility::Walk,
            environment: EnvironmentPreference::Either,
        }
    }
}

impl Preferences {
    /// Add the interest if absent, remove it if present.
    /// Returns whether the interest is now selected.
    pub fn toggle_interest(&mut self, interest: &str) -> WeekenderResult<bool> {
        let interest = interest.trim().to_ascii_lowercase();
        if !AVAILABLE_INTERESTS.contains(&interest.as_str()) {
            return Err(WeekenderError::UnknownInterest(
                interest,
                AVAILABLE_INTERESTS.join(", "),
            ));
        }

        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
            Ok(false)
        } else {
            self.interests.push(interest);
            Ok(true)
        }
    }
}

/// Body of `POST /itinerary` and `POST /itinerary/options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub city: String,
    /// ISO-minute local time, as produced by the date picker.
    pub start_date: String,
    pub end_date: String,
    pub user_address: String,
    pub max_distance_miles: f64,
    pub preferences: Preferences,
}

impl ItineraryRequest {
    pub fn new(city: impl Into<String>, user_address: impl Into<String>, range: DateRange) -> Self {
        let (start_date, end_date) = range.to_inputs();
        ItineraryRequest {
            city: city.into(),
            start_date,
            end_date,
            user_address: user_address.into(),
            max_distance_miles: DEFAULT_MAX_DISTANCE_MILES,
            preferences: Preferences::default(),
        }
    }

    /// Store a new `(start, end)` pair from the picker.
    pub fn set_dates(&mut self, start: &str, end: &str) {
        self.start_date = start.to_string();
        self.end_date = end.to_string();
    }

    pub fn range(&self) -> DateRange {
        DateRange::from_inputs(&self.start_date, &self.end_date)
    }

    /// Reject requests the server would have to guess at.
    pub fn validate(&self) -> WeekenderResult<()> {
        let (Some(start), Some(end)) = (parse_input(&self.start_date), parse_input(&self.end_date))
        else {
            return Err(WeekenderError::InvalidRequest(
                "both a start and an end date are required".into(),
            ));
        };
        if start > end {
            return Err(WeekenderError::InvalidRequest(format!(
                "start {} is after end {}",
                self.start_date, self.end_date
            )));
        }
        if !(self.max_distance_miles > 0.0) {
            return Err(WeekenderError::InvalidRequest(
                "max distance must be greater than zero".into(),
            ));
        }
        if self.city.trim().is_empty() {
            return Err(WeekenderError::InvalidRequest("city is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub cost_estimate: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    /// Where the suggestion came from, e.g. "visitpgh" or "yelp".
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Server datetime string; only the date part is meaningful.
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl DayPlan {
    pub fn day(&self) -> Option<NaiveDate> {
        self.date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub title: String,
    #[serde(default)]
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Item counts by source.
    #[serde(default)]
    pub sources: BTreeMap<String, u32>,
}

impl ItineraryResponse {
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryOptionsResponse {
    #[serde(default)]
    pub options: Vec<ItineraryResponse>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub used_sources: BTreeMap<String, u32>,
}
