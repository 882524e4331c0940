//! This week's events and the client-side list filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WeekenderError;

/// Response of `GET /events/this-week`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<EventItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-text day/date info scraped alongside the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_hint: Option<String>,
    /// "indoor", "outdoor" or "unknown" when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// Environment filter for the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentFilter {
    #[default]
    All,
    Indoor,
    Outdoor,
    /// Events that carry no environment at all.
    Unknown,
}

impl EnvironmentFilter {
    fn matches(&self, event: &EventItem) -> bool {
        match self {
            EnvironmentFilter::All => true,
            EnvironmentFilter::Indoor => event.environment.as_deref() == Some("indoor"),
            EnvironmentFilter::Outdoor => event.environment.as_deref() == Some("outdoor"),
            EnvironmentFilter::Unknown => {
                event.environment.is_none() || event.environment.as_deref() == Some("unknown")
            }
        }
    }
}

impl FromStr for EnvironmentFilter {
    type Err = WeekenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(EnvironmentFilter::All),
            "indoor" => Ok(EnvironmentFilter::Indoor),
            "outdoor" => Ok(EnvironmentFilter::Outdoor),
            "unknown" | "mixed" => Ok(EnvironmentFilter::Unknown),
            _ => Err(WeekenderError::InvalidChoice {
                field: "environment",
                value: s.to_string(),
                expected: "all, indoor, outdoor, unknown",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Title,
}

impl FromStr for SortBy {
    type Err = WeekenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortBy::Date),
            "title" | "name" => Ok(SortBy::Title),
            _ => Err(WeekenderError::InvalidChoice {
                field: "sort",
                value: s.to_string(),
                expected: "date, title",
            }),
        }
    }
}

/// Search, environment and ordering applied to the fetched list.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub search: String,
    pub environment: EnvironmentFilter,
    pub sort_by: SortBy,
}

impl EventQuery {
    fn matches_search(&self, event: &EventItem) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        event.title.to_lowercase().contains(&needle)
            || event
                .details
                .as_deref()
                .is_some_and(|details| details.to_lowercase().contains(&needle))
    }

    /// Filter and sort `events`. The sort is stable.
    pub fn apply<'a>(&self, events: &'a [EventItem]) -> Vec<&'a EventItem> {
        let mut matched: Vec<&EventItem> = events
            .iter()
            .filter(|event| self.matches_search(event) && self.environment.matches(event))
            .collect();

        match self.sort_by {
            SortBy::Title => matched.sort_by_cached_key(|event| event.title.to_lowercase()),
            SortBy::Date => matched.sort_by(|a, b| {
                let a = a.date_hint.as_deref().unwrap_or("");
                let b = b.date_hint.as_deref().unwrap_or("");
                a.cmp(b)
            }),
        }

        matched
    }
}

/// "1 event found", "3 events found".
pub struct ResultCount(pub usize);

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0 == 1 { "event" } else { "events" };
        write!(f, "{} {} found", self.0, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, details: Option<&str>, date_hint: Option<&str>, env: Option<&str>) -> EventItem {
        EventItem {
            title: title.to_string(),
            details: details.map(str::to_string),
            url: None,
            date_hint: date_hint.map(str::to_string),
            environment: env.map(str::to_string),
        }
    }

    fn sample() -> Vec<EventItem> {
        vec![
            event("Jazz Night", Some("Live music downtown"), Some("Sat"), Some("indoor")),
            event("Riverfront Run", None, Some("Fri"), Some("outdoor")),
            event("Art Walk", Some("Galleries on Penn Ave"), None, None),
            event("Pirates Game", Some("PNC Park, outdoor seating"), Some("Sun"), Some("unknown")),
        ]
    }

    fn titles(events: &[&EventItem]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_search_matches_title_or_details_case_insensitively() {
        let events = sample();
        let query = EventQuery {
            search: "MUSIC".into(),
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&events)), vec!["Jazz Night"]);

        let query = EventQuery {
            search: "walk".into(),
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&events)), vec!["Art Walk"]);
    }

    #[test]
    fn test_environment_filter() {
        let events = sample();
        let query = EventQuery {
            environment: EnvironmentFilter::Outdoor,
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&events)), vec!["Riverfront Run"]);

        let query = EventQuery {
            environment: EnvironmentFilter::Unknown,
            sort_by: SortBy::Title,
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&events)), vec!["Art Walk", "Pirates Game"]);
    }

    #[test]
    fn test_sort_by_date_hint_puts_missing_first() {
        let events = sample();
        let sorted = EventQuery::default().apply(&events);
        assert_eq!(
            titles(&sorted),
            vec!["Art Walk", "Riverfront Run", "Jazz Night", "Pirates Game"]
        );
    }

    #[test]
    fn test_sort_by_title() {
        let events = sample();
        let query = EventQuery {
            sort_by: SortBy::Title,
            ..Default::default()
        };
        assert_eq!(
            titles(&query.apply(&events)),
            vec!["Art Walk", "Jazz Night", "Pirates Game", "Riverfront Run"]
        );
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let events = vec![
            event("Zoo Lights", None, None, None),
            event("art crawl", None, None, None),
            event("Brunch", None, None, None),
        ];
        let query = EventQuery {
            sort_by: SortBy::Title,
            ..Default::default()
        };
        assert_eq!(
            titles(&query.apply(&events)),
            vec!["art crawl", "Brunch", "Zoo Lights"]
        );
    }

    #[test]
    fn test_result_count_pluralization() {
        assert_eq!(ResultCount(1).to_string(), "1 event found");
        assert_eq!(ResultCount(0).to_string(), "0 events found");
        assert_eq!(ResultCount(3).to_string(), "3 events found");
    }

    #[test]
    fn test_events_response_tolerates_missing_fields() {
        let json = r#"{"events":[{"title":"Jazz Night","environment":"indoor"}]}"#;
        let parsed: EventsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.events.len(), 1);
        assert_eq!(parsed.events[0].details, None);

        let empty: EventsResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.events.is_empty());
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("Mixed".parse::<EnvironmentFilter>().unwrap(), EnvironmentFilter::Unknown);
        assert_eq!("name".parse::<SortBy>().unwrap(), SortBy::Title);
        assert!("popularity".parse::<SortBy>().is_err());
    }
}
