pub mod about;
pub mod calendar;
pub mod events;
pub mod food;
pub mod health;
pub mod pick;
pub mod plan;
pub mod weekend;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use weekender_core::calendar::DayHours;
use weekender_core::clock::{Clock, FixedClock};
use weekender_core::config::Settings;
use weekender_core::date_range::{DateRange, parse_date, parse_datetime};

use crate::client::Client;

/// Settings and clock, resolved once per invocation.
pub struct AppContext {
    pub settings: Settings,
    pub clock: Box<dyn Clock>,
}

impl AppContext {
    /// `today` pins the clock to a date instead of reading the system time.
    pub fn new(settings: Settings, today: Option<&str>) -> Result<Self> {
        let clock: Box<dyn Clock> = match today {
            Some(date) => Box::new(FixedClock::on(parse_date(date)?)),
            None => {
                let clock = settings.clock()?;
                tracing::debug!(timezone = %clock.timezone(), "resolved clock");
                Box::new(clock)
            }
        };
        Ok(Self { settings, clock })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn hours(&self) -> DayHours {
        self.settings.day_hours()
    }

    pub fn client(&self) -> Result<Client> {
        Client::new(&self.settings)
    }
}

/// Parse a `--start`/`--end` argument. A bare date gets `default_time`.
pub fn parse_endpoint(value: &str, default_time: NaiveTime) -> Result<NaiveDateTime> {
    if let Ok(dt) = parse_datetime(value) {
        return Ok(dt);
    }
    Ok(parse_date(value)?.and_time(default_time))
}

/// Build a range from optional command-line endpoints.
pub fn range_from_args(start: Option<&str>, end: Option<&str>, hours: DayHours) -> Result<DateRange> {
    let start = start.map(|s| parse_endpoint(s, hours.day_start)).transpose()?;
    let end = end.map(|s| parse_endpoint(s, hours.day_end)).transpose()?;

    if let (Some(start), Some(end)) = (start, end)
        && start > end
    {
        anyhow::bail!("Start {} is after end {}", start, end);
    }

    Ok(DateRange { start, end })
}

/// Generic retry hint for network failures.
pub fn retry_hint() -> &'static str {
    "Please try again. Run `weekender health` to check that the planner API is reachable."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_dates_get_day_hours() {
        let range = range_from_args(Some("2024-01-13"), Some("2024-01-14"), DayHours::default()).unwrap();
        assert_eq!(range.to_inputs(), ("2024-01-13T09:00".to_string(), "2024-01-14T21:00".to_string()));
    }

    #[test]
    fn test_explicit_times_are_kept() {
        let range = range_from_args(Some("2024-01-12T18:30"), None, DayHours::default()).unwrap();
        assert_eq!(range.to_inputs(), ("2024-01-12T18:30".to_string(), String::new()));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        assert!(range_from_args(Some("2024-01-14"), Some("2024-01-13"), DayHours::default()).is_err());
    }
}
