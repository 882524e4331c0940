//! Clock and timezone inputs.
//!
//! Everything that depends on "now" takes a [`Clock`], so the picker and
//! presets can be driven with a fixed date in tests.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{WeekenderError, WeekenderResult};

pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Today's local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real clock, reading UTC and converting into a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        SystemClock { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Clock frozen at a given local time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Fixed at noon on `date`.
    pub fn on(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        FixedClock(date.and_time(noon))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Resolve the timezone to use: the configured name if given, otherwise the
/// system timezone, otherwise UTC.
pub fn resolve_timezone(configured: Option<&str>) -> WeekenderResult<Tz> {
    if let Some(name) = configured {
        return parse_timezone(name);
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => match parse_timezone(&name) {
            Ok(tz) => Ok(tz),
            Err(_) => {
                tracing::warn!(timezone = %name, "system timezone not recognized, using UTC");
                Ok(Tz::UTC)
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "could not detect system timezone, using UTC");
            Ok(Tz::UTC)
        }
    }
}

fn parse_timezone(name: &str) -> WeekenderResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| WeekenderError::UnknownTimezone(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(FixedClock::on(date).today(), date);
    }

    #[test]
    fn test_resolve_configured_timezone() {
        let tz = resolve_timezone(Some("America/New_York")).unwrap();
        assert_eq!(tz, chrono_tz::America::New_York);
    }

    #[test]
    fn test_resolve_unknown_timezone_is_error() {
        let err = resolve_timezone(Some("Mars/Olympus_Mons")).unwrap_err();
        assert!(matches!(err, WeekenderError::UnknownTimezone(_)));
    }
}
