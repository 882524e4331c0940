//! Client configuration.
//!
//! Layered from built-in defaults, `~/.config/weekender/config.toml`
//! and `WEEKENDER_*` environment variables, later layers winning.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;

use crate::calendar::DayHours;
use crate::clock::{SystemClock, resolve_timezone};
use crate::error::{WeekenderError, WeekenderResult};
use crate::itinerary::{DEFAULT_ADDRESS, DEFAULT_CITY, DEFAULT_MAX_DISTANCE_MILES};

static DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
static DEFAULT_API_PREFIX: &str = "/api";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_itinerary_timeout_secs() -> u64 {
    180
}

fn default_day_start_hour() -> u32 {
    9
}

fn default_day_end_hour() -> u32 {
    21
}

fn default_friday_start_hour() -> u32 {
    18
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_user_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_max_distance_miles() -> f64 {
    DEFAULT_MAX_DISTANCE_MILES
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where the planner API is served, without the API prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Itinerary generation is slow, so it gets its own timeout.
    #[serde(default = "default_itinerary_timeout_secs")]
    pub itinerary_timeout_secs: u64,

    /// IANA timezone name. The system timezone when unset.
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,

    #[serde(default = "default_friday_start_hour")]
    pub friday_start_hour: u32,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_user_address")]
    pub user_address: String,

    #[serde(default = "default_max_distance_miles")]
    pub max_distance_miles: f64,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base_url: default_api_base_url(),
            api_prefix: default_api_prefix(),
            request_timeout_secs: default_request_timeout_secs(),
            itinerary_timeout_secs: default_itinerary_timeout_secs(),
            timezone: None,
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            friday_start_hour: default_friday_start_hour(),
            city: default_city(),
            user_address: default_user_address(),
            max_distance_miles: default_max_distance_miles(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl Settings {
    pub fn config_path() -> WeekenderResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WeekenderError::Config("Could not determine config directory".into()))?
            .join("weekender");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out config file
    /// there first if none exists.
    pub fn load() -> WeekenderResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            if let Err(e) = Self::create_default_config(&config_path) {
                tracing::warn!(path = %config_path.display(), error = %e, "could not write default config");
            }
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> WeekenderResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load_from`], reading `WEEKENDER_*` variables from
    /// `env` instead of the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> WeekenderResult<Self> {
        let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        tracing::debug!(path = %path.display(), "loading config");

        let settings: Settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("WEEKENDER").try_parsing(true).source(env))
            .build()
            .map_err(|e| WeekenderError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WeekenderError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> WeekenderResult<()> {
        for (name, hour) in [
            ("day_start_hour", self.day_start_hour),
            ("day_end_hour", self.day_end_hour),
            ("friday_start_hour", self.friday_start_hour),
        ] {
            if hour > 23 {
                return Err(WeekenderError::Config(format!(
                    "{name} must be between 0 and 23, got {hour}"
                )));
            }
        }
        if self.day_start_hour > self.day_end_hour {
            return Err(WeekenderError::Config(format!(
                "day_start_hour ({}) is after day_end_hour ({})",
                self.day_start_hour, self.day_end_hour
            )));
        }
        if self.request_timeout_secs == 0 || self.itinerary_timeout_secs == 0 {
            return Err(WeekenderError::Config("timeouts must be at least one second".into()));
        }
        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> WeekenderResult<()> {
        let contents = format!(
            "\
# weekender configuration

# Planner API location (WEEKENDER_API_BASE_URL overrides):
# api_base_url = \"{DEFAULT_API_BASE_URL}\"
# api_prefix = \"{DEFAULT_API_PREFIX}\"

# Request timeouts in seconds:
# request_timeout_secs = 10
# itinerary_timeout_secs = 180

# Timezone for \"today\" (defaults to the system timezone):
# timezone = \"America/New_York\"

# Times given to picked dates:
# day_start_hour = 9
# day_end_hour = 21
# friday_start_hour = 18

# Planner form defaults:
# city = \"{DEFAULT_CITY}\"
# user_address = \"{DEFAULT_ADDRESS}\"
# max_distance_miles = 5

# Logging (RUST_LOG overrides):
# log_level = \"warn\"
# log_format = \"pretty\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;

        Ok(())
    }

    pub fn day_hours(&self) -> DayHours {
        DayHours::from_hours(self.day_start_hour, self.day_end_hour, self.friday_start_hour)
    }

    pub fn timezone(&self) -> WeekenderResult<Tz> {
        resolve_timezone(self.timezone.as_deref())
    }

    pub fn clock(&self) -> WeekenderResult<SystemClock> {
        Ok(SystemClock::new(self.timezone()?))
    }

    /// Base URL joined with the API prefix, without a trailing slash.
    pub fn api_root(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.itinerary_timeout_secs, 180);
        assert_eq!(settings.city, "Pittsburgh, PA");
        assert_eq!(settings.day_hours(), DayHours::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://planner.example.com/\"\n\
             day_start_hour = 10\n\
             timezone = \"America/New_York\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.api_root(), "https://planner.example.com/api");
        assert_eq!(settings.day_start_hour, 10);
        assert_eq!(settings.timezone().unwrap(), chrono_tz::America::New_York);
        assert_eq!(settings.day_end_hour, 21);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://planner.example.com\"\nday_start_hour = 10\n",
        )
        .unwrap();

        let env: Map<String, String> = [
            ("WEEKENDER_API_BASE_URL", "http://env.example:9000"),
            ("WEEKENDER_DAY_START_HOUR", "8"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::load_with_env(&path, Some(env)).unwrap();
        assert_eq!(settings.api_base_url, "http://env.example:9000");
        assert_eq!(settings.day_start_hour, 8);
        assert_eq!(settings.day_end_hour, 21);
    }

    #[test]
    fn test_default_config_write_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = Settings::create_default_config(&blocker.join("config.toml")).unwrap_err();
        assert!(matches!(err, WeekenderError::Io(_)));
    }

    #[test]
    fn test_generated_default_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Settings::create_default_config(&path).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_rejects_out_of_range_hours() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "day_end_hour = 25\n").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("day_end_hour"));
    }

    #[test]
    fn test_api_root_without_prefix() {
        let settings = Settings {
            api_prefix: String::new(),
            ..Settings::default()
        };
        assert_eq!(settings.api_root(), "http://localhost:8000");
    }
}
