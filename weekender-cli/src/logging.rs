//! Logging initialization.

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt};

use weekender_core::config::Settings;

fn filter(level: &str, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Subscriber used while the settings are being loaded, before the
/// configured level and format are known.
pub fn bootstrap(verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    fmt()
        .with_env_filter(filter("warn", verbose))
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the tracing subscriber. Logs go to stderr so they never mix with
/// command output. `RUST_LOG` wins over the configured level, `--verbose`
/// raises the configured level to debug.
pub fn init(settings: &Settings, verbose: bool) {
    let filter = filter(&settings.log_level, verbose);

    match settings.log_format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
        _ => {
            fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_subscriber_records_config_warnings() {
        let enabled = tracing::subscriber::with_default(bootstrap(false), || {
            tracing::enabled!(tracing::Level::WARN)
        });
        assert!(enabled);
    }
}
