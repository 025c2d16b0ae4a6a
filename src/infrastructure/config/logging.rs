//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Accepted values for [`LoggingConfig::format`].
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Raise the configured level according to `-v` count.
    ///
    /// Zero leaves the configured level untouched.
    pub fn apply_verbosity(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        self.level = level.into();
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs are written to stderr so stdout stays parseable in JSON mode.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_zero_keeps_configured_level() {
        let mut config = LoggingConfig {
            level: "error".into(),
            ..LoggingConfig::default()
        };
        config.apply_verbosity(0);
        assert_eq!(config.level, "error");
    }

    #[test]
    fn verbosity_raises_level() {
        let mut config = LoggingConfig::default();
        config.apply_verbosity(2);
        assert_eq!(config.level, "debug");
        config.apply_verbosity(7);
        assert_eq!(config.level, "trace");
    }
}
