//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct holding the default calculator inputs and
//! logging settings. Every section and key is optional; missing values fall
//! back to the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use insurance_check::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("insurance-check.toml")?;
//!     config.init_logging(0);
//!     let inputs = config.inputs();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::domain::Inputs;
use crate::error::{ConfigError, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "insurance-check.toml";

/// Calculator inputs as they appear in the `[inputs]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_current_wealth")]
    pub current_wealth: f64,
    #[serde(default = "default_risk_aversion")]
    pub risk_aversion: f64,
    #[serde(default = "default_monthly_costs")]
    pub monthly_costs: f64,
    #[serde(default = "default_payout")]
    pub payout: f64,
    #[serde(default = "default_probability_per_month")]
    pub probability_per_month: f64,
}

fn default_current_wealth() -> f64 {
    Inputs::default().current_wealth
}

fn default_risk_aversion() -> f64 {
    Inputs::default().risk_aversion
}

fn default_monthly_costs() -> f64 {
    Inputs::default().monthly_costs
}

fn default_payout() -> f64 {
    Inputs::default().payout
}

fn default_probability_per_month() -> f64 {
    Inputs::default().probability_per_month
}

impl Default for InputsConfig {
    fn default() -> Self {
        Inputs::default().into()
    }
}

impl From<Inputs> for InputsConfig {
    fn from(inputs: Inputs) -> Self {
        Self {
            current_wealth: inputs.current_wealth,
            risk_aversion: inputs.risk_aversion,
            monthly_costs: inputs.monthly_costs,
            payout: inputs.payout,
            probability_per_month: inputs.probability_per_month,
        }
    }
}

impl From<&InputsConfig> for Inputs {
    fn from(config: &InputsConfig) -> Self {
        Self {
            current_wealth: config.current_wealth,
            risk_aversion: config.risk_aversion,
            monthly_costs: config.monthly_costs,
            payout: config.payout,
            probability_per_month: config.probability_per_month,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Starting values for the five calculator inputs.
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// The `[inputs]` table is only checked for shape here. Command-line
    /// overrides apply on top of it before the merged inputs are validated;
    /// see [`Config::validate_inputs`] for the standalone check.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the logging section is
    /// invalid.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - The logging section is invalid
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, tolerating a missing file at the default location.
    ///
    /// A path the user named explicitly must exist; the default path may be
    /// absent, in which case built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] whenever a file is read.
    pub fn load_or_default<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!("{err} in {:?}", self.logging.level),
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "must be one of {}, got {:?}",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Check the `[inputs]` table on its own, without any overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Input`] naming the first offending field.
    pub fn validate_inputs(&self) -> Result<()> {
        self.inputs().validate().map_err(ConfigError::Input)?;
        Ok(())
    }

    /// Calculator inputs described by this configuration.
    #[must_use]
    pub fn inputs(&self) -> Inputs {
        Inputs::from(&self.inputs)
    }

    /// Initialize logging from the `[logging]` section, raised by `-v` count.
    pub fn init_logging(&self, verbose: u8) {
        let mut logging = self.logging.clone();
        logging.apply_verbosity(verbose);
        logging.init();
    }
}
