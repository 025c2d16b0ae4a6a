//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../insurance-check.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(&json!({ "created": path.display().to_string() }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your numbers", path.display()));
    output::note(&format!(
        "2. Run: insurance-check --config {} evaluate",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    let inputs = config.inputs();

    if output::is_json() {
        output::json_output(&json!({
            "inputs": inputs,
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Inputs");
    output::field("Current wealth", inputs.current_wealth);
    output::field("Risk aversion", inputs.risk_aversion);
    output::field("Monthly costs", inputs.monthly_costs);
    output::field("Payout", inputs.payout);
    output::field("Probability per month", inputs.probability_per_month);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Checks the `[inputs]` table as written, with no overrides applied.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    config.validate_inputs()?;

    if output::is_json() {
        output::json_output(&json!({ "valid": true, "path": path.display().to_string() }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");

    if config.inputs().monthly_costs == 0.0 {
        output::warning("monthly_costs is 0; insuring can never cost anything");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.inputs(), crate::domain::Inputs::default());
    }

    #[test]
    fn validate_rejects_out_of_range_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insurance-check.toml");
        fs::write(&path, "[inputs]\npayout = -1.0\n").unwrap();

        let result = execute_validate(&path);
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::Input(_)))
        ));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insurance-check.toml");
        fs::write(&path, "# mine\n").unwrap();

        let result = execute_init(&path, false);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
