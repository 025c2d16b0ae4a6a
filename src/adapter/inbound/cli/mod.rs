//! Command-line host for the calculator.

pub mod chart;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod evaluate;
pub mod interactive;
pub mod output;
pub mod sweep;

use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::infrastructure::config::{Config, DEFAULT_CONFIG_FILE};
use command::{Cli, Commands, ConfigCommand, InputArgs};

/// Configuration file selected by the global `--config` flag.
#[must_use]
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Dispatch the parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = config_path(cli);

    match &cli.command {
        Some(Commands::Config(ConfigCommand::Init(args))) => {
            Config::default().init_logging(cli.verbose);
            return config::execute_init(&path, args.force);
        }
        Some(Commands::Config(ConfigCommand::Validate)) => {
            Config::default().init_logging(cli.verbose);
            return config::execute_validate(&path);
        }
        _ => {}
    }

    // Inputs are validated after the command-line overrides are merged in.
    let config = Config::load_or_default(&path, cli.config.is_some())?;
    config.init_logging(cli.verbose);
    debug!(path = %path.display(), "Configuration loaded");

    let base = config.inputs();
    match &cli.command {
        None => evaluate::execute(InputArgs::default().apply(base)),
        Some(Commands::Evaluate(args)) => evaluate::execute(args.apply(base)),
        Some(Commands::Interactive(args)) => interactive::execute(args.apply(base)),
        Some(Commands::Sweep(args)) => sweep::execute(args, args.inputs.apply(base)),
        Some(Commands::Config(ConfigCommand::Show)) => config::execute_show(&config),
        Some(Commands::Config(ConfigCommand::Init(_) | ConfigCommand::Validate)) => Ok(()),
    }
}
