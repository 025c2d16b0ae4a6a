//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`. Without a subcommand the
//! calculator evaluates the configured inputs once.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Inputs;

/// Compare certainty-equivalent wealth with and without insurance
#[derive(Parser, Debug)]
#[command(name = "insurance-check")]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file [default: insurance-check.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the inputs once and draw the comparison (default)
    Evaluate(InputArgs),

    /// Edit inputs in a prompt loop, re-evaluating after every change
    Interactive(InputArgs),

    /// Vary one input over a range and tabulate the results
    Sweep(SweepArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `insurance-check config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Overrides for the five calculator inputs.
///
/// Each flag replaces the value from the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Current wealth
    #[arg(long)]
    pub wealth: Option<f64>,

    /// Risk aversion coefficient (0 to 10)
    #[arg(long)]
    pub risk_aversion: Option<f64>,

    /// Insurance premium per month
    #[arg(long)]
    pub monthly_costs: Option<f64>,

    /// Loss covered by the insurance
    #[arg(long)]
    pub payout: Option<f64>,

    /// Incident probability per month (0 to 1)
    #[arg(long)]
    pub probability: Option<f64>,
}

impl InputArgs {
    /// Apply the given overrides on top of `inputs`.
    #[must_use]
    pub fn apply(&self, inputs: Inputs) -> Inputs {
        Inputs {
            current_wealth: self.wealth.unwrap_or(inputs.current_wealth),
            risk_aversion: self.risk_aversion.unwrap_or(inputs.risk_aversion),
            monthly_costs: self.monthly_costs.unwrap_or(inputs.monthly_costs),
            payout: self.payout.unwrap_or(inputs.payout),
            probability_per_month: self.probability.unwrap_or(inputs.probability_per_month),
        }
    }
}

/// One of the five calculator inputs, as named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputField {
    /// Current wealth
    Wealth,
    /// Risk aversion coefficient
    RiskAversion,
    /// Monthly premium
    MonthlyCosts,
    /// Covered loss
    Payout,
    /// Incident probability per month
    Probability,
}

impl InputField {
    /// Every field in display order.
    pub const ALL: [Self; 5] = [
        Self::Wealth,
        Self::RiskAversion,
        Self::MonthlyCosts,
        Self::Payout,
        Self::Probability,
    ];

    /// Current value of this field in `inputs`.
    #[must_use]
    pub fn get(self, inputs: &Inputs) -> f64 {
        match self {
            Self::Wealth => inputs.current_wealth,
            Self::RiskAversion => inputs.risk_aversion,
            Self::MonthlyCosts => inputs.monthly_costs,
            Self::Payout => inputs.payout,
            Self::Probability => inputs.probability_per_month,
        }
    }

    /// Replace this field in `inputs` with `value`.
    #[must_use]
    pub fn set(self, mut inputs: Inputs, value: f64) -> Inputs {
        match self {
            Self::Wealth => inputs.current_wealth = value,
            Self::RiskAversion => inputs.risk_aversion = value,
            Self::MonthlyCosts => inputs.monthly_costs = value,
            Self::Payout => inputs.payout = value,
            Self::Probability => inputs.probability_per_month = value,
        }
        inputs
    }

    /// Column header for tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wealth => "Wealth",
            Self::RiskAversion => "Risk aversion",
            Self::MonthlyCosts => "Monthly costs",
            Self::Payout => "Payout",
            Self::Probability => "Probability",
        }
    }
}

/// Arguments for the `sweep` subcommand.
#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// Input to vary
    #[arg(long, value_enum)]
    pub field: InputField,

    /// First value of the range
    #[arg(long, allow_negative_numbers = true)]
    pub from: f64,

    /// Last value of the range
    #[arg(long, allow_negative_numbers = true)]
    pub to: f64,

    /// Number of evenly spaced points, endpoints included
    #[arg(long, default_value = "11")]
    pub steps: usize,

    /// Fixed values for the remaining inputs
    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "insurance-check");
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["insurance-check"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["insurance-check", "evaluate", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["insurance-check", "--color", "never"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_input_overrides_replace_only_given_fields() {
        let cli = Cli::try_parse_from([
            "insurance-check",
            "evaluate",
            "--payout",
            "5000",
            "--probability",
            "0.01",
        ])
        .unwrap();
        let Some(Commands::Evaluate(args)) = cli.command else {
            panic!("expected evaluate command");
        };

        let inputs = args.apply(Inputs::default());
        assert_eq!(inputs.payout, 5000.0);
        assert_eq!(inputs.probability_per_month, 0.01);
        assert_eq!(inputs.current_wealth, 30_000.0);
        assert_eq!(inputs.risk_aversion, 3.0);
    }

    #[test]
    fn test_parse_sweep() {
        let cli = Cli::try_parse_from([
            "insurance-check",
            "sweep",
            "--field",
            "risk-aversion",
            "--from",
            "0",
            "--to",
            "5",
            "--steps",
            "6",
        ])
        .unwrap();
        let Some(Commands::Sweep(args)) = cli.command else {
            panic!("expected sweep command");
        };
        assert_eq!(args.field, InputField::RiskAversion);
        assert_eq!(args.steps, 6);
        assert_eq!(args.to, 5.0);
    }

    #[test]
    fn test_input_field_sets_value() {
        let inputs = InputField::MonthlyCosts.set(Inputs::default(), 42.0);
        assert_eq!(inputs.monthly_costs, 42.0);
        assert_eq!(inputs.payout, Inputs::default().payout);
    }

    #[test]
    fn test_input_field_reads_every_field() {
        let inputs = Inputs::default();
        let values: Vec<f64> = InputField::ALL
            .iter()
            .map(|field| field.get(&inputs))
            .collect();
        assert_eq!(values, vec![30_000.0, 3.0, 20.0, 10_000.0, 0.0005]);
    }

    #[test]
    fn test_input_field_set_then_get() {
        for field in InputField::ALL {
            let inputs = field.set(Inputs::default(), 0.25);
            assert_eq!(field.get(&inputs), 0.25);
        }
    }
}
