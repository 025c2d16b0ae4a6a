//! Handler for the `sweep` command.

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{SweepArgs, InputField};
use crate::adapter::inbound::cli::output;
use crate::domain::{compare, Comparison, DomainError, Inputs, Verdict};
use crate::error::{ConfigError, Result};

/// One evaluated point of a sweep.
#[derive(Debug, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    #[serde(flatten)]
    pub outcome: SweepOutcome,
}

/// Result of evaluating one sweep point.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepOutcome {
    Evaluated {
        wealth_with_insurance: f64,
        wealth_without_insurance: f64,
        margin: f64,
        verdict: Verdict,
    },
    Failed {
        error: String,
    },
}

impl From<std::result::Result<Comparison, DomainError>> for SweepOutcome {
    fn from(result: std::result::Result<Comparison, DomainError>) -> Self {
        match result {
            Ok(comparison) => Self::Evaluated {
                wealth_with_insurance: comparison.wealth_with_insurance,
                wealth_without_insurance: comparison.wealth_without_insurance,
                margin: comparison.margin(),
                verdict: comparison.verdict(),
            },
            Err(err) => Self::Failed {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Tabled)]
struct SweepRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Mit Versicherung")]
    with_insurance: String,
    #[tabled(rename = "Ohne Versicherung")]
    without_insurance: String,
    #[tabled(rename = "Margin")]
    margin: String,
    #[tabled(rename = "Verdict")]
    verdict: String,
}

impl From<&SweepPoint> for SweepRow {
    fn from(point: &SweepPoint) -> Self {
        let value = point.value.to_string();
        match &point.outcome {
            SweepOutcome::Evaluated {
                wealth_with_insurance,
                wealth_without_insurance,
                margin,
                verdict,
            } => Self {
                value,
                with_insurance: output::amount(*wealth_with_insurance),
                without_insurance: output::amount(*wealth_without_insurance),
                margin: output::amount(*margin),
                verdict: verdict.to_string(),
            },
            SweepOutcome::Failed { error } => Self {
                value,
                with_insurance: "-".to_string(),
                without_insurance: "-".to_string(),
                margin: "-".to_string(),
                verdict: error.clone(),
            },
        }
    }
}

/// Evenly spaced values from `from` to `to`, endpoints included.
#[must_use]
pub fn grid(from: f64, to: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![from];
    }
    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            if i == steps - 1 {
                to
            } else {
                from + (to - from) * (i as f64 / last)
            }
        })
        .collect()
}

/// Evaluate `field` at every grid point, keeping the other inputs fixed.
#[must_use]
pub fn run_sweep(base: Inputs, field: InputField, values: &[f64]) -> Vec<SweepPoint> {
    values
        .iter()
        .map(|&value| SweepPoint {
            value,
            outcome: compare(&field.set(base, value)).into(),
        })
        .collect()
}

/// Execute the sweep command.
pub fn execute(args: &SweepArgs, base: Inputs) -> Result<()> {
    if args.steps < 2 {
        return Err(ConfigError::InvalidValue {
            field: "steps",
            reason: format!("must be at least 2, got {}", args.steps),
        }
        .into());
    }
    for (field, value) in [("from", args.from), ("to", args.to)] {
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue {
                field,
                reason: "must be a finite number".to_string(),
            }
            .into());
        }
    }

    let points = run_sweep(base, args.field, &grid(args.from, args.to, args.steps));

    if output::is_json() {
        output::json_output(&serde_json::json!({
            "field": args.field.label(),
            "inputs": base,
            "points": serde_json::to_value(&points)?,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Sweep: {}", args.field.label()));
    let rows: Vec<SweepRow> = points.iter().map(SweepRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
