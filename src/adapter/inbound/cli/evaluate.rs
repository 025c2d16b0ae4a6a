//! Handler for the `evaluate` command.

use serde::Serialize;
use tracing::info;

use crate::adapter::inbound::cli::{chart, output};
use crate::domain::{compare, ChartData, Comparison, Inputs, Verdict};
use crate::error::Result;

/// Machine-readable result of one evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub inputs: Inputs,
    pub utility_with_insurance: f64,
    pub utility_without_insurance: f64,
    pub wealth_with_insurance: f64,
    pub wealth_without_insurance: f64,
    pub margin: f64,
    pub verdict: Verdict,
    pub chart: ChartData,
}

impl EvaluationReport {
    #[must_use]
    pub fn new(inputs: Inputs, comparison: &Comparison) -> Self {
        Self {
            inputs,
            utility_with_insurance: comparison.utility_with_insurance,
            utility_without_insurance: comparison.utility_without_insurance,
            wealth_with_insurance: comparison.wealth_with_insurance,
            wealth_without_insurance: comparison.wealth_without_insurance,
            margin: comparison.margin(),
            verdict: comparison.verdict(),
            chart: comparison.chart(),
        }
    }
}

/// Execute the evaluate command.
pub fn execute(inputs: Inputs) -> Result<()> {
    let comparison = compare(&inputs)?;
    info!(verdict = ?comparison.verdict(), margin = comparison.margin(), "Evaluation complete");

    if output::is_json() {
        let report = EvaluationReport::new(inputs, &comparison);
        output::json_output(&serde_json::to_value(report)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    print_inputs(&inputs);
    print_comparison(&comparison);
    Ok(())
}

/// Print the five inputs.
pub fn print_inputs(inputs: &Inputs) {
    output::section("Inputs");
    output::field("Current wealth", output::amount(inputs.current_wealth));
    output::field("Risk aversion", inputs.risk_aversion);
    output::field("Monthly costs", output::amount(inputs.monthly_costs));
    output::field("Payout", output::amount(inputs.payout));
    output::field("Probability per month", inputs.probability_per_month);
}

/// Print the chart, the margin and the verdict.
pub fn print_comparison(comparison: &Comparison) {
    chart::print(&comparison.chart());

    output::section("Result");
    let margin = comparison.margin();
    let formatted = output::amount(margin);
    let margin = if margin >= 0.0 {
        output::positive(format!("+{formatted}"))
    } else {
        output::negative(formatted)
    };
    output::field("Margin", margin);

    let (tone, message) = match comparison.verdict() {
        Verdict::Worthwhile => (output::Tone::Positive, "Insurance is worth it"),
        Verdict::NotWorthwhile => (output::Tone::Negative, "Insurance is not worth it"),
        Verdict::Indifferent => (output::Tone::Neutral, "Both options are equivalent"),
    };
    output::verdict(tone, message);
}
