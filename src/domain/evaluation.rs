//! Result assembly: from five inputs to a two-bar comparison.
//!
//! [`evaluate`] is the single recompute entry point for any host. It holds no
//! state between calls, so a host may call it on every edit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::DomainError;
use super::scenario::{utility_with_insurance, utility_without_insurance};
use super::utility::{wealth_of_utility, DEFAULT_RISK_AVERSION};

/// Chart title shown above the comparison.
pub const CHART_TITLE: &str = "Ist diese Versicherung sinnvoll?";
/// Bar label for the insured scenario.
pub const LABEL_WITH_INSURANCE: &str = "Mit Versicherung";
/// Bar label for the uninsured scenario.
pub const LABEL_WITHOUT_INSURANCE: &str = "Ohne Versicherung";

/// Upper bound accepted for risk aversion.
pub const MAX_RISK_AVERSION: f64 = 10.0;

const INDIFFERENCE_TOLERANCE: f64 = 1e-9;

/// The five numbers a host collects from the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Current wealth.
    pub current_wealth: f64,
    /// CRRA risk-aversion coefficient.
    pub risk_aversion: f64,
    /// Insurance premium per month.
    pub monthly_costs: f64,
    /// Loss covered by the policy when an incident occurs.
    pub payout: f64,
    /// Probability of an incident in one month.
    pub probability_per_month: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            current_wealth: 30_000.0,
            risk_aversion: DEFAULT_RISK_AVERSION,
            monthly_costs: 20.0,
            payout: 10_000.0,
            probability_per_month: 1.0 / 2000.0,
        }
    }
}

impl Inputs {
    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("current_wealth", self.current_wealth),
            ("risk_aversion", self.risk_aversion),
            ("monthly_costs", self.monthly_costs),
            ("payout", self.payout),
            ("probability_per_month", self.probability_per_month),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(DomainError::invalid(field, "must be a finite number"));
            }
        }

        if self.current_wealth <= 0.0 {
            return Err(DomainError::invalid(
                "current_wealth",
                format!("must be positive, got {}", self.current_wealth),
            ));
        }
        if !(0.0..=MAX_RISK_AVERSION).contains(&self.risk_aversion) {
            return Err(DomainError::invalid(
                "risk_aversion",
                format!(
                    "must be between 0 and {MAX_RISK_AVERSION}, got {}",
                    self.risk_aversion
                ),
            ));
        }
        if self.monthly_costs < 0.0 {
            return Err(DomainError::invalid(
                "monthly_costs",
                format!("must not be negative, got {}", self.monthly_costs),
            ));
        }
        if self.payout < 0.0 {
            return Err(DomainError::invalid(
                "payout",
                format!("must not be negative, got {}", self.payout),
            ));
        }
        if !(0.0..=1.0).contains(&self.probability_per_month) {
            return Err(DomainError::invalid(
                "probability_per_month",
                format!("must be between 0 and 1, got {}", self.probability_per_month),
            ));
        }
        Ok(())
    }
}

/// Whether paying the premium leaves the user better off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Certainty-equivalent wealth is higher with insurance.
    Worthwhile,
    /// Certainty-equivalent wealth is higher without insurance.
    NotWorthwhile,
    /// Both scenarios are equivalent within tolerance.
    Indifferent,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Worthwhile => write!(f, "insurance is worth it"),
            Self::NotWorthwhile => write!(f, "insurance is not worth it"),
            Self::Indifferent => write!(f, "indifferent"),
        }
    }
}

/// Expected utilities and their certainty equivalents for both scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Utility after paying the premium.
    pub utility_with_insurance: f64,
    /// Expected utility over the incident / no-incident outcomes.
    pub utility_without_insurance: f64,
    /// Certainty-equivalent wealth when insured.
    pub wealth_with_insurance: f64,
    /// Certainty-equivalent wealth when uninsured.
    pub wealth_without_insurance: f64,
}

impl Comparison {
    /// Certainty-equivalent gain from insuring (negative when it costs more
    /// than it protects).
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.wealth_with_insurance - self.wealth_without_insurance
    }

    /// Decision implied by the margin.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        let scale = self
            .wealth_with_insurance
            .abs()
            .max(self.wealth_without_insurance.abs());
        let margin = self.margin();
        if margin.abs() <= INDIFFERENCE_TOLERANCE * scale {
            Verdict::Indifferent
        } else if margin > 0.0 {
            Verdict::Worthwhile
        } else {
            Verdict::NotWorthwhile
        }
    }

    /// Two-bar chart of the certainty equivalents.
    #[must_use]
    pub fn chart(&self) -> ChartData {
        ChartData {
            title: CHART_TITLE,
            bars: [
                Bar {
                    label: LABEL_WITH_INSURANCE,
                    value: self.wealth_with_insurance,
                },
                Bar {
                    label: LABEL_WITHOUT_INSURANCE,
                    value: self.wealth_without_insurance,
                },
            ],
        }
    }
}

/// One bar of the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Category label.
    pub label: &'static str,
    /// Certainty-equivalent wealth.
    pub value: f64,
}

/// Data a host needs to draw the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartData {
    /// Title above the chart.
    pub title: &'static str,
    /// Insured bar first, uninsured bar second.
    pub bars: [Bar; 2],
}

impl ChartData {
    /// Largest bar value, used to scale the rendering.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }
}

/// Validate the inputs and compute both scenarios.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] for out-of-range inputs,
/// [`DomainError::NonPositiveWealth`] on ruin in either scenario, and
/// [`DomainError::UndefinedCertaintyEquivalent`] if a utility cannot be
/// converted back to wealth.
pub fn compare(inputs: &Inputs) -> Result<Comparison, DomainError> {
    inputs.validate()?;

    let utility_with = utility_with_insurance(
        inputs.current_wealth,
        inputs.monthly_costs,
        inputs.risk_aversion,
    )?;
    let utility_without = utility_without_insurance(
        inputs.current_wealth,
        inputs.payout,
        inputs.probability_per_month,
        inputs.risk_aversion,
    )?;

    let comparison = Comparison {
        utility_with_insurance: utility_with,
        utility_without_insurance: utility_without,
        wealth_with_insurance: wealth_of_utility(utility_with, inputs.risk_aversion)?,
        wealth_without_insurance: wealth_of_utility(utility_without, inputs.risk_aversion)?,
    };

    debug!(
        current_wealth = inputs.current_wealth,
        risk_aversion = inputs.risk_aversion,
        monthly_costs = inputs.monthly_costs,
        payout = inputs.payout,
        probability_per_month = inputs.probability_per_month,
        wealth_with_insurance = comparison.wealth_with_insurance,
        wealth_without_insurance = comparison.wealth_without_insurance,
        "Evaluated insurance scenarios"
    );

    Ok(comparison)
}

/// Recompute the chart for the current inputs.
///
/// # Errors
///
/// Same as [`compare`].
pub fn evaluate(inputs: &Inputs) -> Result<ChartData, DomainError> {
    compare(inputs).map(|comparison| comparison.chart())
}
