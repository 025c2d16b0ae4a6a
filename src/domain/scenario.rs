//! Expected utility of the insured and uninsured scenario.

use super::error::DomainError;
use super::utility::utility_of_wealth;

/// Utility after paying one period's premium.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveWealth`] when the premium consumes all
/// wealth.
pub fn utility_with_insurance(
    initial_wealth: f64,
    monthly_costs: f64,
    risk_aversion: f64,
) -> Result<f64, DomainError> {
    utility_of_wealth(initial_wealth - monthly_costs, risk_aversion)
}

/// Contribution of one outcome to the expectation.
///
/// An outcome with zero weight contributes nothing, even when its utility
/// overflowed to negative infinity.
fn weighted(utility: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        utility * weight
    }
}

/// Expected utility over one period without cover.
///
/// Two outcomes: no incident with weight `1 - p`, and an incident costing
/// `payout` with weight `p`. The expectation is taken over utility, not wealth.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveWealth`] when either branch leaves no
/// wealth. Both branches are always evaluated, so ruin on incident is
/// reported even when `p` is zero.
pub fn utility_without_insurance(
    initial_wealth: f64,
    payout: f64,
    probability_per_month: f64,
    risk_aversion: f64,
) -> Result<f64, DomainError> {
    let no_incident = utility_of_wealth(initial_wealth, risk_aversion)?;
    let incident = utility_of_wealth(initial_wealth - payout, risk_aversion)?;

    Ok(weighted(no_incident, 1.0 - probability_per_month)
        + weighted(incident, probability_per_month))
}
