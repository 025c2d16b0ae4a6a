//! CRRA utility and its inverse.

use super::error::DomainError;

/// Risk aversion a host starts from when the user has not chosen one.
pub const DEFAULT_RISK_AVERSION: f64 = 3.0;

/// Distance from 1 within which risk aversion takes the logarithmic branch.
pub const RISK_AVERSION_LOG_EPSILON: f64 = 1e-9;

fn is_log_utility(risk_aversion: f64) -> bool {
    (risk_aversion - 1.0).abs() < RISK_AVERSION_LOG_EPSILON
}

/// Utility of a wealth level under constant relative risk aversion.
///
/// Uses `ln(wealth)` at risk aversion 1 and `-(wealth^(1-γ)) / (γ-1)`
/// everywhere else.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveWealth`] when `wealth <= 0` or is NaN.
pub fn utility_of_wealth(wealth: f64, risk_aversion: f64) -> Result<f64, DomainError> {
    // NaN fails the comparison, so it is rejected along with ruin.
    if !(wealth > 0.0) {
        return Err(DomainError::NonPositiveWealth { wealth });
    }

    if is_log_utility(risk_aversion) {
        return Ok(wealth.ln());
    }

    Ok(-wealth.powf(1.0 - risk_aversion) / (risk_aversion - 1.0))
}

/// Certainty-equivalent wealth of a utility value.
///
/// Inverse of [`utility_of_wealth`] for the same risk aversion.
///
/// # Errors
///
/// Returns [`DomainError::UndefinedCertaintyEquivalent`] when the power base
/// `utility * (1 - γ)` is not positive or the result is not a finite,
/// positive wealth.
pub fn wealth_of_utility(utility: f64, risk_aversion: f64) -> Result<f64, DomainError> {
    let undefined = || DomainError::UndefinedCertaintyEquivalent {
        utility,
        risk_aversion,
    };

    let wealth = if is_log_utility(risk_aversion) {
        utility.exp()
    } else {
        let exponent = 1.0 - risk_aversion;
        let base = utility * exponent;
        if !(base > 0.0) {
            return Err(undefined());
        }
        base.powf(1.0 / exponent)
    };

    if wealth.is_finite() && wealth > 0.0 {
        Ok(wealth)
    } else {
        Err(undefined())
    }
}
