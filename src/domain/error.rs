//! Domain errors for the utility model.
//!
//! These errors are returned when a computation leaves the domain where CRRA
//! utility is defined, or when inputs fail validation before evaluation.
//!
//! # Examples
//!
//! Ruin is reported, never clamped:
//!
//! ```
//! use insurance_check::domain::error::DomainError;
//! use insurance_check::domain::utility_of_wealth;
//!
//! let result = utility_of_wealth(0.0, 3.0);
//! assert!(matches!(result, Err(DomainError::NonPositiveWealth { .. })));
//! ```

use thiserror::Error;

/// Errors raised by the utility math core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A wealth level passed to the utility function was zero or negative.
    #[error("wealth must be positive, got {wealth}")]
    NonPositiveWealth {
        /// The offending wealth level.
        wealth: f64,
    },

    /// The inverse transform has no real, positive solution.
    #[error("no certainty-equivalent wealth for utility {utility} at risk aversion {risk_aversion}")]
    UndefinedCertaintyEquivalent {
        /// The utility that could not be converted back.
        utility: f64,
        /// The risk aversion used for the conversion.
        risk_aversion: f64,
    },

    /// An input field is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the input field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl DomainError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True when the error means the model ended in ruin.
    #[must_use]
    pub fn is_ruin(&self) -> bool {
        matches!(self, Self::NonPositiveWealth { .. })
    }
}
