//! Utility math core.
//!
//! Pure functions only: CRRA utility and its inverse, the two scenario
//! compositions, and result assembly. Nothing here performs I/O or keeps
//! state between calls.

pub mod error;

mod evaluation;
mod scenario;
mod utility;

pub use error::DomainError;
pub use evaluation::{
    compare, evaluate, Bar, ChartData, Comparison, Inputs, Verdict, CHART_TITLE,
    LABEL_WITHOUT_INSURANCE, LABEL_WITH_INSURANCE, MAX_RISK_AVERSION,
};
pub use scenario::{utility_with_insurance, utility_without_insurance};
pub use utility::{
    utility_of_wealth, wealth_of_utility, DEFAULT_RISK_AVERSION, RISK_AVERSION_LOG_EPSILON,
};
