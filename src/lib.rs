//! Insurance check - is a policy worth its premium?
//!
//! Compares the certainty-equivalent wealth of paying a monthly premium with
//! that of carrying the risk yourself, under constant relative risk aversion
//! (CRRA) utility.
//!
//! # Modules
//!
//! - [`domain`] - Pure utility math: CRRA utility, its inverse, the insured and
//!   uninsured scenario, and [`domain::evaluate`]
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`adapter`] - The command-line host
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use insurance_check::domain::{compare, Inputs, Verdict};
//!
//! let comparison = compare(&Inputs::default()).unwrap();
//! assert_eq!(comparison.verdict(), Verdict::NotWorthwhile);
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
