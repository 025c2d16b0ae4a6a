//! Infrastructure layer.
//!
//! Technical concerns that support the calculator without containing any of
//! its math: configuration loading and logging setup.

pub mod config;
