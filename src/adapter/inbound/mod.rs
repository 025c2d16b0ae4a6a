//! Inbound adapters: hosts that call into the domain.

pub mod cli;
