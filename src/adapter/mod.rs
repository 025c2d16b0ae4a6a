//! Adapters connecting the calculator to the outside world.

pub mod inbound;
