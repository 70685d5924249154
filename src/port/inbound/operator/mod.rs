//! Operator-facing inbound ports consumed by CLI adapters.

pub mod config;
pub mod diagnostic;
pub mod launch;
pub mod port;
