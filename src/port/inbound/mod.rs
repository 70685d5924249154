//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for plans, configuration, and checks

pub mod operator;
