//! Outbound adapters (driven side).

pub mod plugin;
pub mod render;
