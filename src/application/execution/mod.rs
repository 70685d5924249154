//! Executor-side substitution of launch configurations.

pub mod context;
pub mod overrides;
pub mod resolve;
