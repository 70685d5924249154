//! Application services (use cases).
//!
//! Plan composition lives in [`launch`]; [`execution`] and [`contract`]
//! consume a finished plan the way the orchestration runtime and the
//! hosted plugin would.

pub mod contract;
pub mod execution;
pub mod launch;
