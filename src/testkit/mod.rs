//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`plugin`] - Stub [`PluginContract`](crate::port::outbound::plugin::PluginContract)
//!   implementations with configurable parameter and topic schemas.
//! - [`config`] - Canonical test configuration TOML.

pub mod config;
pub mod plugin;
