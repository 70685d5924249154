//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe collaborators outside the launch layer: the
//! hosted plugin and the plan output formats.

pub mod plugin;
pub mod render;
