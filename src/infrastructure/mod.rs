//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! launch logic: configuration loading, logging setup, and the operator
//! implementation the CLI drives.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - CLI operator interface

pub mod config;
pub mod operator;
