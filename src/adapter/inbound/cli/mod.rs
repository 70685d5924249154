//! CLI module graph.

pub mod args;
pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod operator;
pub mod output;
pub mod plan;
pub mod resolve;
