//! Launch plan domain types, free of any runtime or I/O concerns.

pub mod argument;
pub mod container;
pub mod error;
pub mod id;
pub mod node;
pub mod plan;
pub mod resolved;
pub mod substitution;
