//! Composition of the TensorRT launch plan, from argument declarations to
//! the assembled plan.

pub mod assembler;
pub mod builder;
pub mod composer;
pub mod declarator;
pub mod resolver;
