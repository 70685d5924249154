//! Plan renderers.

pub mod json;
pub mod xml;
