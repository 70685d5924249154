//! Plugin contract implementations.

pub mod tensor_rt;
