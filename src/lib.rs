//! tensor-rt-launch - launch plan builder for the Isaac ROS TensorRT node.
//!
//! This crate assembles the launch plan that starts a multi-threaded
//! component container hosting the TensorRT inference plugin, with eight
//! overridable arguments wired straight through to the plugin's parameters.
//! The plan is a value: an external orchestration runtime executes it.
//!
//! # Architecture
//!
//! - **`domain`** - Plan types: arguments, deferred references, nodes,
//!   containers, and their resolved counterparts
//! - **`application::launch`** - Composition: declare, bind, build, compose,
//!   assemble
//! - **`application::execution`** - Executor-side substitution for previewing
//!   overrides
//! - **`application::contract`** - Plan checks against a plugin schema
//! - **`port`** / **`adapter`** - Plugin contract, JSON and launch-XML
//!   renderers, CLI
//! - **`infrastructure`** - TOML configuration, logging, operator wiring
//!
//! # Example
//!
//! ```
//! use tensor_rt_launch::application::execution::overrides::Overrides;
//! use tensor_rt_launch::application::execution::resolve::resolve_plan;
//! use tensor_rt_launch::application::launch::assembler::generate_launch_description;
//!
//! let plan = generate_launch_description();
//! let overrides = Overrides::new().with("model_file_path", "/models/mnet.onnx");
//! let resolved = resolve_plan(&plan, &overrides).unwrap();
//!
//! let node = resolved.node("tensor_rt").unwrap();
//! assert_eq!(node.parameter("model_file_path"), Some("/models/mnet.onnx"));
//! assert_eq!(node.parameter("verbose"), Some("False"));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
