//! Domain validation errors for launch plan structure.
//!
//! These errors describe a plan that an orchestration runtime would reject
//! or mis-execute. They are returned by [`LaunchPlan::validate`] and never
//! by the composition steps themselves, which cannot fail for fixed inputs.
//!
//! [`LaunchPlan::validate`]: crate::domain::plan::LaunchPlan::validate
//!
//! # Examples
//!
//! ```
//! use tensor_rt_launch::domain::error::DomainError;
//! use tensor_rt_launch::domain::argument::{LaunchArgument, ValueKind};
//! use tensor_rt_launch::domain::plan::{LaunchAction, LaunchPlan};
//!
//! let verbose = LaunchArgument::new("verbose", "False", "Verbose logging", ValueKind::Boolean);
//! let plan = LaunchPlan::new(vec![
//!     LaunchAction::DeclareArgument(verbose.clone()),
//!     LaunchAction::DeclareArgument(verbose),
//! ]);
//!
//! assert!(matches!(plan.validate(), Err(DomainError::DuplicateArgument { .. })));
//! ```

use thiserror::Error;

use super::id::ArgumentName;

/// Errors that occur when launch plan invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument name was declared more than once in the same plan.
    #[error("argument '{name}' is declared more than once")]
    DuplicateArgument {
        /// The repeated argument name.
        name: ArgumentName,
    },

    /// A container was composed without any nodes to load.
    #[error("container '{container}' has no nodes to load")]
    EmptyContainer {
        /// Name of the empty container.
        container: String,
    },

    /// A parameter refers to an argument that is not declared before it.
    #[error("parameter '{parameter}' of node '{node}' refers to undeclared argument '{argument}'")]
    UndeclaredReference {
        /// Node owning the parameter.
        node: String,
        /// Parameter holding the reference.
        parameter: String,
        /// Argument the reference points at.
        argument: ArgumentName,
    },
}
