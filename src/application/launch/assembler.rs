//! Launch description for the TensorRT node.
//!
//! Declarations come first, then the container: the runtime resolves
//! references in action order, so a reference used before its declaration
//! is appended would be unresolved.
//!
//! # Example
//!
//! ```
//! use tensor_rt_launch::application::launch::assembler::generate_launch_description;
//!
//! let plan = generate_launch_description();
//! assert_eq!(plan.arguments().count(), 8);
//! assert_eq!(plan.containers().count(), 1);
//! ```

use tracing::debug;

use super::builder::build_tensor_rt_node;
use super::composer::compose_container;
use super::declarator::declare_arguments;
use super::resolver::ConfigurationSet;
use crate::domain::argument::LaunchArgument;
use crate::domain::container::NodeContainer;
use crate::domain::plan::{LaunchAction, LaunchPlan};

/// Concatenate declarations and a container into one ordered plan.
#[must_use]
pub fn assemble(arguments: Vec<LaunchArgument>, container: NodeContainer) -> LaunchPlan {
    let actions = arguments
        .into_iter()
        .map(LaunchAction::DeclareArgument)
        .chain(std::iter::once(LaunchAction::Container(container)))
        .collect();
    LaunchPlan::new(actions)
}

/// Build the complete TensorRT launch plan.
///
/// Pure and deterministic: two calls return equal plans.
#[must_use]
pub fn generate_launch_description() -> LaunchPlan {
    let arguments = declare_arguments();
    let configurations = ConfigurationSet::bind(&arguments);
    let node = build_tensor_rt_node(&configurations);
    let container = compose_container(vec![node]);
    let plan = assemble(arguments, container);

    debug_assert!(plan.validate().is_ok());
    debug!(
        actions = plan.actions().len(),
        "assembled tensor_rt launch description"
    );
    plan
}
