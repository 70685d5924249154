//! Handle-to-value substitution over a whole plan.
//!
//! Reproduces what the orchestration runtime does before spawning
//! anything, so overrides can be previewed and tested without it. Nothing
//! is started here.

use tracing::{debug, warn};

use super::context::LaunchContext;
use super::overrides::Overrides;
use crate::domain::container::NodeContainer;
use crate::domain::node::ComposableNode;
use crate::domain::plan::{LaunchAction, LaunchPlan};
use crate::domain::resolved::{ResolvedContainer, ResolvedNode, ResolvedPlan};
use crate::error::ResolveError;

/// Resolve every reference in `plan` against declared defaults and
/// `overrides`, walking actions in order.
///
/// Override names that match no declaration are ignored, logged, and listed
/// in [`ResolvedPlan::ignored_overrides`].
///
/// # Errors
///
/// Returns [`ResolveError::UnresolvedReference`] when a parameter refers to
/// an argument not declared before its container.
pub fn resolve_plan(plan: &LaunchPlan, overrides: &Overrides) -> Result<ResolvedPlan, ResolveError> {
    let mut context = LaunchContext::new(overrides);
    let mut containers = Vec::new();

    for action in plan.actions() {
        match action {
            LaunchAction::DeclareArgument(argument) => context.declare(argument),
            LaunchAction::Container(container) => {
                containers.push(resolve_container(container, &context)?);
            }
        }
    }

    let ignored_overrides = context.unused_overrides();
    for name in &ignored_overrides {
        warn!(argument = %name, "override does not match any declared argument; ignoring");
    }

    let arguments = context.into_arguments();
    debug!(
        arguments = arguments.len(),
        containers = containers.len(),
        "resolved launch plan"
    );

    Ok(ResolvedPlan {
        arguments,
        containers,
        ignored_overrides,
    })
}

fn resolve_container(
    container: &NodeContainer,
    context: &LaunchContext<'_>,
) -> Result<ResolvedContainer, ResolveError> {
    let nodes = container
        .nodes()
        .iter()
        .map(|node| resolve_node(node, context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedContainer {
        name: container.name().to_string(),
        package: container.package().to_string(),
        namespace: container.namespace().to_string(),
        executable: container.executable(),
        nodes,
    })
}

fn resolve_node(node: &ComposableNode, context: &LaunchContext<'_>) -> Result<ResolvedNode, ResolveError> {
    let mut parameters = Vec::with_capacity(node.parameters().len());

    for parameter in node.parameters() {
        let Some(value) = context.perform(&parameter.value) else {
            let argument = parameter
                .value
                .reference()
                .map(|reference| reference.argument().to_string())
                .unwrap_or_default();
            return Err(ResolveError::UnresolvedReference {
                node: node.name().to_string(),
                parameter: parameter.name.clone(),
                argument,
            });
        };
        parameters.push((parameter.name.clone(), value));
    }

    Ok(ResolvedNode {
        name: node.name().to_string(),
        entry_point: node.entry_point().clone(),
        remappings: node.remappings().to_vec(),
        parameters,
    })
}
