//! The ordered launch plan handed to an orchestration runtime.
//!
//! Actions execute in sequence, so an argument must be declared before any
//! container whose parameters reference it. [`LaunchPlan::validate`] checks
//! that ordering along with the other structural invariants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::argument::LaunchArgument;
use super::container::NodeContainer;
use super::error::DomainError;
use super::id::ArgumentName;

/// One step of a launch plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LaunchAction {
    /// Make an argument overridable and give it a default.
    DeclareArgument(LaunchArgument),
    /// Start a hosting container and load its nodes.
    Container(NodeContainer),
}

/// Ordered sequence of launch actions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchPlan {
    actions: Vec<LaunchAction>,
}

impl LaunchPlan {
    pub fn new(actions: Vec<LaunchAction>) -> Self {
        Self { actions }
    }

    #[must_use]
    pub fn actions(&self) -> &[LaunchAction] {
        &self.actions
    }

    /// Declared arguments in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &LaunchArgument> {
        self.actions.iter().filter_map(|action| match action {
            LaunchAction::DeclareArgument(argument) => Some(argument),
            LaunchAction::Container(_) => None,
        })
    }

    /// Containers in launch order.
    pub fn containers(&self) -> impl Iterator<Item = &NodeContainer> {
        self.actions.iter().filter_map(|action| match action {
            LaunchAction::Container(container) => Some(container),
            LaunchAction::DeclareArgument(_) => None,
        })
    }

    /// Find a declared argument by name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&LaunchArgument> {
        self.arguments().find(|argument| argument.name().as_str() == name)
    }

    /// Check the plan's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, walking actions in order:
    /// - [`DomainError::DuplicateArgument`] for a repeated declaration
    /// - [`DomainError::EmptyContainer`] for a container with no nodes
    /// - [`DomainError::UndeclaredReference`] for a parameter whose argument
    ///   is not declared before the container
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut declared: HashSet<&ArgumentName> = HashSet::new();

        for action in &self.actions {
            match action {
                LaunchAction::DeclareArgument(argument) => {
                    if !declared.insert(argument.name()) {
                        return Err(DomainError::DuplicateArgument {
                            name: argument.name().clone(),
                        });
                    }
                }
                LaunchAction::Container(container) => {
                    if container.nodes().is_empty() {
                        return Err(DomainError::EmptyContainer {
                            container: container.name().to_string(),
                        });
                    }
                    for node in container.nodes() {
                        for parameter in node.parameters() {
                            let Some(reference) = parameter.value.reference() else {
                                continue;
                            };
                            if !declared.contains(reference.argument()) {
                                return Err(DomainError::UndeclaredReference {
                                    node: node.name().to_string(),
                                    parameter: parameter.name.clone(),
                                    argument: reference.argument().clone(),
                                });
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
