//! Resolved-value counterparts of the plan types.
//!
//! These are what an executor produces after substituting every
//! [`LaunchConfiguration`](super::substitution::LaunchConfiguration) with a
//! string. Values are still strings: decoding `"False"` or `["input"]` is
//! the plugin's job.

use serde::Serialize;

use super::container::ContainerExecutable;
use super::id::ArgumentName;
use super::node::{PluginRef, Remapping};

/// Where a resolved argument value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// The declared default.
    Default,
    /// An override supplied by the operator.
    Override,
}

/// Final value of one declared argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArgument {
    pub name: ArgumentName,
    pub value: String,
    pub source: ValueSource,
}

/// Node with every parameter substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNode {
    pub name: String,
    pub entry_point: PluginRef,
    pub remappings: Vec<Remapping>,
    pub parameters: Vec<(String, String)>,
}

impl ResolvedNode {
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Container ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContainer {
    pub name: String,
    pub package: String,
    pub namespace: String,
    pub executable: ContainerExecutable,
    pub nodes: Vec<ResolvedNode>,
}

/// Outcome of executing a plan's substitutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPlan {
    pub arguments: Vec<ResolvedArgument>,
    pub containers: Vec<ResolvedContainer>,
    /// Override names that matched no declaration.
    pub ignored_overrides: Vec<String>,
}

impl ResolvedPlan {
    /// Find a node by name across all containers.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&ResolvedNode> {
        self.containers
            .iter()
            .flat_map(|container| container.nodes.iter())
            .find(|node| node.name == name)
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ResolvedArgument> {
        self.arguments.iter().find(|a| a.name.as_str() == name)
    }
}
