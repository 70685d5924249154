//! Composable node descriptors.

use serde::{Deserialize, Serialize};

use super::id::TopicName;
use super::substitution::ParameterValue;

/// Topic remapping applied when the node is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remapping {
    /// Name the plugin uses internally.
    pub from: TopicName,
    /// Name the topic is bound to on the graph.
    pub to: TopicName,
}

impl Remapping {
    pub fn new(from: impl Into<TopicName>, to: impl Into<TopicName>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// A remapping that binds a topic to its own name.
    pub fn identity(topic: &str) -> Self {
        Self::new(topic, topic)
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

/// Named parameter handed to the plugin at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
}

/// Plugin entry point: the package that owns the shared library and the
/// registered component class to instantiate from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    pub package: String,
    pub plugin: String,
}

/// One pluggable component to be loaded into a container.
///
/// Immutable once built; construct through [`ComposableNode::new`] and the
/// `with_*` methods, or through the launch builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposableNode {
    name: String,
    entry_point: PluginRef,
    remappings: Vec<Remapping>,
    parameters: Vec<Parameter>,
}

impl ComposableNode {
    pub fn new(name: impl Into<String>, entry_point: PluginRef) -> Self {
        Self {
            name: name.into(),
            entry_point,
            remappings: Vec::new(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_remappings(mut self, remappings: Vec<Remapping>) -> Self {
        self.remappings = remappings;
        self
    }

    /// Set a parameter. A later value for the same name replaces the earlier
    /// one in place, so names stay unique and order is first-insertion.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.parameters.push(Parameter { name, value }),
        }
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entry_point(&self) -> &PluginRef {
        &self.entry_point
    }

    #[must_use]
    pub fn remappings(&self) -> &[Remapping] {
        &self.remappings
    }

    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Look up a parameter value by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}
