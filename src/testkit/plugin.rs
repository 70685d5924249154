//! Stub plugin contracts.

use crate::adapter::outbound::plugin::tensor_rt::TensorRtPluginContract;
use crate::domain::argument::ValueKind;
use crate::domain::node::PluginRef;
use crate::port::outbound::plugin::{ParameterSpec, PluginContract};

/// Plugin contract with an arbitrary schema.
///
/// Starts as a copy of the TensorRT contract; the builder methods bend it
/// to model a plugin build that disagrees with the launch plan.
#[derive(Debug, Clone)]
pub struct StubPlugin {
    entry_point: PluginRef,
    parameters: Vec<ParameterSpec>,
    topics: Vec<&'static str>,
}

impl StubPlugin {
    /// Same schema as the real TensorRT plugin.
    #[must_use]
    pub fn tensor_rt() -> Self {
        let contract = TensorRtPluginContract;
        Self {
            entry_point: contract.entry_point(),
            parameters: contract.parameters().to_vec(),
            topics: contract.topics().to_vec(),
        }
    }

    /// Rename a parameter, as a plugin revision might.
    #[must_use]
    pub fn rename_parameter(mut self, from: &str, to: &'static str) -> Self {
        for spec in &mut self.parameters {
            if spec.name == from {
                spec.name = to;
            }
        }
        self
    }

    /// Decode a parameter as a different kind.
    #[must_use]
    pub fn with_parameter_kind(mut self, name: &str, kind: ValueKind) -> Self {
        for spec in &mut self.parameters {
            if spec.name == name {
                spec.kind = kind;
            }
        }
        self
    }

    /// Stop accepting a parameter.
    #[must_use]
    pub fn without_parameter(mut self, name: &str) -> Self {
        self.parameters.retain(|spec| spec.name != name);
        self
    }

    /// Replace the exposed topics.
    #[must_use]
    pub fn with_topics(mut self, topics: Vec<&'static str>) -> Self {
        self.topics = topics;
        self
    }

    /// Describe a different plugin class.
    #[must_use]
    pub fn with_plugin(mut self, plugin: &str) -> Self {
        self.entry_point.plugin = plugin.to_string();
        self
    }
}

impl PluginContract for StubPlugin {
    fn entry_point(&self) -> PluginRef {
        self.entry_point.clone()
    }

    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn topics(&self) -> &[&'static str] {
        &self.topics
    }
}
