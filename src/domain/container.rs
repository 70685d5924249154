//! Hosting container descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::ComposableNode;

/// Component-hosting executable shipped by `rclcpp_components`.
///
/// Serialized as the executable name the runtime spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerExecutable {
    /// `component_container`: one executor thread for every loaded node.
    #[serde(rename = "component_container")]
    SingleThreaded,
    /// `component_container_mt`: callbacks may run on several worker threads.
    #[serde(rename = "component_container_mt")]
    MultiThreaded,
}

impl ContainerExecutable {
    /// Package that provides both executables.
    pub const PACKAGE: &'static str = "rclcpp_components";

    #[must_use]
    pub const fn executable(self) -> &'static str {
        match self {
            Self::SingleThreaded => "component_container",
            Self::MultiThreaded => "component_container_mt",
        }
    }
}

impl fmt::Display for ContainerExecutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// A hosting process and the nodes it loads, in load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeContainer {
    name: String,
    package: String,
    namespace: String,
    executable: ContainerExecutable,
    nodes: Vec<ComposableNode>,
}

impl NodeContainer {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        executable: ContainerExecutable,
        nodes: Vec<ComposableNode>,
    ) -> Self {
        Self {
            name: name.into(),
            package: ContainerExecutable::PACKAGE.to_string(),
            namespace: namespace.into(),
            executable,
            nodes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub fn executable(&self) -> ContainerExecutable {
        self.executable
    }

    #[must_use]
    pub fn nodes(&self) -> &[ComposableNode] {
        &self.nodes
    }
}
