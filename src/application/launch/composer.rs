//! Hosting container for the TensorRT node.

use crate::domain::container::{ContainerExecutable, NodeContainer};
use crate::domain::node::ComposableNode;

pub const CONTAINER_NAME: &str = "tensor_rt_container";
pub const CONTAINER_NAMESPACE: &str = "isaac_ros_tensor_rt";

/// Wrap `nodes` in the multi-threaded TensorRT container, keeping their order.
#[must_use]
pub fn compose_container(nodes: Vec<ComposableNode>) -> NodeContainer {
    NodeContainer::new(
        CONTAINER_NAME,
        CONTAINER_NAMESPACE,
        ContainerExecutable::MultiThreaded,
        nodes,
    )
}
