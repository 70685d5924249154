//! Documented schema of the Isaac ROS TensorRT node.

use crate::application::launch::builder::{tensor_rt_plugin, TENSOR_PUB, TENSOR_SUB};
use crate::application::launch::declarator::{
    ENGINE_FILE_PATH, FORCE_ENGINE_UPDATE, INPUT_BINDING_NAMES, INPUT_TENSOR_NAMES,
    MODEL_FILE_PATH, OUTPUT_BINDING_NAMES, OUTPUT_TENSOR_NAMES, VERBOSE,
};
use crate::domain::argument::ValueKind;
use crate::domain::node::PluginRef;
use crate::port::outbound::plugin::{ParameterSpec, PluginContract};

const PARAMETERS: [ParameterSpec; 8] = [
    ParameterSpec {
        name: MODEL_FILE_PATH,
        kind: ValueKind::Path,
    },
    ParameterSpec {
        name: ENGINE_FILE_PATH,
        kind: ValueKind::Path,
    },
    ParameterSpec {
        name: INPUT_TENSOR_NAMES,
        kind: ValueKind::StringList,
    },
    ParameterSpec {
        name: INPUT_BINDING_NAMES,
        kind: ValueKind::StringList,
    },
    ParameterSpec {
        name: OUTPUT_TENSOR_NAMES,
        kind: ValueKind::StringList,
    },
    ParameterSpec {
        name: OUTPUT_BINDING_NAMES,
        kind: ValueKind::StringList,
    },
    ParameterSpec {
        name: VERBOSE,
        kind: ValueKind::Boolean,
    },
    ParameterSpec {
        name: FORCE_ENGINE_UPDATE,
        kind: ValueKind::Boolean,
    },
];

const TOPICS: [&str; 2] = [TENSOR_PUB, TENSOR_SUB];

/// `nvidia::isaac_ros::dnn_inference::TensorRTNode` from `isaac_ros_tensor_rt`.
///
/// Reads eight parameters at load time and exposes `tensor_pub` (output
/// tensors) and `tensor_sub` (input tensors).
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorRtPluginContract;

impl PluginContract for TensorRtPluginContract {
    fn entry_point(&self) -> PluginRef {
        tensor_rt_plugin()
    }

    fn parameters(&self) -> &[ParameterSpec] {
        &PARAMETERS
    }

    fn topics(&self) -> &[&'static str] {
        &TOPICS
    }
}
