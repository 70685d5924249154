//! Node descriptor for the TensorRT inference plugin.

use tracing::debug;

use super::declarator::{
    ENGINE_FILE_PATH, FORCE_ENGINE_UPDATE, INPUT_BINDING_NAMES, INPUT_TENSOR_NAMES,
    MODEL_FILE_PATH, OUTPUT_BINDING_NAMES, OUTPUT_TENSOR_NAMES, VERBOSE,
};
use super::resolver::ConfigurationSet;
use crate::domain::node::{ComposableNode, PluginRef, Remapping};
use crate::domain::substitution::LaunchConfiguration;

pub const NODE_NAME: &str = "tensor_rt";
pub const NODE_PACKAGE: &str = "isaac_ros_tensor_rt";
pub const NODE_PLUGIN: &str = "nvidia::isaac_ros::dnn_inference::TensorRTNode";

pub const TENSOR_PUB: &str = "tensor_pub";
pub const TENSOR_SUB: &str = "tensor_sub";

/// Parameter names in the order the plugin's parameter dictionary lists them.
pub const PARAMETER_ORDER: [&str; 8] = [
    MODEL_FILE_PATH,
    ENGINE_FILE_PATH,
    OUTPUT_BINDING_NAMES,
    OUTPUT_TENSOR_NAMES,
    INPUT_TENSOR_NAMES,
    INPUT_BINDING_NAMES,
    VERBOSE,
    FORCE_ENGINE_UPDATE,
];

/// Entry point of the TensorRT plugin.
#[must_use]
pub fn tensor_rt_plugin() -> PluginRef {
    PluginRef {
        package: NODE_PACKAGE.to_string(),
        plugin: NODE_PLUGIN.to_string(),
    }
}

/// Build the `tensor_rt` node, binding each parameter to the reference of
/// the same name.
///
/// A name missing from `configurations` still gets a reference so the
/// defect surfaces where the runtime would report it, at resolution.
#[must_use]
pub fn build_tensor_rt_node(configurations: &ConfigurationSet) -> ComposableNode {
    let remappings = vec![Remapping::identity(TENSOR_PUB), Remapping::identity(TENSOR_SUB)];

    PARAMETER_ORDER.iter().fold(
        ComposableNode::new(NODE_NAME, tensor_rt_plugin()).with_remappings(remappings),
        |node, &name| {
            let reference = match configurations.get(name) {
                Some(reference) => reference.clone(),
                None => {
                    debug!(parameter = name, "no declared configuration for parameter");
                    LaunchConfiguration::new(name)
                }
            };
            node.with_parameter(name, reference)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::launch::declarator::{declare_arguments, ARGUMENT_NAMES};
    use crate::domain::argument::{LaunchArgument, ValueKind};

    #[test]
    fn parameters_mirror_argument_names() {
        let node = build_tensor_rt_node(&ConfigurationSet::bind(&declare_arguments()));

        assert_eq!(node.parameters().len(), 8);
        for parameter in node.parameters() {
            assert!(ARGUMENT_NAMES.contains(&parameter.name.as_str()));
            let reference = parameter.value.reference().unwrap();
            assert_eq!(reference.argument().as_str(), parameter.name);
        }
    }

    #[test]
    fn parameters_follow_dictionary_order() {
        let node = build_tensor_rt_node(&ConfigurationSet::bind(&declare_arguments()));
        let names: Vec<&str> = node.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, PARAMETER_ORDER);
    }

    #[test]
    fn missing_configuration_still_yields_reference() {
        let partial = [LaunchArgument::new(MODEL_FILE_PATH, "", "", ValueKind::Path)];
        let node = build_tensor_rt_node(&ConfigurationSet::bind(&partial));

        assert_eq!(node.parameters().len(), 8);
        let verbose = node.parameter(VERBOSE).and_then(|v| v.reference()).unwrap();
        assert_eq!(verbose.argument().as_str(), VERBOSE);
    }

    #[test]
    fn remappings_are_identity_pairs() {
        let node = build_tensor_rt_node(&ConfigurationSet::bind(&declare_arguments()));
        assert_eq!(
            node.remappings(),
            &[Remapping::identity(TENSOR_PUB), Remapping::identity(TENSOR_SUB)]
        );
    }
}
