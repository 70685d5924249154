//! Overridable arguments of the TensorRT launch.
//!
//! Defaults are kept as the exact strings the plugin expects to decode:
//! lists are bracketed and quoted, booleans use Python spelling.

use crate::domain::argument::{LaunchArgument, ValueKind};

pub const MODEL_FILE_PATH: &str = "model_file_path";
pub const ENGINE_FILE_PATH: &str = "engine_file_path";
pub const INPUT_TENSOR_NAMES: &str = "input_tensor_names";
pub const INPUT_BINDING_NAMES: &str = "input_binding_names";
pub const OUTPUT_TENSOR_NAMES: &str = "output_tensor_names";
pub const OUTPUT_BINDING_NAMES: &str = "output_binding_names";
pub const VERBOSE: &str = "verbose";
pub const FORCE_ENGINE_UPDATE: &str = "force_engine_update";

/// Every argument name, in declaration order.
pub const ARGUMENT_NAMES: [&str; 8] = [
    MODEL_FILE_PATH,
    ENGINE_FILE_PATH,
    INPUT_TENSOR_NAMES,
    INPUT_BINDING_NAMES,
    OUTPUT_TENSOR_NAMES,
    OUTPUT_BINDING_NAMES,
    VERBOSE,
    FORCE_ENGINE_UPDATE,
];

/// Declare the eight TensorRT arguments with their defaults.
///
/// The defaults load the mobilenetv2-1.0 bindings; model and engine paths
/// are left empty for the operator to fill in.
#[must_use]
pub fn declare_arguments() -> Vec<LaunchArgument> {
    vec![
        LaunchArgument::new(
            MODEL_FILE_PATH,
            "",
            "The absolute file path to the ONNX file",
            ValueKind::Path,
        ),
        LaunchArgument::new(
            ENGINE_FILE_PATH,
            "",
            "The absolute file path to the TensorRT engine file",
            ValueKind::Path,
        ),
        LaunchArgument::new(
            INPUT_TENSOR_NAMES,
            r#"["input"]"#,
            "A list of tensor names to bound to the specified input binding names",
            ValueKind::StringList,
        ),
        LaunchArgument::new(
            INPUT_BINDING_NAMES,
            r#"["data"]"#,
            "A list of input tensor binding names (specified by model)",
            ValueKind::StringList,
        ),
        LaunchArgument::new(
            OUTPUT_TENSOR_NAMES,
            r#"["output"]"#,
            "A list of tensor names to bound to the specified output binding names",
            ValueKind::StringList,
        ),
        LaunchArgument::new(
            OUTPUT_BINDING_NAMES,
            r#"["mobilenetv20_output_flatten0_reshape0"]"#,
            "A list of output tensor binding names (specified by model)",
            ValueKind::StringList,
        ),
        LaunchArgument::new(
            VERBOSE,
            "False",
            "Whether TensorRT should verbosely log or not",
            ValueKind::Boolean,
        ),
        LaunchArgument::new(
            FORCE_ENGINE_UPDATE,
            "False",
            "Whether TensorRT should update the TensorRT engine file or not",
            ValueKind::Boolean,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_names_in_order() {
        let names: Vec<_> = declare_arguments()
            .iter()
            .map(|a| a.name().as_str().to_string())
            .collect();
        assert_eq!(names, ARGUMENT_NAMES);
    }

    #[test]
    fn boolean_defaults_are_strings() {
        let arguments = declare_arguments();
        for name in [VERBOSE, FORCE_ENGINE_UPDATE] {
            let argument = arguments
                .iter()
                .find(|a| a.name().as_str() == name)
                .unwrap();
            assert_eq!(argument.default_value(), "False");
            assert_eq!(argument.kind(), ValueKind::Boolean);
        }
    }

    #[test]
    fn every_argument_has_a_description() {
        assert!(declare_arguments()
            .iter()
            .all(|a| !a.description().is_empty()));
    }
}
