//! Launch plan structure tests.

use tensor_rt_launch::application::launch::assembler::generate_launch_description;
use tensor_rt_launch::application::launch::declarator::ARGUMENT_NAMES;
use tensor_rt_launch::domain::container::ContainerExecutable;
use tensor_rt_launch::domain::plan::LaunchAction;
use tensor_rt_launch::domain::substitution::ParameterValue;

const DEFAULTS: [(&str, &str); 8] = [
    ("model_file_path", ""),
    ("engine_file_path", ""),
    ("input_tensor_names", r#"["input"]"#),
    ("input_binding_names", r#"["data"]"#),
    ("output_tensor_names", r#"["output"]"#),
    (
        "output_binding_names",
        r#"["mobilenetv20_output_flatten0_reshape0"]"#,
    ),
    ("verbose", "False"),
    ("force_engine_update", "False"),
];

#[test]
fn every_argument_is_declared_once_with_its_default() {
    let plan = generate_launch_description();

    for (name, default) in DEFAULTS {
        let declared: Vec<_> = plan
            .arguments()
            .filter(|argument| argument.name().as_str() == name)
            .collect();
        assert_eq!(declared.len(), 1, "expected one declaration of {name}");
        assert_eq!(declared[0].default_value(), default, "default of {name}");
    }
    assert_eq!(plan.arguments().count(), 8);
}

#[test]
fn declarations_precede_the_container() {
    let plan = generate_launch_description();
    let actions = plan.actions();

    assert_eq!(actions.len(), 9);
    assert!(actions[..8]
        .iter()
        .all(|action| matches!(action, LaunchAction::DeclareArgument(_))));
    assert!(matches!(actions[8], LaunchAction::Container(_)));
}

#[test]
fn node_parameters_reference_each_argument_by_its_own_name() {
    let plan = generate_launch_description();
    let container = plan.containers().next().unwrap();
    let node = &container.nodes()[0];

    assert_eq!(node.parameters().len(), 8);
    for parameter in node.parameters() {
        assert!(ARGUMENT_NAMES.contains(&parameter.name.as_str()));
        match &parameter.value {
            ParameterValue::Reference(reference) => {
                assert_eq!(reference.argument().as_str(), parameter.name);
            }
            ParameterValue::Literal(value) => {
                panic!("{} is a literal '{value}', expected a reference", parameter.name)
            }
        }
    }
    for name in ARGUMENT_NAMES {
        assert!(node.parameter(name).is_some(), "missing parameter {name}");
    }
}

#[test]
fn container_hosts_only_the_tensor_rt_node() {
    let plan = generate_launch_description();
    let containers: Vec<_> = plan.containers().collect();
    assert_eq!(containers.len(), 1);

    let container = containers[0];
    assert_eq!(container.name(), "tensor_rt_container");
    assert_eq!(container.namespace(), "isaac_ros_tensor_rt");
    assert_eq!(container.package(), "rclcpp_components");
    assert_eq!(container.executable(), ContainerExecutable::MultiThreaded);
    assert_eq!(container.executable().executable(), "component_container_mt");

    assert_eq!(container.nodes().len(), 1);
    let node = &container.nodes()[0];
    assert_eq!(node.name(), "tensor_rt");
    assert_eq!(node.entry_point().package, "isaac_ros_tensor_rt");
    assert_eq!(
        node.entry_point().plugin,
        "nvidia::isaac_ros::dnn_inference::TensorRTNode"
    );
}

#[test]
fn remappings_are_identity_pairs_in_order() {
    let plan = generate_launch_description();
    let node = &plan.containers().next().unwrap().nodes()[0];
    let pairs: Vec<(&str, &str)> = node
        .remappings()
        .iter()
        .map(|remapping| (remapping.from.as_str(), remapping.to.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![("tensor_pub", "tensor_pub"), ("tensor_sub", "tensor_sub")]
    );
}

#[test]
fn construction_is_idempotent() {
    assert_eq!(generate_launch_description(), generate_launch_description());
}

#[test]
fn constructed_plan_validates() {
    assert!(generate_launch_description().validate().is_ok());
}
