//! CLI integration tests.

mod support;

use std::fs;

use predicates::prelude::*;

use support::cli::launch;

#[test]
fn test_help_lists_commands() {
    let (mut cmd, _dir) = launch();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("args"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_plan_json_is_parseable() {
    let (mut cmd, _dir) = launch();
    let output = cmd.arg("plan").output().expect("run tensor-rt-launch");
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).expect("plan is JSON");
    let actions = plan["actions"].as_array().expect("actions array");
    assert_eq!(actions.len(), 9);
    assert_eq!(actions[8]["name"], "tensor_rt_container");
    assert_eq!(actions[8]["namespace"], "isaac_ros_tensor_rt");
    assert_eq!(actions[8]["package"], "rclcpp_components");
    assert_eq!(actions[8]["executable"], "component_container_mt");
}

#[test]
fn test_plan_xml() {
    let (mut cmd, _dir) = launch();
    cmd.args(["plan", "--format", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains(r#"exec="component_container_mt""#))
        .stdout(predicate::str::contains(
            r#"<param name="model_file_path" value="$(var model_file_path)"/>"#,
        ));
}

#[test]
fn test_plan_uses_config_render_format() {
    let (mut cmd, dir) = launch();
    fs::write(
        dir.path().join("tensor-rt-launch.toml"),
        "[render]\nformat = \"xml\"\n",
    )
    .unwrap();

    cmd.arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("<node_container"));
}

#[test]
fn test_plan_writes_output_file() {
    let (mut cmd, dir) = launch();
    let path = dir.path().join("out/tensor_rt.launch.xml");

    cmd.args(["--quiet", "plan", "--format", "xml", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written = fs::read_to_string(&path).expect("plan file written");
    assert!(written.contains("<composable_node"));
}

#[test]
fn test_args_lists_all_arguments() {
    let (mut cmd, _dir) = launch();
    cmd.args(["--color", "never", "args"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model_file_path"))
        .stdout(predicate::str::contains("force_engine_update"))
        .stdout(predicate::str::contains("mobilenetv20_output_flatten0_reshape0"));
}

#[test]
fn test_args_json() {
    let (mut cmd, _dir) = launch();
    let output = cmd.args(["--json", "args"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let arguments = value["arguments"].as_array().unwrap();
    assert_eq!(arguments.len(), 8);
    assert_eq!(arguments[6]["name"], "verbose");
    assert_eq!(arguments[6]["default"], "False");
    assert_eq!(arguments[6]["type"], "boolean");
}

#[test]
fn test_resolve_with_override() {
    let (mut cmd, _dir) = launch();
    let output = cmd
        .args(["--json", "resolve", "model_file_path:=/models/mnet.onnx"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let resolved = &value["resolved"];
    let parameters = resolved["containers"][0]["nodes"][0]["parameters"]
        .as_array()
        .unwrap();
    assert_eq!(parameters[0][0], "model_file_path");
    assert_eq!(parameters[0][1], "/models/mnet.onnx");
    assert!(parameters
        .iter()
        .any(|pair| pair[0] == "verbose" && pair[1] == "False"));
    assert_eq!(resolved["ignored_overrides"].as_array().unwrap().len(), 0);
    assert_eq!(resolved["containers"][0]["package"], "rclcpp_components");
    assert_eq!(
        resolved["containers"][0]["executable"],
        "component_container_mt"
    );
}

#[test]
fn test_resolve_reads_environment_overrides() {
    let (mut cmd, _dir) = launch();
    cmd.env("TRT_LAUNCH_ARG_VERBOSE", "True")
        .args(["--color", "never", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'True' (override)"));
}

#[test]
fn test_cli_override_beats_environment() {
    let (mut cmd, _dir) = launch();
    let output = cmd
        .env("TRT_LAUNCH_ARG_VERBOSE", "True")
        .args(["--json", "resolve", "verbose:=False"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let verbose = value["resolved"]["arguments"]
        .as_array()
        .unwrap()
        .iter()
        .find(|argument| argument["name"] == "verbose")
        .cloned()
        .unwrap();
    assert_eq!(verbose["value"], "False");
    assert_eq!(verbose["source"], "override");
}

#[test]
fn test_resolve_warns_on_unknown_override() {
    let (mut cmd, _dir) = launch();
    cmd.args(["--color", "never", "resolve", "batch_size:=4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("batch_size"));
}

#[test]
fn test_resolve_rejects_malformed_override() {
    let (mut cmd, _dir) = launch();
    cmd.args(["--color", "never", "resolve", "model_file_path=/m.onnx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name:=value"));
}

#[test]
fn test_check_passes() {
    let (mut cmd, _dir) = launch();
    cmd.args(["--color", "never", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nvidia::isaac_ros::dnn_inference::TensorRTNode",
        ));
}

#[test]
fn test_config_init_then_validate() {
    let (mut init, dir) = launch();
    let path = dir.path().join("generated.toml");

    init.args(["config", "init"]).arg(&path).assert().success();
    assert!(path.exists());

    let (mut validate, _other) = launch();
    validate
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let (mut cmd, dir) = launch();
    let path = dir.path().join("existing.toml");
    fs::write(&path, "").unwrap();

    cmd.args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_validate_reports_bad_format() {
    let (mut cmd, dir) = launch();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    cmd.args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("format"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let (mut cmd, dir) = launch();
    cmd.args(["plan", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure();
}
