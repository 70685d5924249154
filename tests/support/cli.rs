//! Binary invocation helpers.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// The binary, run from an empty working directory with no argument
/// overrides in its environment.
pub fn launch() -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("tensor-rt-launch");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TRT_LAUNCH_ARG_MODEL_FILE_PATH")
        .env_remove("TRT_LAUNCH_ARG_VERBOSE");
    (cmd, dir)
}
