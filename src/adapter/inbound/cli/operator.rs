//! Inbound operator accessor for CLI handlers.

use std::path::Path;
use std::sync::OnceLock;

use super::command::{ConfigOption, DEFAULT_CONFIG_FILE};
use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::port::OperatorPort;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    OPERATOR
        .get()
        .expect("CLI operator not installed; call cli::operator::install from main")
        .as_ref()
}

/// Load config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile(e).into())
}

/// Config TOML for commands where a config file is optional.
///
/// An explicit `--config` must exist; the default file is used only when
/// present in the working directory.
pub fn read_optional_config_toml(option: &ConfigOption) -> Result<Option<String>> {
    if let Some(path) = &option.config {
        return read_config_toml(path).map(Some);
    }

    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        return read_config_toml(default).map(Some);
    }
    Ok(None)
}
