//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use super::{operator, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your model paths", path.display()));
    output::note(&format!(
        "2. Run: tensor-rt-launch resolve -c {}",
        path.display()
    ));
    output::note(&format!(
        "3. Run: tensor-rt-launch plan -c {} --format xml -o tensor_rt.launch.xml",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let view = operator::operator().show_config(&config_toml)?;

    if output::is_json() {
        let arguments: serde_json::Map<String, serde_json::Value> = view
            .arguments
            .iter()
            .map(|(k, v)| (k.clone(), json!(v)))
            .collect();
        output::json_output(json!({
            "command": "config.show",
            "logging": { "level": view.log_level, "format": view.log_format },
            "render": { "format": view.render_format },
            "arguments": arguments,
            "unknown_arguments": view.unknown_arguments,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Config", path.display());

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);

    output::section("Render");
    output::field("Format", &view.render_format);

    output::section("Argument Overrides");
    if view.arguments.is_empty() {
        output::note("(none; declared defaults apply)");
    } else {
        for (name, value) in &view.arguments {
            output::field(name, format!("'{value}'"));
        }
    }
    for name in &view.unknown_arguments {
        output::warning(&format!("'{name}' is not a declared argument and will be ignored"));
    }

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    operator::operator().validate_config(&config_toml)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");
    Ok(())
}
