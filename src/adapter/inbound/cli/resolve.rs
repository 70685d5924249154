//! Handler for the `resolve` command.

use serde_json::json;

use super::command::ResolveArgs;
use super::diagnostic::OverrideDiagnostic;
use super::{operator, output};
use crate::domain::resolved::{ResolvedPlan, ValueSource};
use crate::error::{Error, ResolveError, Result};
use crate::port::inbound::operator::launch::ResolveRequest;

/// Execute `resolve`.
pub fn execute(args: &ResolveArgs) -> Result<()> {
    let request = ResolveRequest {
        config_toml: operator::read_optional_config_toml(&args.config)?,
        overrides: args.overrides.clone(),
    };

    let resolved = match operator::operator().resolve_plan(&request) {
        Ok(resolved) => resolved,
        Err(Error::Resolve(ResolveError::InvalidOverride { input, reason })) => {
            if !output::is_json() {
                if let Some(report) = OverrideDiagnostic::new(&input, reason.clone()).render() {
                    eprint!("{report}");
                }
            }
            return Err(ResolveError::InvalidOverride { input, reason }.into());
        }
        Err(error) => return Err(error),
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "resolve",
            "resolved": resolved,
        }));
        return Ok(());
    }

    print_resolved(&resolved);
    Ok(())
}

fn print_resolved(resolved: &ResolvedPlan) {
    output::section("Arguments");
    for argument in &resolved.arguments {
        let marker = match argument.source {
            ValueSource::Default => "",
            ValueSource::Override => " (override)",
        };
        output::field(
            argument.name.as_str(),
            format!("{}{marker}", quoted(&argument.value)),
        );
    }

    for container in &resolved.containers {
        output::section(&format!(
            "Container {} ({}, namespace {})",
            container.name, container.executable, container.namespace
        ));
        for node in &container.nodes {
            output::field("Node", &node.name);
            output::field("Plugin", &node.entry_point.plugin);
            for remapping in &node.remappings {
                output::field("Remap", format!("{} -> {}", remapping.from, remapping.to));
            }
            for (name, value) in &node.parameters {
                output::field("Param", format!("{name} = {}", quoted(value)));
            }
        }
    }

    for name in &resolved.ignored_overrides {
        output::warning(&format!("override '{name}' matches no declared argument; ignored"));
    }
}

/// Quote a value so empty strings and `"False"` read as the strings they are.
fn quoted(value: &str) -> String {
    format!("'{value}'")
}
