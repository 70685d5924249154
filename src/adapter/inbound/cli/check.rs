//! Handler for the `check` command.

use serde_json::json;

use super::{operator, output};
use crate::error::Result;

/// Validate plan structure and the plugin contract without launching.
pub fn execute() -> Result<()> {
    let report = operator::operator().check_plan()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "ok": true,
            "plugin": report.plugin,
            "nodes": report.nodes,
            "parameters": report.parameters,
            "remappings": report.remappings,
            "arguments": report.arguments,
            "containers": report.containers,
        }));
        return Ok(());
    }

    output::section("Plan Check");
    output::success("Every reference is declared before use");
    output::field("Arguments", report.arguments);
    output::field("Containers", report.containers);

    output::section("Plugin Contract");
    output::field("Plugin", &report.plugin);
    output::field("Nodes", report.nodes.join(", "));
    output::field("Parameters", report.parameters);
    output::field("Remappings", report.remappings);
    output::success("Plan matches the plugin's parameter and topic schema");

    Ok(())
}
