//! Handler for the `plan` command.

use std::fs;

use serde_json::json;

use super::command::{FormatArg, PlanArgs};
use super::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::launch::{PlanRequest, RenderFormat};

/// Execute `plan`.
pub fn execute(args: &PlanArgs) -> Result<()> {
    let request = PlanRequest {
        config_toml: operator::read_optional_config_toml(&args.config)?,
        format: args.format.map(render_format),
    };
    let rendered = operator::operator().render_plan(&request)?;

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &rendered.text)?;

        if output::is_json() {
            output::json_output(json!({
                "command": "plan",
                "format": rendered.format.as_str(),
                "path": path.display().to_string(),
            }));
            return Ok(());
        }
        output::success("Wrote launch plan");
        output::field("Path", path.display());
        output::field("Format", rendered.format.as_str());
        return Ok(());
    }

    if output::is_json() && rendered.format == RenderFormat::Json {
        let plan: serde_json::Value = serde_json::from_str(&rendered.text)?;
        output::json_output(json!({
            "command": "plan",
            "format": rendered.format.as_str(),
            "plan": plan,
        }));
        return Ok(());
    }

    output::document(&rendered.text);
    Ok(())
}

fn render_format(format: FormatArg) -> RenderFormat {
    match format {
        FormatArg::Json => RenderFormat::Json,
        FormatArg::Xml => RenderFormat::Xml,
    }
}
