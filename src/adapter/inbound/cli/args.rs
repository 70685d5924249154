//! Declared argument listing, the `--show-args` view of the plan.

use serde_json::json;
use tabled::{Table, Tabled};

use super::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::launch::ArgumentView;

#[derive(Tabled)]
struct ArgumentRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Default")]
    default_value: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<ArgumentView> for ArgumentRow {
    fn from(view: ArgumentView) -> Self {
        Self {
            name: view.name,
            default_value: display_default(&view.default_value),
            kind: view.kind,
            description: view.description,
        }
    }
}

/// Show an empty default as `''` so it is visible in the table.
fn display_default(value: &str) -> String {
    if value.is_empty() {
        "''".to_string()
    } else {
        value.to_string()
    }
}

/// List declared arguments.
pub fn execute() -> Result<()> {
    let arguments = operator::operator().list_arguments();

    if output::is_json() {
        let rows: Vec<_> = arguments
            .iter()
            .map(|a| {
                json!({
                    "name": a.name,
                    "default": a.default_value,
                    "type": a.kind,
                    "description": a.description,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "args",
            "arguments": rows,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Arguments (pass arguments as '<name>:=<value>')");
    let table = Table::new(arguments.into_iter().map(ArgumentRow::from)).to_string();
    output::lines(&table);
    println!();
    output::hint("values are passed to the plugin as strings; booleans are 'True' or 'False'");

    Ok(())
}
