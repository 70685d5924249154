//! ROS 2 launch XML frontend output.
//!
//! Emits `<arg>` declarations followed by `<node_container>` blocks, with
//! references written as `$(var name)` so `ros2 launch` performs the
//! substitution itself.

use std::fmt::Write as _;

use crate::domain::argument::LaunchArgument;
use crate::domain::container::NodeContainer;
use crate::domain::node::ComposableNode;
use crate::domain::plan::{LaunchAction, LaunchPlan};
use crate::error::Result;
use crate::port::outbound::render::PlanRenderer;

const INDENT: &str = "  ";

/// Launch XML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRenderer;

impl PlanRenderer for XmlRenderer {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn render(&self, plan: &LaunchPlan) -> Result<String> {
        let mut out = String::from("<?xml version=\"1.0\"?>\n<launch>\n");
        for action in plan.actions() {
            match action {
                LaunchAction::DeclareArgument(argument) => write_argument(&mut out, argument),
                LaunchAction::Container(container) => write_container(&mut out, container),
            }
        }
        out.push_str("</launch>\n");
        Ok(out)
    }
}

fn write_argument(out: &mut String, argument: &LaunchArgument) {
    let _ = writeln!(
        out,
        "{INDENT}<arg name=\"{}\" default=\"{}\" description=\"{}\"/>",
        escape(argument.name().as_str()),
        escape(argument.default_value()),
        escape(argument.description()),
    );
}

fn write_container(out: &mut String, container: &NodeContainer) {
    let _ = writeln!(
        out,
        "{INDENT}<node_container pkg=\"{}\" exec=\"{}\" name=\"{}\" namespace=\"{}\">",
        container.package(),
        container.executable(),
        escape(container.name()),
        escape(container.namespace()),
    );
    for node in container.nodes() {
        write_node(out, node);
    }
    let _ = writeln!(out, "{INDENT}</node_container>");
}

fn write_node(out: &mut String, node: &ComposableNode) {
    let entry_point = node.entry_point();
    let _ = writeln!(
        out,
        "{INDENT}{INDENT}<composable_node pkg=\"{}\" plugin=\"{}\" name=\"{}\">",
        escape(&entry_point.package),
        escape(&entry_point.plugin),
        escape(node.name()),
    );
    for remapping in node.remappings() {
        let _ = writeln!(
            out,
            "{INDENT}{INDENT}{INDENT}<remap from=\"{}\" to=\"{}\"/>",
            escape(remapping.from.as_str()),
            escape(remapping.to.as_str()),
        );
    }
    for parameter in node.parameters() {
        let _ = writeln!(
            out,
            "{INDENT}{INDENT}{INDENT}<param name=\"{}\" value=\"{}\"/>",
            escape(&parameter.name),
            escape(&parameter.value.to_string()),
        );
    }
    let _ = writeln!(out, "{INDENT}{INDENT}</composable_node>");
}

/// Escape text for a double-quoted XML attribute.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::launch::assembler::generate_launch_description;

    #[test]
    fn escapes_list_defaults() {
        let xml = XmlRenderer.render(&generate_launch_description()).unwrap();
        assert!(xml.contains(r#"<arg name="input_tensor_names" default="[&quot;input&quot;]""#));
    }

    #[test]
    fn references_use_var_substitution() {
        let xml = XmlRenderer.render(&generate_launch_description()).unwrap();
        assert!(xml.contains(r#"<param name="verbose" value="$(var verbose)"/>"#));
        assert!(xml.contains(r#"<remap from="tensor_pub" to="tensor_pub"/>"#));
    }

    #[test]
    fn arguments_precede_container() {
        let xml = XmlRenderer.render(&generate_launch_description()).unwrap();
        let last_arg = xml.rfind("<arg ").unwrap();
        let container = xml.find("<node_container").unwrap();
        assert!(last_arg < container);
        assert!(xml.contains(r#"exec="component_container_mt""#));
    }
}
