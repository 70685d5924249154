//! Plan checks against a hosted plugin's documented schema.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::node::ComposableNode;
use crate::domain::plan::LaunchPlan;
use crate::error::ContractError;
use crate::port::outbound::plugin::PluginContract;

/// Nodes that passed the check, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractReport {
    pub plugin: String,
    pub nodes: Vec<String>,
    pub parameters: usize,
    pub remappings: usize,
}

/// Check every node loading the contract's plugin.
///
/// # Errors
///
/// - [`ContractError::PluginNotLoaded`] if no node loads the plugin
/// - [`ContractError::MissingParameters`] / [`ContractError::UnexpectedParameters`]
///   if a node's parameter names differ from the contract's
/// - [`ContractError::UnknownTopics`] if a node remaps a topic the plugin
///   does not expose
/// - [`ContractError::KindMismatch`] if a parameter references an argument
///   declared with a different value kind than the plugin reads
pub fn check_plan(plan: &LaunchPlan, contract: &dyn PluginContract) -> Result<ContractReport, ContractError> {
    let entry_point = contract.entry_point();
    let nodes: Vec<&ComposableNode> = plan
        .containers()
        .flat_map(|container| container.nodes())
        .filter(|node| node.entry_point().plugin == entry_point.plugin)
        .collect();

    if nodes.is_empty() {
        return Err(ContractError::PluginNotLoaded {
            plugin: entry_point.plugin,
        });
    }

    let mut report = ContractReport {
        plugin: entry_point.plugin.clone(),
        nodes: Vec::with_capacity(nodes.len()),
        parameters: 0,
        remappings: 0,
    };

    for node in nodes {
        check_node(node, contract)?;
        check_kinds(plan, node, contract)?;
        debug!(node = node.name(), plugin = %entry_point.plugin, "node satisfies plugin contract");
        report.nodes.push(node.name().to_string());
        report.parameters += node.parameters().len();
        report.remappings += node.remappings().len();
    }

    Ok(report)
}

/// Check one node's parameters and remappings.
///
/// # Errors
///
/// See [`check_plan`].
pub fn check_node(node: &ComposableNode, contract: &dyn PluginContract) -> Result<(), ContractError> {
    let entry_point = contract.entry_point();
    if node.entry_point() != &entry_point {
        return Err(ContractError::PluginMismatch {
            node: node.name().to_string(),
            expected: format!("{}/{}", entry_point.package, entry_point.plugin),
            found: format!("{}/{}", node.entry_point().package, node.entry_point().plugin),
        });
    }

    let expected: BTreeSet<&str> = contract.parameters().iter().map(|p| p.name).collect();
    let actual: BTreeSet<&str> = node.parameters().iter().map(|p| p.name.as_str()).collect();

    let missing = names(expected.difference(&actual));
    if !missing.is_empty() {
        return Err(ContractError::MissingParameters {
            node: node.name().to_string(),
            names: missing,
        });
    }

    let unexpected = names(actual.difference(&expected));
    if !unexpected.is_empty() {
        return Err(ContractError::UnexpectedParameters {
            node: node.name().to_string(),
            names: unexpected,
        });
    }

    let unknown_topics = names(
        node.remappings()
            .iter()
            .map(|remapping| remapping.from.as_str())
            .filter(|topic| !contract.topics().contains(topic))
            .collect::<BTreeSet<_>>()
            .iter(),
    );
    if !unknown_topics.is_empty() {
        return Err(ContractError::UnknownTopics {
            node: node.name().to_string(),
            names: unknown_topics,
        });
    }

    Ok(())
}

/// Compare each referenced argument's declared kind with the kind the
/// plugin decodes. Literals and undeclared references are not checked here.
fn check_kinds(
    plan: &LaunchPlan,
    node: &ComposableNode,
    contract: &dyn PluginContract,
) -> Result<(), ContractError> {
    for parameter in node.parameters() {
        let Some(reference) = parameter.value.reference() else {
            continue;
        };
        let Some(argument) = plan.argument(reference.argument().as_str()) else {
            continue;
        };
        let Some(spec) = contract
            .parameters()
            .iter()
            .find(|spec| spec.name == parameter.name)
        else {
            continue;
        };
        if spec.kind != argument.kind() {
            return Err(ContractError::KindMismatch {
                node: node.name().to_string(),
                parameter: parameter.name.clone(),
                expected: spec.kind,
                found: argument.kind(),
            });
        }
    }
    Ok(())
}

fn names<'a, 'b: 'a>(iter: impl Iterator<Item = &'a &'b str>) -> Vec<String> {
    iter.map(|name| (*name).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::launch::assembler::generate_launch_description;
    use crate::domain::argument::ValueKind;
    use crate::testkit::plugin::StubPlugin;

    #[test]
    fn missing_names_are_sorted_and_owned() {
        let plan = generate_launch_description();
        let node = &plan.containers().next().unwrap().nodes()[0];
        let stub = StubPlugin::tensor_rt()
            .rename_parameter("verbose", "verbosity")
            .rename_parameter("engine_file_path", "engine_path");

        let err = check_node(node, &stub).unwrap_err();
        assert_eq!(
            err,
            ContractError::MissingParameters {
                node: "tensor_rt".to_string(),
                names: vec!["engine_path".to_string(), "verbosity".to_string()],
            }
        );
    }

    #[test]
    fn declared_kinds_match_plugin() {
        let plan = generate_launch_description();
        assert!(check_plan(&plan, &StubPlugin::tensor_rt()).is_ok());
    }

    #[test]
    fn kind_disagreement_is_caught() {
        let plan = generate_launch_description();
        let stub = StubPlugin::tensor_rt().with_parameter_kind("verbose", ValueKind::StringList);

        let err = check_plan(&plan, &stub).unwrap_err();
        assert_eq!(
            err,
            ContractError::KindMismatch {
                node: "tensor_rt".to_string(),
                parameter: "verbose".to_string(),
                expected: ValueKind::StringList,
                found: ValueKind::Boolean,
            }
        );
    }
}
