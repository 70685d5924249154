//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_non_export_lines_in_mod_files, read_relative,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "clap::",
            "tracing::",
            "toml::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> &'static dyn OperatorPort"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn plan_composition_does_not_perform_substitutions() {
    let hits = find_lines_containing("src/application/launch", &["execution::"]);
    assert!(
        hits.is_empty(),
        "launch composition must leave references unresolved: {hits:#?}"
    );
}

#[test]
fn renderers_depend_only_on_plan_types() {
    let hits = find_lines_containing(
        "src/adapter/outbound/render",
        &["crate::application::execution", "crate::infrastructure"],
    );
    assert!(
        hits.is_empty(),
        "renderers should read the plan, not resolve it: {hits:#?}"
    );
}
