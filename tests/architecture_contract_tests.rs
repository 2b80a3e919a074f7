//! Architecture contract tests.

mod support;

use support::architecture::{find_lines_containing, find_non_export_lines_in_mod_files, path_exists};

#[test]
fn domain_has_no_outer_layer_or_io_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "std::fs",
            "dialoguer::",
            "clap::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::infrastructure", "crate::application"],
    );
    assert!(
        hits.is_empty(),
        "ports should only depend on domain types: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing("src/application", &["crate::adapter::"]);
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn outbound_adapters_do_not_reach_into_the_cli() {
    let hits = find_lines_containing("src/adapter/outbound", &["adapter::inbound"]);
    assert!(
        hits.is_empty(),
        "outbound adapters should not depend on the command line: {hits:#?}"
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
fn team_source_contract_lives_in_outbound_port() {
    assert!(path_exists("src/port/outbound/teams.rs"));
    assert!(path_exists("src/port/outbound/report.rs"));
}
