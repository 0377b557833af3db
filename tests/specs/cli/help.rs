//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn no_args_is_a_usage_error() {
    cli().fails_with(2).stderr_has("Usage:");
}

#[test]
fn agents_help_shows_subcommands() {
    cli()
        .args(&["agents", "--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("show")
        .stdout_has("sync");
}

#[test]
fn expertise_help_shows_subcommands() {
    cli()
        .args(&["expertise", "--help"])
        .passes()
        .stdout_has("set")
        .stdout_has("remove")
        .stdout_has("insight");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
