//! Error reporting specs

use crate::prelude::*;

#[test]
fn errors_go_to_stderr_with_prefix() {
    let temp = Project::empty();
    temp.af()
        .args(&["access", "redeem", "AF-ZZZZZZ"])
        .fails()
        .stdout_eq("")
        .stderr_has("error: access code AF-ZZZZZZ not found");
}

#[test]
fn admin_without_configuration_explains_fix() {
    let temp = Project::empty();
    temp.af()
        .args(&["code", "generate", "--admin-password", "x"])
        .fails()
        .stderr_has("admin mode is locked")
        .stderr_has("config.toml");
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::empty();
    temp.file("config.toml", "modules = 3\n");
    temp.af()
        .args(&["progress"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn unknown_subcommand_fails() {
    let temp = Project::empty();
    temp.af().args(&["teleport"]).fails();
}
