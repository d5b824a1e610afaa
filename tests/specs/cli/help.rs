//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_command_groups() {
    let temp = Project::empty();
    let run = temp.af().args(&["--help"]).passes();
    for group in ["code", "access", "lesson", "progress", "note", "practice", "profile", "logout"] {
        assert!(run.stdout().contains(group), "help missing {group}");
    }
}

#[test]
fn code_help_mentions_admin_password() {
    let temp = Project::empty();
    temp.af()
        .args(&["code", "--help"])
        .passes()
        .stdout_has("--admin-password");
}
