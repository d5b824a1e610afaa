//! Access code lifecycle specs
//!
//! Generate, validate, redeem once, delete.

use crate::prelude::*;

#[test]
fn issued_code_validates_case_insensitively() {
    let temp = Project::configured();
    let code = temp.issue_code();

    temp.af()
        .args(&["code", "validate", &format!(" {} ", code.to_lowercase())])
        .passes()
        .stdout_eq(&format!("{code} is valid\n"));
}

#[test]
fn redeemed_code_no_longer_validates() {
    let temp = Project::configured();
    let code = temp.issue_code();

    temp.af()
        .args(&["access", "redeem", &code, "--email", "learner@example.com"])
        .passes()
        .stdout_eq(&format!("Access granted with {code}\n"));
    temp.af().args(&["code", "validate", &code]).fails();
}

#[test]
fn code_redeems_only_once() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.af().args(&["access", "redeem", &code, "--email", "a@example.com"]).passes();

    temp.af()
        .args(&["access", "redeem", &code, "--email", "b@example.com"])
        .fails()
        .stderr_has("already been used");

    temp.af()
        .args(&["code", "list", "--admin-password", ADMIN])
        .passes()
        .stdout_has("a@example.com")
        .stdout_lacks("b@example.com");
}

#[test]
fn redeem_records_local_access() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.af().args(&["access", "redeem", &code]).passes();

    temp.af()
        .args(&["access", "status"])
        .passes()
        .stdout_eq(&format!("Access: granted ({code})\n"));
}

#[test]
fn deleted_code_cannot_be_redeemed() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.af()
        .args(&["code", "delete", &code, "--admin-password", ADMIN])
        .passes();

    temp.af()
        .args(&["access", "redeem", &code])
        .fails()
        .stderr_has("not found");
}

#[test]
fn empty_registry_lists_nothing() {
    let temp = Project::configured();
    temp.af()
        .args(&["code", "list", "--admin-password", ADMIN])
        .passes()
        .stdout_eq("No access codes\n");
}

#[test]
fn stats_count_available_and_used() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.issue_code();
    temp.af().args(&["access", "redeem", &code]).passes();

    temp.af()
        .args(&["code", "stats"])
        .env("AF_ADMIN_PASSWORD", ADMIN)
        .passes()
        .stdout_eq("Total:     2\nAvailable: 1\nUsed:      1\n");
}
