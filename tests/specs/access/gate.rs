//! Content gate specs

use crate::prelude::*;

#[test]
fn program_content_locked_before_redemption() {
    let temp = Project::configured();
    temp.af()
        .args(&["access", "check", "syllabus"])
        .fails()
        .stderr_has("syllabus is locked");
}

#[test]
fn program_content_unlocked_after_redemption() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.af().args(&["access", "redeem", &code]).passes();

    temp.af()
        .args(&["access", "check", "syllabus"])
        .passes()
        .stdout_eq("syllabus is unlocked\n");
}

#[test]
fn premium_content_needs_entitlement() {
    let temp = Project::configured();
    temp.file(
        "config.toml",
        &format!("admin_password = \"{ADMIN}\"\nentitlement = \"masterclass\"\n"),
    );
    let code = temp.issue_code();
    temp.af().args(&["access", "redeem", &code]).passes();

    temp.af()
        .args(&["access", "check", "video", "--premium"])
        .fails()
        .stderr_has("Requires the 'masterclass' entitlement");
}

#[test]
fn premium_content_opens_with_entitlement() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.af().args(&["access", "redeem", &code]).passes();

    temp.af()
        .args(&["access", "check", "video", "--premium"])
        .passes()
        .stdout_has("video is unlocked");
}
