//! Logout specs

use crate::prelude::*;

#[test]
fn logout_resets_every_learner_field() {
    let temp = Project::configured();
    let code = temp.issue_code();
    temp.af().args(&["access", "redeem", &code]).passes();
    temp.af().args(&["lesson", "complete", "1", "0"]).passes();
    temp.af().args(&["practice", "add", "60"]).passes();
    temp.af()
        .args(&["profile", "set", "--name", "Awa", "--email", "awa@example.com"])
        .passes();

    temp.af().args(&["logout"]).passes().stdout_eq("Logged out\n");

    temp.af().args(&["access", "status"]).passes().stdout_eq("Access: none\n");
    temp.af()
        .args(&["profile", "show"])
        .passes()
        .stdout_has("Name:       -")
        .stdout_has("Enrolled:   -");
    temp.af()
        .args(&["progress"])
        .passes()
        .stdout_has("Practice: 0s");
}

#[test]
fn logout_keeps_issued_codes() {
    let temp = Project::configured();
    temp.issue_code();
    temp.af().args(&["logout"]).passes();

    temp.af()
        .args(&["code", "stats", "--admin-password", ADMIN])
        .passes()
        .stdout_has("Total:     1");
}
