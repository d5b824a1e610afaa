//! Learner progress specs

use crate::prelude::*;

#[test]
fn repeated_completion_counts_once() {
    let temp = Project::empty();
    temp.af().args(&["lesson", "complete", "3", "0"]).passes();
    temp.af()
        .args(&["lesson", "complete", "3", "0"])
        .passes()
        .stdout_eq("Lesson 3-0 was already complete\n");
    temp.af()
        .args(&["lesson", "complete", "3", "1"])
        .passes()
        .stdout_eq("Completed lesson 3-1 (2/7 in module 3)\n");
}

#[test]
fn custom_curriculum_drives_progress() {
    let temp = Project::empty();
    temp.file(
        "config.toml",
        "[[modules]]\nid = \"intro\"\ntitle = \"Intro\"\nlessons = 2\n\n[[modules]]\nid = \"drums\"\ntitle = \"Drums\"\nlessons = 2\n",
    );
    temp.af().args(&["lesson", "complete", "intro", "0"]).passes();
    temp.af().args(&["lesson", "complete", "intro", "1"]).passes();

    temp.af()
        .args(&["progress"])
        .passes()
        .stdout_has("Overall: 50% (2 lessons, 1 modules complete)")
        .stdout_has("[x] Halfway There")
        .stdout_has("[ ] Certified");
}

#[test]
fn practice_and_notes_persist() {
    let temp = Project::empty();
    temp.af().args(&["practice", "add", "3600"]).passes();
    temp.af()
        .args(&["practice", "add", "120"])
        .passes()
        .stdout_eq("Total practice: 1h 02m\n");

    temp.af().args(&["note", "set", "1", "soft knees"]).passes();
    temp.af()
        .args(&["note", "show"])
        .passes()
        .stdout_eq("[1] soft knees\n");
}
