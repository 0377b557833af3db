//! Output format and error reporting specs

use crate::prelude::*;

#[test]
fn empty_lists_print_a_message_or_empty_json() {
    let desk = Desk::empty();
    desk.triage().args(&["agents", "list"]).passes().stdout_has("No agents found");
    let run = desk.triage().args(&["-o", "json", "agents", "list"]).passes();
    assert_eq!(run.json(), json!([]));
}

#[test]
fn unknown_settings_are_rejected() {
    let desk = Desk::empty();
    desk.config("autopilot = true\n");
    desk.triage().args(&["agents", "list"]).fails_with(1).stderr_has("invalid settings");
}

#[test]
fn state_lives_in_the_state_directory() {
    let desk = Desk::staffed();
    assert!(desk.state_dir().join("triage.wal").exists());
    assert!(desk.state_dir().join("triage.log").exists());
}

#[test]
fn checkpoint_compacts_and_keeps_state() {
    let desk = Desk::staffed();
    desk.triage().args(&["checkpoint"]).passes().stdout_has("Checkpoint written");
    assert!(desk.state_dir().join("snapshot.json").exists());

    let run = desk.triage().args(&["-o", "json", "agents", "list"]).passes();
    assert_eq!(run.json().as_array().unwrap().len(), 2);
}
