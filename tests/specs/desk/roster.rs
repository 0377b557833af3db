//! Roster sync and expertise specs

use crate::prelude::*;

#[test]
fn sync_replaces_roster_and_keeps_expertise() {
    let desk = Desk::staffed();
    desk.file("agents.json", r#"[{"id": 1, "name": "Ana Silva"}]"#);
    desk.triage().args(&["agents", "sync", "agents.json"]).passes().stdout_has("Synced 1 agent(s)");

    let run = desk.triage().args(&["-o", "json", "agents", "show", "1"]).passes();
    let agent = run.json();
    assert_eq!(agent["name"], "Ana Silva");
    assert_eq!(agent["expertise"][0]["system_name"], "pix");
}

#[test]
fn sync_reads_stdin() {
    let desk = Desk::empty();
    desk.triage()
        .args(&["agents", "sync", "-"])
        .stdin(r#"{"id": 7, "name": "Caio"}"#)
        .passes()
        .stdout_has("Synced 1 agent(s)");
    desk.triage().args(&["agents", "list"]).passes().stdout_has("Caio");
}

#[test]
fn set_expertise_rejects_unknown_agent() {
    let desk = Desk::staffed();
    desk.triage()
        .args(&["expertise", "set", "frete", "2", "--agent", "1", "--agent", "99"])
        .fails_with(1)
        .stderr_has("unknown agent 99");
    desk.triage().args(&["agents", "show", "1"]).passes().stdout_lacks("frete");
}

#[test]
fn insight_averages_declared_levels() {
    let desk = Desk::staffed();
    desk.triage().args(&["expertise", "set", "pix", "basic", "--agent", "2"]).passes();
    desk.triage()
        .args(&["expertise", "insight", "PIX"])
        .passes()
        .stdout_has("intermediate average across 2 agent(s)");
}

#[test]
fn remove_expertise_reports_missing_system() {
    let desk = Desk::staffed();
    desk.triage().args(&["expertise", "remove", "2", "pix"]).passes().stdout_has("did not declare");
    desk.triage().args(&["expertise", "remove", "2", "boleto"]).passes().stdout_has("Removed");
}
