//! Recommendation and assignment specs

use crate::prelude::*;

fn with_pix_ticket(desk: &Desk) {
    desk.file("t.json", r#"{"id": "9", "subject": "Pix não caiu", "tags": ["pix"]}"#);
    desk.triage().args(&["tickets", "push", "t.json"]).passes();
}

#[test]
fn recommend_prefers_matching_expertise() {
    let desk = Desk::staffed();
    with_pix_ticket(&desk);

    let run = desk.triage().args(&["-o", "json", "recommend"]).passes();
    let rec = run.json();
    assert_eq!(rec["agent"]["name"], "Ana");
    assert!(rec["tech_score"].as_f64().unwrap() > 0.0);

    desk.triage().args(&["recommend", "--all"]).passes().stdout_has("Ana").stdout_has("Bruno");
}

#[test]
fn recommend_with_every_agent_inactive() {
    let desk = Desk::empty();
    desk.file("agents.json", r#"[{"id": 1, "name": "Ana", "active": false}]"#);
    desk.triage().args(&["agents", "sync", "agents.json"]).passes();
    with_pix_ticket(&desk);

    desk.triage().args(&["recommend"]).passes().stdout_has("No active agent available");
    desk.triage().args(&["assign"]).passes().stdout_has("No active agent available");
}

#[test]
fn recommend_without_tickets() {
    let desk = Desk::staffed();
    desk.triage().args(&["recommend"]).passes().stdout_has("No pending ticket");
}

#[test]
fn assign_updates_workload_log_and_memory() {
    let desk = Desk::staffed();
    with_pix_ticket(&desk);

    desk.triage().args(&["assign", "--ticket", "9"]).passes().stdout_has("Assigned ticket 9 to Ana");

    let agent = desk.triage().args(&["-o", "json", "agents", "show", "1"]).passes().json();
    assert_eq!(agent["current_workload"], 1);

    let log = desk.triage().args(&["-o", "json", "log"]).passes().json();
    assert_eq!(log[0]["ticket_id"], "9");
    assert_eq!(log[0]["type"], "manual");

    let memory = desk.triage().args(&["-o", "json", "memory", "--tag", "pix"]).passes().json();
    assert_eq!(memory[0]["success_count"], 1);

    desk.triage().args(&["tickets", "list"]).passes().stdout_has("No pending tickets");
}

#[test]
fn assigning_a_ticket_twice_is_stale() {
    let desk = Desk::staffed();
    with_pix_ticket(&desk);

    desk.triage().args(&["assign", "--ticket", "9"]).passes();
    desk.triage()
        .args(&["assign", "--ticket", "9"])
        .fails_with(3)
        .stderr_has("ticket 9 is no longer pending");
}

#[test]
fn assigning_an_unknown_ticket_fails() {
    let desk = Desk::staffed();
    desk.triage().args(&["assign", "--ticket", "404"]).fails_with(1).stderr_has("ticket 404 is not pending");
}
