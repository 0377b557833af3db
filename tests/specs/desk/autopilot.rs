//! Autopilot specs

use crate::prelude::*;

#[test]
fn autopilot_requires_opt_in() {
    let desk = Desk::staffed();
    desk.triage().args(&["autopilot"]).fails_with(1).stderr_has("autopilot is disabled");
}

#[test]
fn autopilot_spreads_tickets_across_agents() {
    let desk = Desk::staffed();
    desk.config("autopilot_enabled = true\n");
    desk.file("t.json", r#"[{"id": "1"}, {"id": "2"}, {"id": "3", "priority": "urgent"}]"#);
    desk.triage().args(&["tickets", "push", "t.json"]).passes();

    let run = desk.triage().args(&["-o", "json", "autopilot"]).passes().json();
    let assignments = run["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 3);
    assert_eq!(assignments[0]["entry"]["ticket_id"], "3");
    assert_eq!(assignments[0]["entry"]["type"], "autopilot");
    assert_eq!(run["pending"], 0);

    let agents = desk.triage().args(&["-o", "json", "agents", "list"]).passes().json();
    let load: u64 =
        agents.as_array().unwrap().iter().map(|a| a["current_workload"].as_u64().unwrap()).sum();
    assert_eq!(load, 3);
}
