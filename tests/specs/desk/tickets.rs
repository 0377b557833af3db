//! Ticket queue specs

use crate::prelude::*;

#[test]
fn push_accepts_single_ticket_and_arrays() {
    let desk = Desk::empty();
    desk.file("one.json", r#"{"id": "10", "subject": "pix recusado"}"#);
    desk.file("many.json", r#"[{"id": "11", "priority": "urgent"}, {"id": "12"}]"#);

    desk.triage().args(&["tickets", "push", "one.json"]).passes().stdout_has("Queued 1 ticket(s)");
    desk.triage().args(&["tickets", "push", "many.json"]).passes().stdout_has("Queued 2 ticket(s)");

    let run = desk.triage().args(&["-o", "json", "tickets", "list"]).passes();
    let ids: Vec<_> = run.json().as_array().unwrap().iter().map(|t| t["id"].clone()).collect();
    assert_eq!(ids, vec![json!("10"), json!("11"), json!("12")]);
}

#[test]
fn first_pending_ticket_is_active_until_another_is_activated() {
    let desk = Desk::empty();
    desk.file("t.json", r#"[{"id": "1"}, {"id": "2"}]"#);
    desk.triage().args(&["tickets", "push", "t.json"]).passes();

    let run = desk.triage().args(&["-o", "json", "tickets", "list"]).passes();
    assert_eq!(run.json()[0]["active"], true);

    desk.triage().args(&["tickets", "activate", "2"]).passes();
    let run = desk.triage().args(&["-o", "json", "tickets", "list"]).passes();
    assert_eq!(run.json()[0]["active"], false);
    assert_eq!(run.json()[1]["active"], true);
}

#[test]
fn activating_unknown_ticket_fails() {
    let desk = Desk::empty();
    desk.triage().args(&["tickets", "activate", "404"]).fails_with(1).stderr_has("not pending");
}

#[test]
fn blank_ticket_id_is_rejected() {
    let desk = Desk::empty();
    desk.triage()
        .args(&["tickets", "push", "-"])
        .stdin(r#"{"id": "  "}"#)
        .fails_with(1)
        .stderr_has("must not be blank");
}
