// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn queued_tickets_keep_arrival_order() {
    let mut state = MaterializedState::default();
    for id in ["3", "1", "2"] {
        state.apply_event(&queued_event(ticket(id, &[])));
    }

    let ids: Vec<_> = state.pending.keys().map(TicketId::as_str).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert!(state.is_pending("1"));
    assert!(!state.is_pending("4"));
}

#[test]
fn requeue_refreshes_content_without_moving() {
    let mut state = MaterializedState::default();
    state.apply_event(&queued_event(ticket("1", &[])));
    state.apply_event(&queued_event(ticket("2", &[])));
    state.apply_event(&queued_event(ticket("1", &["pix"])));

    let ids: Vec<_> = state.pending.keys().map(TicketId::as_str).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(state.ticket("1").unwrap().tags, vec!["pix".to_string()]);
}

#[test]
fn active_ticket_defaults_to_oldest_pending() {
    let mut state = MaterializedState::default();
    assert!(state.active_ticket().is_none());

    state.apply_event(&queued_event(ticket("1", &[])));
    state.apply_event(&queued_event(ticket("2", &[])));

    assert_eq!(state.active_ticket().unwrap().id, TicketId::new("1"));
}

#[test]
fn activation_designates_pending_ticket() {
    let mut state = MaterializedState::default();
    state.apply_event(&queued_event(ticket("1", &[])));
    state.apply_event(&queued_event(ticket("2", &[])));

    state.apply_event(&activated_event("2"));

    assert_eq!(state.active_ticket().unwrap().id, TicketId::new("2"));
}

#[test]
fn activation_of_unknown_ticket_is_ignored() {
    let mut state = MaterializedState::default();
    state.apply_event(&queued_event(ticket("1", &[])));

    state.apply_event(&activated_event("9"));

    assert_eq!(state.active_ticket, None);
    assert_eq!(state.active_ticket().unwrap().id, TicketId::new("1"));
}
