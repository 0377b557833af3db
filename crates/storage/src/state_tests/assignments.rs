// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use triage_core::LOG_CAPACITY;

fn seeded() -> MaterializedState {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));
    state.apply_event(&queued_event(ticket("7", &["pix", "boleto"])));
    state.apply_event(&queued_event(ticket("8", &[])));
    state
}

#[test]
fn confirmation_bumps_workload_and_retires_ticket() {
    let mut state = seeded();

    state.apply_event(&assignment_event("asg-1", "7", 2, &["pix", "boleto"]));

    assert_eq!(state.agent(AgentId(2)).unwrap().current_workload, 4);
    assert_eq!(state.agent(AgentId(1)).unwrap().current_workload, 0);
    assert!(!state.is_pending("7"));
    assert!(state.is_pending("8"));
}

#[test]
fn retired_tickets_are_remembered_through_the_log() {
    let mut state = seeded();
    assert!(!state.was_assigned("7"));

    state.apply_event(&assignment_event("asg-1", "7", 2, &["pix"]));

    assert!(state.was_assigned("7"));
    assert!(!state.was_assigned("8"));
}

#[test]
fn confirmation_credits_every_tag() {
    let mut state = seeded();

    state.apply_event(&assignment_event("asg-1", "7", 2, &["pix", "boleto"]));

    assert_eq!(state.memory.success_count("pix", AgentId(2)), 1);
    assert_eq!(state.memory.success_count("boleto", AgentId(2)), 1);
    assert_eq!(state.memory.len(), 2);
}

#[test]
fn confirmation_prepends_log_entry() {
    let mut state = seeded();

    state.apply_event(&assignment_event("asg-1", "7", 2, &["pix"]));
    state.apply_event(&assignment_event("asg-2", "8", 1, &["general"]));

    let ids: Vec<_> = state.log.iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, vec!["asg-2", "asg-1"]);
}

#[test]
fn confirming_active_ticket_clears_designation() {
    let mut state = seeded();
    state.apply_event(&activated_event("8"));

    state.apply_event(&assignment_event("asg-1", "8", 1, &["general"]));

    assert_eq!(state.active_ticket, None);
    assert_eq!(state.active_ticket().unwrap().id, TicketId::new("7"));
}

#[test]
fn confirmation_for_departed_agent_still_logs() {
    let mut state = seeded();

    state.apply_event(&assignment_event("asg-1", "7", 42, &["pix"]));

    assert_eq!(state.log.len(), 1);
    assert_eq!(state.memory.success_count("pix", AgentId(42)), 1);
    assert!(state.agents.iter().all(|a| a.id != AgentId(42)));
}

#[test]
fn log_is_capped() {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));
    for n in 0..=LOG_CAPACITY {
        let id = n.to_string();
        state.apply_event(&queued_event(ticket(&id, &[])));
        state.apply_event(&assignment_event(&format!("asg-{n}"), &id, 1, &["general"]));
    }

    assert_eq!(state.log.len(), LOG_CAPACITY);
    assert_eq!(state.log.latest().unwrap().ticket_id, TicketId::new(LOG_CAPACITY.to_string()));
    assert_eq!(state.agent(AgentId(1)).unwrap().current_workload, LOG_CAPACITY as u32 + 1);
    assert_eq!(state.memory.success_count("general", AgentId(1)), LOG_CAPACITY as u64 + 1);
}
