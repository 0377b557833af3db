// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod assignments;
mod idempotency;
mod tickets;

use super::*;
pub(super) use triage_core::test_support::{
    activated_event, assignment_event, expertise, queued_event, roster_event,
};
use triage_core::{Expertise, KnowledgeLevel};

pub(super) fn roster() -> Vec<Agent> {
    vec![
        Agent::builder().id(1u64).name("Ana").build(),
        Agent::builder().id(2u64).name("Bruno").current_workload(3).build(),
    ]
}

pub(super) fn ticket(id: &str, tags: &[&str]) -> Ticket {
    Ticket::builder().id(id).tags(tags.iter().map(|t| t.to_string()).collect()).build()
}

// ── Roster ───────────────────────────────────────────────────────────────────

#[test]
fn roster_synced_replaces_agents_in_order() {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));
    assert_eq!(state.agents.len(), 2);

    let reversed: Vec<_> = roster().into_iter().rev().collect();
    state.apply_event(&roster_event(reversed));

    let ids: Vec<_> = state.agents.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![AgentId(2), AgentId(1)]);
}

#[test]
fn expertise_updated_replaces_list() {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));

    state.apply_event(&Event::ExpertiseUpdated {
        agent_id: AgentId(1),
        expertise: vec![expertise("pix", 3)],
    });

    let agent = state.agent(AgentId(1)).unwrap();
    assert_eq!(agent.expertise, vec![Expertise::new("pix", KnowledgeLevel::Advanced)]);
    assert!(state.agent(AgentId(2)).unwrap().expertise.is_empty());
}

#[test]
fn expertise_for_unknown_agent_is_ignored() {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));
    let before = state.clone();

    state.apply_event(&Event::ExpertiseUpdated {
        agent_id: AgentId(99),
        expertise: vec![expertise("pix", 3)],
    });

    assert_eq!(state, before);
}

#[test]
fn custom_event_is_a_noop() {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));
    let before = state.clone();
    state.apply_event(&Event::Custom);
    assert_eq!(state, before);
}

// ── Serialization ────────────────────────────────────────────────────────────

#[test]
fn state_roundtrips_through_json() {
    let mut state = MaterializedState::default();
    state.apply_event(&roster_event(roster()));
    state.apply_event(&queued_event(ticket("7", &["pix"])));
    state.apply_event(&queued_event(ticket("8", &[])));
    state.apply_event(&activated_event("8"));
    state.apply_event(&assignment_event("asg-1", "7", 1, &["pix"]));

    let json = serde_json::to_string(&state).unwrap();
    let parsed: MaterializedState = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, state);
}

#[test]
fn empty_object_deserializes_to_default_state() {
    let parsed: MaterializedState = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, MaterializedState::default());
}
