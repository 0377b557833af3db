// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Every event applied twice must leave the same state as applying it once.

use super::*;

fn events() -> Vec<Event> {
    vec![
        roster_event(roster()),
        Event::ExpertiseUpdated { agent_id: AgentId(1), expertise: vec![expertise("pix", 2)] },
        queued_event(ticket("7", &["pix"])),
        queued_event(ticket("8", &[])),
        activated_event("8"),
        assignment_event("asg-1", "7", 1, &["pix"]),
    ]
}

#[test]
fn each_event_applied_twice_matches_once() {
    let mut once = MaterializedState::default();
    let mut twice = MaterializedState::default();
    for event in events() {
        once.apply_event(&event);
        twice.apply_event(&event);
        twice.apply_event(&event);
        assert_eq!(once, twice, "diverged after {}", event.name());
    }
}

#[test]
fn duplicate_assignment_is_not_recounted() {
    let mut state = MaterializedState::default();
    for event in events() {
        state.apply_event(&event);
    }
    let snapshot = state.clone();

    state.apply_event(&assignment_event("asg-1", "7", 1, &["pix"]));
    state.apply_event(&assignment_event("asg-2", "7", 2, &["pix"]));

    assert_eq!(state, snapshot);
}
