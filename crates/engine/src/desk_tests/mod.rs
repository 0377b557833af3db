// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod assign;
mod autopilot;
mod persistence;
mod queue;
mod roster;

use super::*;
use triage_core::test_support::expertise;
use triage_core::{FakeClock, KnowledgeLevel, RemoteAgent, TicketPriority};

pub(super) fn remote(id: u64, name: &str) -> RemoteAgent {
    RemoteAgent {
        id: AgentId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        max_capacity: Some(8),
        current_workload: 0,
        active: true,
        avatar_url: None,
        group_ids: Vec::new(),
    }
}

/// Ana (idle) and Bruno (half loaded), no expertise.
pub(super) fn desk_with(settings: Settings) -> Desk<FakeClock> {
    let desk = Desk::in_memory(settings, FakeClock::new());
    let mut bruno = remote(2, "Bruno");
    bruno.current_workload = 4;
    desk.sync_agents(vec![remote(1, "Ana"), bruno]).unwrap();
    desk
}

pub(super) fn desk() -> Desk<FakeClock> {
    desk_with(Settings::default())
}

pub(super) fn ticket(id: &str) -> Ticket {
    Ticket::builder().id(id).build()
}

#[test]
fn in_memory_desk_starts_empty() {
    let desk = Desk::in_memory(Settings::default(), FakeClock::new());
    assert!(desk.agents().is_empty());
    assert!(desk.pending().is_empty());
    assert!(desk.active_ticket().is_none());
    assert!(desk.log(10).is_empty());
    assert!(desk.memory().is_empty());
    assert_eq!(desk.checkpoint().unwrap(), None);
}

#[test]
fn with_state_reads_under_lock() {
    let desk = desk();
    assert_eq!(desk.with_state(|s| s.agents.len()), 2);
}
