// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment event handler.

use triage_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    let Event::AssignmentConfirmed { entry, tags } = event else {
        return;
    };

    // Idempotency: the ticket leaves the pending set exactly once
    if state.pending.shift_remove(&entry.ticket_id).is_none() {
        return;
    }
    if state.active_ticket.as_ref() == Some(&entry.ticket_id) {
        state.active_ticket = None;
    }

    if let Some(agent) = state.agents.iter_mut().find(|a| a.id == entry.agent_id) {
        agent.current_workload = agent.current_workload.saturating_add(1);
    }
    for tag in tags {
        state.memory.record_success(tag, entry.agent_id);
    }
    state.log.push(entry.clone());
}
