// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending-ticket event handlers.

use triage_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        // Re-queueing a pending ticket refreshes its content in place
        Event::TicketQueued { ticket } => {
            state.pending.insert(ticket.id.clone(), ticket.clone());
        }

        Event::TicketActivated { ticket_id } => {
            if state.pending.contains_key(ticket_id) {
                state.active_ticket = Some(ticket_id.clone());
            }
        }

        _ => {}
    }
}
