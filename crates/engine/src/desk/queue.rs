// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending-ticket intake.

use super::{Desk, DeskError};
use triage_core::{Clock, Event, Ticket, TicketId};

impl<C: Clock> Desk<C> {
    /// Add a ticket to the pending set, or refresh it if already pending.
    pub fn enqueue(&self, mut ticket: Ticket) -> Result<(), DeskError> {
        let id = ticket.id.as_str().trim().to_string();
        if id.is_empty() {
            return Err(DeskError::BlankTicketId);
        }
        ticket.id = TicketId::new(id);
        if ticket.created_at_ms.is_none() {
            ticket.created_at_ms = Some(self.clock.epoch_ms());
        }

        let mut state = self.state.lock();
        tracing::info!(ticket = %ticket.id, priority = %ticket.priority, "ticket queued");
        self.commit(&mut state, Event::TicketQueued { ticket })
    }

    /// Designate the ticket recommendations are computed for.
    pub fn activate(&self, ticket_id: &str) -> Result<(), DeskError> {
        let mut state = self.state.lock();
        let ticket_id = TicketId::new(ticket_id.trim());
        if !state.is_pending(ticket_id.as_str()) {
            return Err(DeskError::UnknownTicket(ticket_id));
        }
        tracing::info!(ticket = %ticket_id, "ticket activated");
        self.commit(&mut state, Event::TicketActivated { ticket_id })
    }
}
