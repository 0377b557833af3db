// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

mod assignments;
mod roster;
mod tickets;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use triage_core::{
    Agent, AgentId, AssignmentLog, Event, OutcomeMemory, Ticket, TicketId,
};

/// Everything the triage desk knows, derived from events.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterializedState {
    /// Roster in sync order. Order is the ranking tie-break.
    #[serde(default)]
    pub agents: Vec<Agent>,
    /// Tickets awaiting assignment, in arrival order.
    #[serde(default)]
    pub pending: IndexMap<TicketId, Ticket>,
    /// Ticket designated by the operator, if any.
    #[serde(default)]
    pub active_ticket: Option<TicketId>,
    #[serde(default)]
    pub memory: OutcomeMemory,
    #[serde(default)]
    pub log: AssignmentLog,
}

impl MaterializedState {
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.pending.get(id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    /// Whether the log still holds a confirmed assignment for ticket `id`.
    pub fn was_assigned(&self, id: &str) -> bool {
        self.log.iter().any(|entry| entry.ticket_id.as_str() == id)
    }

    /// The designated ticket while it is still pending, else the oldest
    /// pending ticket.
    pub fn active_ticket(&self) -> Option<&Ticket> {
        self.active_ticket
            .as_ref()
            .and_then(|id| self.pending.get(id))
            .or_else(|| self.pending.values().next())
    }

    /// Apply an event to derive state changes.
    ///
    /// # Idempotency Requirement
    ///
    /// **All event handlers MUST be idempotent.** Events are applied once
    /// when executed and may be applied again when the journal is replayed
    /// on top of a snapshot that already contains them.
    ///
    /// - Use assignment (`=`) instead of mutation where possible
    /// - Guard increments with a state transition (an assignment only
    ///   counts while its ticket is still pending)
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::RosterSynced { .. } | Event::ExpertiseUpdated { .. } => {
                roster::apply(self, event)
            }

            Event::TicketQueued { .. } | Event::TicketActivated { .. } => {
                tickets::apply(self, event)
            }

            Event::AssignmentConfirmed { .. } => assignments::apply(self, event),

            Event::Custom => {}
        }
    }
}

#[cfg(test)]
#[path = "../state_tests/mod.rs"]
mod tests;
