// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events that mutate the triage state.
//!
//! State is never edited directly: every change is an event, journaled and
//! then applied. Replaying the journal from zero rebuilds the roster, the
//! pending set, outcome memory and the assignment log.

use crate::agent::{Agent, AgentId, Expertise};
use crate::outcome::AssignmentLogEntry;
use crate::ticket::{Ticket, TicketId};
use serde::{Deserialize, Serialize};

/// Serializes with `{"type": "scope:name", ...fields}` format.
/// Unknown type tags deserialize to `Custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Replace the roster with an already merged and validated snapshot.
    #[serde(rename = "roster:synced")]
    RosterSynced { agents: Vec<Agent> },

    /// Replace one agent's expertise list.
    #[serde(rename = "agent:expertise")]
    ExpertiseUpdated { agent_id: AgentId, expertise: Vec<Expertise> },

    #[serde(rename = "ticket:queued")]
    TicketQueued { ticket: Ticket },

    /// Designate the ticket recommendations are computed for.
    #[serde(rename = "ticket:activated")]
    TicketActivated { ticket_id: TicketId },

    /// A recommendation was confirmed. `tags` are the outcome-memory keys.
    #[serde(rename = "assignment:confirmed")]
    AssignmentConfirmed { entry: AssignmentLogEntry, tags: Vec<String> },

    #[serde(other)]
    Custom,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::RosterSynced { .. } => "roster:synced",
            Event::ExpertiseUpdated { .. } => "agent:expertise",
            Event::TicketQueued { .. } => "ticket:queued",
            Event::TicketActivated { .. } => "ticket:activated",
            Event::AssignmentConfirmed { .. } => "assignment:confirmed",
            Event::Custom => "custom",
        }
    }

    /// One-line summary for logs.
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::RosterSynced { agents } => format!("{t} agents={}", agents.len()),
            Event::ExpertiseUpdated { agent_id, expertise } => {
                format!("{t} agent={agent_id} systems={}", expertise.len())
            }
            Event::TicketQueued { ticket } => {
                format!("{t} ticket={} priority={}", ticket.id, ticket.priority)
            }
            Event::TicketActivated { ticket_id } => format!("{t} ticket={ticket_id}"),
            Event::AssignmentConfirmed { entry, tags } => format!(
                "{t} ticket={} agent={} type={} score={} tags={}",
                entry.ticket_id,
                entry.agent_id,
                entry.kind,
                entry.score,
                tags.join(",")
            ),
            Event::Custom => t.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
