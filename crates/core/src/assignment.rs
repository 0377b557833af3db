// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Planning a confirmed assignment.
//!
//! Confirming produces a single `assignment:confirmed` event. Applying that
//! event bumps the agent's workload by one, retires the ticket from the
//! pending set, prepends a log entry, and increments one outcome record per
//! ticket tag. The fan-out is intended: a ticket's success is credited to
//! every tag it carries.

use crate::agent::{fold, Agent, AgentId};
use crate::config::ScoringConfig;
use crate::matching::Evidence;
use crate::outcome::{AssignmentId, AssignmentKind, AssignmentLogEntry, OutcomeRecord, GENERAL_TAG};
use crate::ranking::Recommendation;
use crate::ticket::{Ticket, TicketId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason recorded when no expertise evidence backed the choice.
pub const AVAILABILITY_REASON: &str = "availability";

/// A recommendation that no longer matches the current state.
///
/// The caller should re-rank against fresh data and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaleRecommendation {
    #[error("agent {0} is no longer in the roster")]
    AgentGone(AgentId),
    #[error("ticket {0} is no longer pending")]
    TicketNotPending(TicketId),
}

/// What a confirmation changed, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// The agent after the workload increment.
    pub agent: Agent,
    pub entry: AssignmentLogEntry,
    /// One record per credited tag, after the increment.
    pub memory: Vec<OutcomeRecord>,
}

/// Join evidence as `"<source> (<system>)"` pairs.
pub fn reason(evidence: &[Evidence]) -> String {
    if evidence.is_empty() {
        return AVAILABILITY_REASON.to_string();
    }
    evidence.iter().map(Evidence::label).collect::<Vec<_>>().join(", ")
}

/// Tags credited in outcome memory: distinct non-blank folded tags in ticket
/// order, or [`GENERAL_TAG`] when there are none.
pub fn outcome_tags(ticket: &Ticket) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(ticket.tags.len());
    for tag in ticket.tags.iter().map(|t| fold(t)).filter(|t| !t.is_empty()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    if tags.is_empty() {
        tags.push(GENERAL_TAG.to_string());
    }
    tags
}

/// The log entry recording `recommendation` confirmed for `ticket`.
///
/// Paired with [`outcome_tags`] it forms an `assignment:confirmed` event.
pub fn log_entry(
    recommendation: &Recommendation,
    ticket: &Ticket,
    config: &ScoringConfig,
    id: AssignmentId,
    timestamp_ms: u64,
) -> AssignmentLogEntry {
    let kind =
        if config.autopilot_enabled { AssignmentKind::Autopilot } else { AssignmentKind::Manual };
    AssignmentLogEntry {
        id,
        ticket_id: ticket.id.clone(),
        agent_id: recommendation.agent.id,
        agent_name: recommendation.agent.name.clone(),
        timestamp_ms,
        reason: reason(&recommendation.evidence),
        kind,
        score: recommendation.rounded_score(),
    }
}

#[cfg(test)]
#[path = "assignment_tests.rs"]
mod tests;
