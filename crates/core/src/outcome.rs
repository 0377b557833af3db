// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome memory and the assignment log.

use crate::agent::AgentId;
use crate::ticket::TicketId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries kept in the assignment log; older ones are evicted.
pub const LOG_CAPACITY: usize = 100;

/// Tag credited when a confirmed ticket carries no tags.
pub const GENERAL_TAG: &str = "general";

crate::define_id! {
    /// Unique identifier for an assignment log entry.
    pub struct AssignmentId("asg-");
}

/// Success tally for one (tag, agent) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub tag: String,
    pub agent_id: AgentId,
    pub success_count: u64,
}

/// Durable (tag, agent) success counters.
///
/// A trailing signal for tuning; ranking does not read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeMemory {
    records: Vec<OutcomeRecord>,
}

impl OutcomeMemory {
    /// Increment the counter for `(tag, agent_id)`, creating it at 1.
    pub fn record_success(&mut self, tag: &str, agent_id: AgentId) -> &OutcomeRecord {
        let index = match self.records.iter().position(|r| r.tag == tag && r.agent_id == agent_id)
        {
            Some(index) => {
                self.records[index].success_count += 1;
                index
            }
            None => {
                self.records.push(OutcomeRecord {
                    tag: tag.to_string(),
                    agent_id,
                    success_count: 1,
                });
                self.records.len() - 1
            }
        };
        &self.records[index]
    }

    pub fn success_count(&self, tag: &str, agent_id: AgentId) -> u64 {
        self.get(tag, agent_id).map_or(0, |r| r.success_count)
    }

    pub fn get(&self, tag: &str, agent_id: AgentId) -> Option<&OutcomeRecord> {
        self.records.iter().find(|r| r.tag == tag && r.agent_id == agent_id)
    }

    /// Records for one tag, most successful first.
    pub fn for_tag(&self, tag: &str) -> Vec<&OutcomeRecord> {
        let mut records: Vec<_> = self.records.iter().filter(|r| r.tag == tag).collect();
        records.sort_by(|a, b| b.success_count.cmp(&a.success_count));
        records
    }

    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// How an assignment was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Autopilot,
    Manual,
}

crate::simple_display! {
    AssignmentKind {
        Autopilot => "autopilot",
        Manual => "manual",
    }
}

/// One confirmed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentLogEntry {
    pub id: AssignmentId,
    pub ticket_id: TicketId,
    pub agent_id: AgentId,
    pub agent_name: String,
    pub timestamp_ms: u64,
    pub reason: String,
    #[serde(rename = "type")]
    pub kind: AssignmentKind,
    pub score: i32,
}

/// Append-only log, newest first, capped at [`LOG_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentLog {
    entries: VecDeque<AssignmentLogEntry>,
}

impl AssignmentLog {
    pub fn push(&mut self, entry: AssignmentLogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(LOG_CAPACITY);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AssignmentLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&AssignmentLogEntry> {
        self.entries.front()
    }

    pub fn contains(&self, id: &AssignmentId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
