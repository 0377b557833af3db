// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! triage-core: scoring, ranking and assignment planning for ticket triage.
//!
//! Everything here is pure: no I/O, no locks, no clocks read implicitly.
//! State lives in `triage-storage`; orchestration in `triage-engine`.

pub mod macros;

pub mod agent;
pub mod assignment;
pub mod clock;
pub mod config;
pub mod event;
pub mod id;
pub mod insight;
pub mod matching;
pub mod occupancy;
pub mod outcome;
pub mod ranking;
pub mod sla;
pub mod ticket;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use agent::{fold, merge_roster, Agent, AgentError, AgentId, Expertise, KnowledgeLevel, RemoteAgent};
#[cfg(any(test, feature = "test-support"))]
pub use agent::AgentBuilder;
pub use assignment::{
    log_entry, outcome_tags, reason, Assignment, StaleRecommendation, AVAILABILITY_REASON,
};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ScoringConfig, DEFAULT_OVERLOAD_THRESHOLD};
pub use event::Event;
pub use insight::{team_insight, TeamInsight};
pub use matching::{evaluate, Evidence, EvidenceSource, TechnicalMatch, TECH_SCORE_CEILING};
pub use occupancy::{Occupancy, LOAD_WEIGHT};
pub use outcome::{
    AssignmentId, AssignmentKind, AssignmentLog, AssignmentLogEntry, OutcomeMemory, OutcomeRecord,
    GENERAL_TAG, LOG_CAPACITY,
};
pub use ranking::{rank, rank_all, score_candidate, Recommendation};
pub use sla::{format_wait, wait_time, SlaBucket};
#[cfg(any(test, feature = "test-support"))]
pub use ticket::TicketBuilder;
pub use ticket::{Ticket, TicketId, TicketPriority};
