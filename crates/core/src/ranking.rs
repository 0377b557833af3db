// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recommendation ranker.
//!
//! Scores every active agent as availability plus technical match and picks
//! the highest. Ties keep input order, so the earliest agent in the roster
//! wins. Ranking is pure and can be repeated freely.

use crate::agent::Agent;
use crate::config::ScoringConfig;
use crate::matching::{self, Evidence};
use crate::occupancy::Occupancy;
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A scored candidate, carrying its full evidence for explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub agent: Agent,
    /// Load contribution plus technical score. Nominally 0..=100; negative
    /// when the agent is far over capacity.
    pub score: f64,
    pub occupancy_rate: f64,
    pub load_score: f64,
    pub tech_score: f64,
    pub evidence: Vec<Evidence>,
}

impl Recommendation {
    /// Score rounded to a whole number, as recorded in the assignment log.
    pub fn rounded_score(&self) -> i32 {
        self.score.round() as i32
    }

    pub fn is_overloaded(&self, threshold_percent: u32) -> bool {
        Occupancy { rate: self.occupancy_rate }.is_overloaded(threshold_percent)
    }
}

/// Score a single agent for a ticket, regardless of its active flag.
pub fn score_candidate(ticket: &Ticket, agent: &Agent, config: &ScoringConfig) -> Recommendation {
    let occupancy = Occupancy::of(agent);
    let technical = matching::evaluate(ticket, agent, config);
    let load_score = occupancy.contribution();
    Recommendation {
        agent: agent.clone(),
        score: load_score + technical.score,
        occupancy_rate: occupancy.rate,
        load_score,
        tech_score: technical.score,
        evidence: technical.evidence,
    }
}

/// Score every active agent, best first. Equal scores keep roster order.
pub fn rank_all(
    ticket: Option<&Ticket>,
    agents: &[Agent],
    config: &ScoringConfig,
) -> Vec<Recommendation> {
    let Some(ticket) = ticket else {
        return Vec::new();
    };
    let mut candidates: Vec<Recommendation> = agents
        .iter()
        .filter(|a| a.is_active)
        .map(|a| score_candidate(ticket, a, config))
        .collect();
    // `sort_by` is stable: ties stay in input order.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}

/// The single best agent for `ticket`, or `None` when there is no ticket or
/// no active agent.
pub fn rank(
    ticket: Option<&Ticket>,
    agents: &[Agent],
    config: &ScoringConfig,
) -> Option<Recommendation> {
    rank_all(ticket, agents, config).into_iter().next()
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
