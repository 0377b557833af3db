// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Team-wide view of one system's coverage.

use crate::agent::{Agent, KnowledgeLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInsight {
    pub system_name: String,
    /// Mean declared level, rounded to the nearest level.
    pub average_level: KnowledgeLevel,
    pub agent_count: usize,
}

/// Average level declared for `system_name` across `agents`.
///
/// `None` for names shorter than two characters or when nobody declares the
/// system. Names compare case-insensitively.
pub fn team_insight(agents: &[Agent], system_name: &str) -> Option<TeamInsight> {
    let name = system_name.trim();
    if name.chars().count() < 2 {
        return None;
    }
    let levels: Vec<u32> = agents
        .iter()
        .filter_map(|a| a.expertise_for(name))
        .map(|e| u32::from(e.level.weight()))
        .collect();
    if levels.is_empty() {
        return None;
    }
    let mean = levels.iter().sum::<u32>() as f64 / levels.len() as f64;
    let average_level =
        KnowledgeLevel::from_weight(mean.round() as u8).unwrap_or(KnowledgeLevel::Basic);
    Some(TeamInsight { system_name: name.to_string(), average_level, agent_count: levels.len() })
}

#[cfg(test)]
#[path = "insight_tests.rs"]
mod tests;
