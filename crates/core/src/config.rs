// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoring configuration handed to the ranker and the assignment planner.

use serde::{Deserialize, Serialize};

/// Default percent of capacity above which an agent is flagged overloaded.
pub const DEFAULT_OVERLOAD_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Custom field whose value names the ticket's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_field_key: Option<String>,
    /// Presentation only; never part of the score.
    #[serde(default = "default_overload_threshold")]
    pub overload_threshold: u32,
    /// Only affects how confirmed assignments are classified in the log.
    #[serde(default)]
    pub autopilot_enabled: bool,
}

fn default_overload_threshold() -> u32 {
    DEFAULT_OVERLOAD_THRESHOLD
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            declared_field_key: None,
            overload_threshold: DEFAULT_OVERLOAD_THRESHOLD,
            autopilot_enabled: false,
        }
    }
}

impl ScoringConfig {
    crate::setters! {
        set { overload_threshold: u32, autopilot_enabled: bool }
        option { declared_field_key: String }
    }
}
