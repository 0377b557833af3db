// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Occupancy model: how much of an agent's capacity is in use.

use crate::agent::Agent;
use serde::{Deserialize, Serialize};

/// Maximum availability bonus, earned by a fully idle agent.
pub const LOAD_WEIGHT: f64 = 30.0;

/// An agent's load fraction.
///
/// The contribution goes negative once workload exceeds capacity, which
/// penalizes over-allocation instead of flooring it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occupancy {
    pub rate: f64,
}

impl Occupancy {
    pub fn of(agent: &Agent) -> Self {
        Self { rate: f64::from(agent.current_workload) / f64::from(agent.max_capacity.get()) }
    }

    /// `(1 - rate) * LOAD_WEIGHT`
    pub fn contribution(self) -> f64 {
        (1.0 - self.rate) * LOAD_WEIGHT
    }

    pub fn percent(self) -> f64 {
        self.rate * 100.0
    }

    /// Presentation flag: occupancy strictly above `threshold_percent`.
    pub fn is_overloaded(self, threshold_percent: u32) -> bool {
        self.rate > f64::from(threshold_percent) / 100.0
    }
}

#[cfg(test)]
#[path = "occupancy_tests.rs"]
mod tests;
