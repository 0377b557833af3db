// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Support agents, their declared expertise, and roster ingestion.
//!
//! An [`Agent`] arrives from the external roster source. Records are
//! validated at ingestion time (capacity, expertise names) so that scoring
//! never has to second-guess them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

/// Numeric identity of an agent in the external ticketing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl AgentId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Discrete knowledge level for one system.
///
/// Serialized as its numeric weight (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnowledgeLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl KnowledgeLevel {
    pub const ALL: [KnowledgeLevel; 3] =
        [KnowledgeLevel::Basic, KnowledgeLevel::Intermediate, KnowledgeLevel::Advanced];

    /// Numeric weight used by the scoring formulas.
    pub fn weight(self) -> u8 {
        match self {
            KnowledgeLevel::Basic => 1,
            KnowledgeLevel::Intermediate => 2,
            KnowledgeLevel::Advanced => 3,
        }
    }

    pub fn from_weight(weight: u8) -> Option<Self> {
        match weight {
            1 => Some(KnowledgeLevel::Basic),
            2 => Some(KnowledgeLevel::Intermediate),
            3 => Some(KnowledgeLevel::Advanced),
            _ => None,
        }
    }

    /// Parse a level from either its weight or its name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "basic" => Some(KnowledgeLevel::Basic),
            "2" | "intermediate" => Some(KnowledgeLevel::Intermediate),
            "3" | "advanced" => Some(KnowledgeLevel::Advanced),
            _ => None,
        }
    }
}

crate::simple_display! {
    KnowledgeLevel {
        Basic => "basic",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

impl Serialize for KnowledgeLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.weight())
    }
}

impl<'de> Deserialize<'de> for KnowledgeLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let weight = u8::deserialize(deserializer)?;
        KnowledgeLevel::from_weight(weight).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Unsigned(u64::from(weight)),
                &"a knowledge level between 1 and 3",
            )
        })
    }
}

/// One declared (system, level) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expertise {
    pub system_name: String,
    pub level: KnowledgeLevel,
}

impl Expertise {
    pub fn new(system_name: impl Into<String>, level: KnowledgeLevel) -> Self {
        Self { system_name: system_name.into().trim().to_string(), level }
    }

    /// Case-insensitive comparison against a system name.
    pub fn is_for(&self, system_name: &str) -> bool {
        self.key() == fold(system_name)
    }

    /// Normalized name used for case-insensitive comparisons.
    pub fn key(&self) -> String {
        fold(&self.system_name)
    }
}

/// Trim and lower-case a system name or tag for comparison.
pub fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validation failures raised while ingesting or editing agent records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("agent {0}: max capacity must be greater than zero")]
    InvalidCapacity(AgentId),
    #[error("agent {0}: expertise system name must not be blank")]
    BlankSystemName(AgentId),
    #[error("agent {agent}: expertise `{system}` is declared more than once")]
    DuplicateExpertise { agent: AgentId, system: String },
}

/// A support agent as seen by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    /// Declared capacity. Zero is rejected when the record is deserialized.
    pub max_capacity: NonZeroU32,
    /// May exceed `max_capacity`; over-allocation is signaled, not blocked.
    #[serde(default)]
    pub current_workload: u32,
    #[serde(default)]
    pub expertise: Vec<Expertise>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
}

fn default_active() -> bool {
    true
}

impl Agent {
    /// Create an active agent with no workload and no expertise.
    pub fn new(
        id: impl Into<AgentId>,
        name: impl Into<String>,
        email: impl Into<String>,
        max_capacity: u32,
    ) -> Result<Self, AgentError> {
        let id = id.into();
        let max_capacity = NonZeroU32::new(max_capacity).ok_or(AgentError::InvalidCapacity(id))?;
        Ok(Self {
            id,
            name: name.into(),
            email: email.into(),
            max_capacity,
            current_workload: 0,
            expertise: Vec::new(),
            is_active: true,
            avatar_url: None,
            group_ids: Vec::new(),
        })
    }

    /// Check the expertise invariants: non-blank names, unique case-insensitively.
    pub fn validate(&self) -> Result<(), AgentError> {
        let mut seen: Vec<String> = Vec::with_capacity(self.expertise.len());
        for exp in &self.expertise {
            let key = exp.key();
            if key.is_empty() {
                return Err(AgentError::BlankSystemName(self.id));
            }
            if seen.contains(&key) {
                return Err(AgentError::DuplicateExpertise {
                    agent: self.id,
                    system: exp.system_name.clone(),
                });
            }
            seen.push(key);
        }
        Ok(())
    }

    pub fn expertise_for(&self, system_name: &str) -> Option<&Expertise> {
        self.expertise.iter().find(|e| e.is_for(system_name))
    }

    /// Add a system or change the level of an existing one (case-insensitive).
    pub fn upsert_expertise(
        &mut self,
        system_name: &str,
        level: KnowledgeLevel,
    ) -> Result<(), AgentError> {
        let name = system_name.trim();
        if name.is_empty() {
            return Err(AgentError::BlankSystemName(self.id));
        }
        match self.expertise.iter_mut().find(|e| e.is_for(name)) {
            Some(existing) => existing.level = level,
            None => self.expertise.push(Expertise::new(name, level)),
        }
        Ok(())
    }

    /// Remove a system by name. Returns whether anything was removed.
    pub fn remove_expertise(&mut self, system_name: &str) -> bool {
        let before = self.expertise.len();
        self.expertise.retain(|e| !e.is_for(system_name));
        self.expertise.len() != before
    }

    pub fn in_any_group(&self, groups: &[String]) -> bool {
        self.group_ids.iter().any(|g| groups.contains(g))
    }
}

/// Agent record as delivered by the external roster source.
///
/// Capacity may be missing; [`RemoteAgent::into_agent`] fills it from the
/// configured default. Workload and expertise are not known remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAgent {
    pub id: AgentId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub max_capacity: Option<u32>,
    #[serde(default)]
    pub current_workload: u32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
}

impl RemoteAgent {
    pub fn into_agent(self, default_max_capacity: u32) -> Result<Agent, AgentError> {
        let capacity = self.max_capacity.unwrap_or(default_max_capacity);
        let mut agent = Agent::new(self.id, self.name, self.email, capacity)?;
        agent.current_workload = self.current_workload;
        agent.is_active = self.active;
        agent.avatar_url = self.avatar_url;
        agent.group_ids = self.group_ids;
        Ok(agent)
    }
}

/// Merge a freshly fetched roster with the locally known one.
///
/// Remote data wins for every field except expertise, which is only edited
/// locally. An empty remote roster keeps the local roster as-is.
pub fn merge_roster(remote: Vec<Agent>, local: &[Agent]) -> Vec<Agent> {
    if remote.is_empty() {
        return local.to_vec();
    }
    remote
        .into_iter()
        .map(|mut agent| {
            if let Some(known) = local.iter().find(|l| l.id == agent.id) {
                agent.expertise = known.expertise.clone();
            }
            agent
        })
        .collect()
}

crate::builder! {
    pub struct AgentBuilder => Agent {
        into {
            id: AgentId = 1u64,
            name: String = "Test Agent",
            email: String = "agent@example.com",
        }
        set {
            max_capacity: NonZeroU32 = crate::test_support::capacity(8),
            current_workload: u32 = 0,
            expertise: Vec<Expertise> = Vec::new(),
            is_active: bool = true,
            avatar_url: Option<String> = None,
            group_ids: Vec<String> = Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
