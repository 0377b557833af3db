// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desk settings loaded from `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use triage_core::{ScoringConfig, DEFAULT_OVERLOAD_THRESHOLD};

pub const DEFAULT_DECLARED_FIELD_KEY: &str = "system_field";
pub const DEFAULT_MAX_CAPACITY: u32 = 8;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("default_max_capacity must be at least 1")]
    ZeroCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Custom field naming the ticket's system. Empty disables declared-field
    /// matching.
    pub declared_field_key: String,
    /// Percent of capacity above which agents are flagged overloaded.
    pub overload_threshold: u32,
    pub autopilot_enabled: bool,
    /// Capacity for synced agents that do not report one.
    pub default_max_capacity: u32,
    /// Autopilot sweeps take High and Urgent tickets first.
    pub auto_assign_high_priority: bool,
    /// Roster sync keeps only agents in one of these groups. Empty keeps all.
    pub allowed_group_ids: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            declared_field_key: DEFAULT_DECLARED_FIELD_KEY.to_string(),
            overload_threshold: DEFAULT_OVERLOAD_THRESHOLD,
            autopilot_enabled: false,
            default_max_capacity: DEFAULT_MAX_CAPACITY,
            auto_assign_high_priority: true,
            allowed_group_ids: Vec::new(),
        }
    }
}

impl Settings {
    triage_core::setters! {
        into { declared_field_key: String }
        set {
            overload_threshold: u32,
            autopilot_enabled: bool,
            default_max_capacity: u32,
            auto_assign_high_priority: bool,
            allowed_group_ids: Vec<String>,
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(SettingsError::Io { path: path.to_path_buf(), source }),
        };
        let settings: Self = toml::from_str(&text)
            .map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.default_max_capacity == 0 {
            return Err(SettingsError::ZeroCapacity);
        }
        Ok(())
    }

    /// The subset the ranker and assignment planner read.
    pub fn scoring(&self) -> ScoringConfig {
        let key = self.declared_field_key.trim();
        ScoringConfig {
            declared_field_key: (!key.is_empty()).then(|| key.to_string()),
            overload_threshold: self.overload_threshold,
            autopilot_enabled: self.autopilot_enabled,
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
