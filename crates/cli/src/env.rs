// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use crate::exit_error::ExitError;

/// Filter directive used when `TRIAGE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolve state directory: TRIAGE_STATE_DIR > XDG_STATE_HOME/triage > ~/.local/state/triage
pub fn state_dir() -> Result<PathBuf, ExitError> {
    if let Some(dir) = non_empty("TRIAGE_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("triage"));
    }
    let home = dirs::home_dir().ok_or_else(|| {
        ExitError::new(1, "cannot locate a state directory: set TRIAGE_STATE_DIR or HOME")
    })?;
    Ok(home.join(".local/state/triage"))
}

/// Settings file: TRIAGE_CONFIG, else `config.toml` in the state directory.
pub fn config_path() -> Result<PathBuf, ExitError> {
    if let Some(path) = non_empty("TRIAGE_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    Ok(state_dir()?.join("config.toml"))
}

/// Tracing filter directives from TRIAGE_LOG.
pub fn log_filter() -> String {
    non_empty("TRIAGE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
