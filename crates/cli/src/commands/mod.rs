// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod agents;
pub mod assign;
pub mod expertise;
pub mod history;
pub mod tickets;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use triage_core::SystemClock;
use triage_engine::{Desk, Settings};

use crate::env;

/// Open the persisted desk with settings from the config file.
pub fn open_desk() -> Result<Desk<SystemClock>> {
    let config = env::config_path()?;
    let settings = Settings::load(&config)?;
    let dir = env::state_dir()?;
    let desk = Desk::open(&dir, settings, SystemClock)
        .with_context(|| format!("opening state in {}", dir.display()))?;
    Ok(desk)
}

/// Read a JSON document from a file, or from stdin when `source` is `-`.
pub fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(Path::new(source)).with_context(|| format!("reading {source}"))
}

/// Parse either a single JSON object or an array of them.
pub fn parse_one_or_many<T: serde::de::DeserializeOwned>(input: &str) -> Result<Vec<T>> {
    let value: serde_json::Value = serde_json::from_str(input).context("input is not valid JSON")?;
    let items = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(items)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
