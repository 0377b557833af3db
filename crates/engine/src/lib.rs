// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! triage-engine: the desk that owns triage state and serializes its mutations.

mod desk;
mod settings;

pub use desk::{Desk, DeskError, SNAPSHOT_FILE, WAL_FILE};
pub use settings::{Settings, SettingsError, DEFAULT_DECLARED_FIELD_KEY, DEFAULT_MAX_CAPACITY};
