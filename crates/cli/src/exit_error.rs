// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use triage_engine::DeskError;

/// Generic failure.
pub const EXIT_FAILURE: i32 = 1;
/// The recommendation went stale; re-rank and retry.
pub const EXIT_STALE: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Process exit code for an error returned by a command.
///
/// Explicit [`ExitError`]s keep their code; a stale recommendation anywhere in
/// the chain maps to [`EXIT_STALE`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(exit) = err.downcast_ref::<ExitError>() {
        return exit.code;
    }
    let stale = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<DeskError>(), Some(DeskError::Stale(_))));
    if stale {
        EXIT_STALE
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
