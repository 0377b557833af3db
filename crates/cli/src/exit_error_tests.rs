// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use anyhow::Context;
use triage_core::{AgentId, StaleRecommendation, TicketId};

#[test]
fn explicit_exit_errors_keep_their_code() {
    let err = anyhow::Error::new(ExitError::new(2, "usage"));
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn stale_recommendations_get_their_own_code() {
    let err = anyhow::Error::new(DeskError::Stale(StaleRecommendation::AgentGone(AgentId(4))));
    assert_eq!(exit_code(&err), EXIT_STALE);
}

#[test]
fn stale_is_found_behind_context() {
    let result: Result<(), DeskError> =
        Err(DeskError::Stale(StaleRecommendation::AgentGone(AgentId(4))));
    let err = result.context("confirming ticket 9").unwrap_err();
    assert_eq!(exit_code(&err), EXIT_STALE);
}

#[test]
fn other_desk_errors_are_generic_failures() {
    let err = anyhow::Error::new(DeskError::UnknownTicket(TicketId::new("9")));
    assert_eq!(exit_code(&err), EXIT_FAILURE);
    assert_eq!(err.to_string(), "ticket 9 is not pending");
}
