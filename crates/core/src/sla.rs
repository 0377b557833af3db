// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wait-time buckets for the pending queue.

use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ATTENTION_AFTER: Duration = Duration::from_secs(15 * 60);
const CRITICAL_AFTER: Duration = Duration::from_secs(40 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaBucket {
    /// Up to 15 minutes waiting.
    Normal,
    /// Up to 40 minutes waiting.
    Attention,
    Critical,
}

crate::simple_display! {
    SlaBucket {
        Normal => "normal",
        Attention => "attention",
        Critical => "critical",
    }
}

impl SlaBucket {
    pub fn classify(wait: Duration) -> Self {
        if wait <= ATTENTION_AFTER {
            SlaBucket::Normal
        } else if wait <= CRITICAL_AFTER {
            SlaBucket::Attention
        } else {
            SlaBucket::Critical
        }
    }

    /// Bucket for a ticket at `now_ms`; `None` when its arrival time is unknown.
    pub fn for_ticket(ticket: &Ticket, now_ms: u64) -> Option<Self> {
        wait_time(ticket, now_ms).map(Self::classify)
    }
}

/// How long a ticket has been waiting, if its arrival time is known.
pub fn wait_time(ticket: &Ticket, now_ms: u64) -> Option<Duration> {
    ticket.created_at_ms.map(|created| Duration::from_millis(now_ms.saturating_sub(created)))
}

/// `"42 min"` below an hour, `"2h 5m"` above.
pub fn format_wait(wait: Duration) -> String {
    let mins = wait.as_secs() / 60;
    if mins < 60 {
        return format!("{mins} min");
    }
    format!("{}h {}m", mins / 60, mins % 60)
}

#[cfg(test)]
#[path = "sla_tests.rs"]
mod tests;
