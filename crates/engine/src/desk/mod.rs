// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The triage desk: single-writer handle over the shared roster and ledger.
//!
//! Every mutation takes the state lock, journals its event, then applies it.
//! Holding the lock across validate, journal and apply is what serializes
//! concurrent confirmations against the same agent.

mod assign;
mod queue;
mod roster;

use crate::settings::Settings;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use triage_core::{
    Agent, AgentError, AgentId, AssignmentLogEntry, Clock, Event, OutcomeMemory,
    StaleRecommendation, Ticket, TicketId,
};
use triage_storage::{MaterializedState, Snapshot, SnapshotError, Wal, WalError};

pub const WAL_FILE: &str = "triage.wal";
pub const SNAPSHOT_FILE: &str = "snapshot.json";

/// Journal length past which opening the desk compacts it into a snapshot.
const COMPACT_AFTER: usize = 1_000;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error("stale recommendation: {0}")]
    Stale(#[from] StaleRecommendation),
    #[error("unknown agent {0}")]
    UnknownAgent(AgentId),
    #[error("ticket {0} is not pending")]
    UnknownTicket(TicketId),
    #[error("ticket id must not be blank")]
    BlankTicketId,
    #[error("autopilot is disabled in settings")]
    AutopilotDisabled,
    #[error("journal error: {0}")]
    Wal(#[from] WalError),
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

struct Journal {
    wal: Wal,
    snapshot_path: std::path::PathBuf,
}

pub struct Desk<C: Clock> {
    state: Arc<Mutex<MaterializedState>>,
    journal: Option<Mutex<Journal>>,
    settings: Settings,
    clock: C,
}

impl<C: Clock> Desk<C> {
    /// A desk whose state lives only as long as the value.
    pub fn in_memory(settings: Settings, clock: C) -> Self {
        Self { state: Arc::default(), journal: None, settings, clock }
    }

    /// Open the desk persisted under `dir`: load the snapshot, then replay
    /// the journal entries after it.
    pub fn open(dir: &Path, settings: Settings, clock: C) -> Result<Self, DeskError> {
        std::fs::create_dir_all(dir)?;
        let snapshot_path = dir.join(SNAPSHOT_FILE);
        let (seq, mut state) = match Snapshot::load(&snapshot_path)? {
            Some(snapshot) => (snapshot.seq, snapshot.state),
            None => (0, MaterializedState::default()),
        };

        let mut wal = Wal::open(&dir.join(WAL_FILE), seq)?;
        let entries = wal.entries_after(seq)?;
        for entry in &entries {
            state.apply_event(&entry.event);
            wal.mark_processed(entry.seq);
        }
        tracing::info!(
            dir = %dir.display(),
            snapshot_seq = seq,
            replayed = entries.len(),
            agents = state.agents.len(),
            pending = state.pending.len(),
            "desk opened"
        );

        let desk = Self {
            state: Arc::new(Mutex::new(state)),
            journal: Some(Mutex::new(Journal { wal, snapshot_path })),
            settings,
            clock,
        };
        if entries.len() > COMPACT_AFTER {
            desk.checkpoint()?;
        }
        Ok(desk)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Read the state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&MaterializedState) -> R) -> R {
        f(&self.state.lock())
    }

    pub fn agents(&self) -> Vec<Agent> {
        self.state.lock().agents.clone()
    }

    pub fn agent(&self, id: AgentId) -> Option<Agent> {
        self.state.lock().agent(id).cloned()
    }

    /// Pending tickets in arrival order.
    pub fn pending(&self) -> Vec<Ticket> {
        self.state.lock().pending.values().cloned().collect()
    }

    pub fn active_ticket(&self) -> Option<Ticket> {
        self.state.lock().active_ticket().cloned()
    }

    /// Newest first, at most `limit` entries.
    pub fn log(&self, limit: usize) -> Vec<AssignmentLogEntry> {
        self.state.lock().log.iter().take(limit).cloned().collect()
    }

    pub fn memory(&self) -> OutcomeMemory {
        self.state.lock().memory.clone()
    }

    /// Write a snapshot of the current state and drop the journal it covers.
    ///
    /// Returns the covered sequence, or `None` for an in-memory desk.
    pub fn checkpoint(&self) -> Result<Option<u64>, DeskError> {
        let Some(journal) = &self.journal else {
            return Ok(None);
        };
        let state = self.state.lock();
        let mut journal = journal.lock();
        journal.wal.flush()?;
        let seq = journal.wal.write_seq();
        let created_at =
            DateTime::<Utc>::from_timestamp_millis(self.clock.epoch_ms() as i64).unwrap_or_default();
        Snapshot::new(seq, state.clone(), created_at).save(&journal.snapshot_path)?;
        journal.wal.truncate_before(seq + 1)?;
        tracing::info!(seq, "checkpoint written");
        Ok(Some(seq))
    }

    /// Journal `event`, then apply it. Callers hold the state lock.
    fn commit(&self, state: &mut MaterializedState, event: Event) -> Result<(), DeskError> {
        if let Some(journal) = &self.journal {
            let mut journal = journal.lock();
            let seq = journal.wal.append(&event)?;
            journal.wal.flush()?;
            journal.wal.mark_processed(seq);
        }
        tracing::debug!(event = %event.log_summary(), "commit");
        state.apply_event(&event);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../desk_tests/mod.rs"]
mod tests;
