// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log of triage events.
//!
//! One JSON object per line: `{"seq": N, "event": {...}}`. Sequence numbers
//! start at 1 and increase by one per append. A line that fails to parse
//! (a torn write, binary garbage) ends the readable log.

use crate::snapshot::rotate_bak_path;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use triage_core::Event;

#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalEntry {
    pub seq: u64,
    pub event: Event,
}

pub struct Wal {
    path: PathBuf,
    file: File,
    buffer: Vec<u8>,
    write_seq: u64,
    /// Last sequence known to be on disk.
    flushed_seq: u64,
    processed_seq: u64,
}

impl Wal {
    /// Open or create the log at `path`.
    ///
    /// `processed_seq` is the last sequence already reflected in the caller's
    /// state (usually the snapshot's). If the file holds a corrupt tail, the
    /// whole file is moved to a `.bak` and the valid prefix is rewritten.
    pub fn open(path: &Path, processed_seq: u64) -> Result<Self, WalError> {
        let (entries, corrupt) = if path.exists() { read_entries(path)? } else { (Vec::new(), false) };

        if corrupt {
            let bak = rotate_bak_path(path);
            tracing::warn!(
                path = %path.display(),
                bak = %bak.display(),
                valid_entries = entries.len(),
                "corrupt WAL tail, keeping valid prefix"
            );
            fs::rename(path, &bak)?;
            write_entries(path, &entries)?;
        }

        // Never reuse sequence numbers a snapshot already covers
        let write_seq = entries.last().map_or(0, |e| e.seq).max(processed_seq);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            buffer: Vec::new(),
            write_seq,
            flushed_seq: write_seq,
            processed_seq,
        })
    }

    /// Buffer an event and return its sequence number. Nothing reaches disk
    /// until [`Wal::flush`].
    pub fn append(&mut self, event: &Event) -> Result<u64, WalError> {
        let seq = self.write_seq + 1;
        let entry = WalEntry { seq, event: event.clone() };
        let mark = self.buffer.len();
        if let Err(err) = serde_json::to_writer(&mut self.buffer, &entry) {
            self.buffer.truncate(mark);
            return Err(err.into());
        }
        self.buffer.push(b'\n');
        self.write_seq = seq;
        Ok(seq)
    }

    /// Write buffered entries and sync them.
    ///
    /// On failure every unflushed entry is discarded and `write_seq` falls
    /// back to the last flushed sequence.
    pub fn flush(&mut self) -> Result<(), WalError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let len = self.file.metadata()?.len();
        if let Err(err) = self.write_buffer() {
            self.discard_unflushed(len);
            return Err(err.into());
        }
        self.buffer.clear();
        self.flushed_seq = self.write_seq;
        Ok(())
    }

    fn write_buffer(&mut self) -> std::io::Result<()> {
        self.file.write_all(&self.buffer)?;
        self.file.sync_data()
    }

    /// Drop buffered entries and cut the file back to `len` bytes, removing
    /// any partially written line.
    fn discard_unflushed(&mut self, len: u64) {
        if let Err(err) = self.file.set_len(len) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to trim partial WAL write");
        }
        tracing::warn!(
            discarded = self.write_seq - self.flushed_seq,
            seq = self.flushed_seq,
            "WAL flush failed, unflushed entries discarded"
        );
        self.buffer.clear();
        self.write_seq = self.flushed_seq;
    }

    pub fn write_seq(&self) -> u64 {
        self.write_seq
    }

    pub fn processed_seq(&self) -> u64 {
        self.processed_seq
    }

    pub fn mark_processed(&mut self, seq: u64) {
        self.processed_seq = self.processed_seq.max(seq);
    }

    /// Flushed entries with `seq > after`, stopping at the first unreadable line.
    pub fn entries_after(&self, after: u64) -> Result<Vec<WalEntry>, WalError> {
        let (entries, _) = read_entries(&self.path)?;
        Ok(entries.into_iter().filter(|e| e.seq > after).collect())
    }

    /// Drop flushed entries with `seq < before`, e.g. once a snapshot covers them.
    pub fn truncate_before(&mut self, before: u64) -> Result<(), WalError> {
        self.flush()?;
        let (entries, _) = read_entries(&self.path)?;
        let kept: Vec<_> = entries.into_iter().filter(|e| e.seq >= before).collect();
        write_entries(&self.path, &kept)?;
        self.file = OpenOptions::new().append(true).open(&self.path)?;
        Ok(())
    }
}

/// Parse lines until the first one that is not a valid entry.
fn read_entries(path: &Path) -> Result<(Vec<WalEntry>, bool), WalError> {
    let bytes = fs::read(path)?;
    let mut entries = Vec::new();
    for line in bytes.split(|b| *b == b'\n') {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<WalEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(_) => return Ok((entries, true)),
        }
    }
    Ok((entries, false))
}

/// Replace the file at `path` with `entries`, via a temp file and rename.
fn write_entries(path: &Path, entries: &[WalEntry]) -> Result<(), WalError> {
    let tmp = path.with_extension("tmp");
    let mut buf = Vec::new();
    for entry in entries {
        serde_json::to_writer(&mut buf, entry)?;
        buf.push(b'\n');
    }
    let mut file = File::create(&tmp)?;
    file.write_all(&buf)?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
