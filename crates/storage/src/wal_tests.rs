// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::tempdir;
use triage_core::TicketId;

fn test_event(ticket: &str) -> Event {
    Event::TicketActivated { ticket_id: TicketId::new(ticket) }
}

fn append_raw(path: &Path, bytes: &[u8]) {
    let mut f = OpenOptions::new().append(true).open(path).unwrap();
    f.write_all(bytes).unwrap();
}

fn seeded(path: &Path, count: usize) {
    let mut wal = Wal::open(path, 0).unwrap();
    for i in 1..=count {
        wal.append(&test_event(&i.to_string())).unwrap();
    }
    wal.flush().unwrap();
}

#[test]
fn open_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");

    let wal = Wal::open(&path, 0).unwrap();

    assert!(path.exists());
    assert_eq!(wal.write_seq(), 0);
    assert_eq!(wal.processed_seq(), 0);
}

#[test]
fn append_assigns_sequence_and_flush_writes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    let mut wal = Wal::open(&path, 0).unwrap();

    assert_eq!(wal.append(&test_event("1")).unwrap(), 1);
    assert_eq!(wal.append(&test_event("2")).unwrap(), 2);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);

    wal.flush().unwrap();

    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1], WalEntry { seq: 2, event: test_event("2") });
}

#[test]
fn reopen_continues_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 3);

    let mut wal = Wal::open(&path, 2).unwrap();
    assert_eq!(wal.write_seq(), 3);
    assert_eq!(wal.processed_seq(), 2);
    assert_eq!(wal.append(&test_event("4")).unwrap(), 4);
}

#[test]
fn open_behind_snapshot_continues_after_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 1);

    let mut wal = Wal::open(&path, 10).unwrap();

    assert_eq!(wal.write_seq(), 10);
    assert_eq!(wal.append(&test_event("2")).unwrap(), 11);
}

#[test]
fn entries_after_filters_by_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 3);
    let wal = Wal::open(&path, 0).unwrap();

    let seqs: Vec<_> = wal.entries_after(1).unwrap().iter().map(|e| e.seq).collect();

    assert_eq!(seqs, vec![2, 3]);
}

#[test]
fn mark_processed_never_moves_backwards() {
    let dir = tempdir().unwrap();
    let mut wal = Wal::open(&dir.path().join("test.wal"), 5).unwrap();

    wal.mark_processed(3);
    assert_eq!(wal.processed_seq(), 5);
    wal.mark_processed(7);
    assert_eq!(wal.processed_seq(), 7);
}

#[test]
fn truncate_before_drops_covered_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 3);
    let mut wal = Wal::open(&path, 0).unwrap();

    wal.truncate_before(3).unwrap();
    wal.append(&test_event("4")).unwrap();
    wal.flush().unwrap();

    let seqs: Vec<_> = wal.entries_after(0).unwrap().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![3, 4]);
}

#[test]
fn open_corrupt_wal_creates_bak_and_preserves_valid_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 2);
    append_raw(&path, b"not-valid-json\n");

    let wal = Wal::open(&path, 0).unwrap();

    assert_eq!(wal.write_seq(), 2);
    assert!(path.with_extension("bak").exists());
    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].seq, 1);
    assert_eq!(entries[1].seq, 2);
}

#[test]
fn torn_final_line_is_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 1);
    append_raw(&path, br#"{"seq":2,"event":{"type":"ticket:act"#);

    let mut wal = Wal::open(&path, 0).unwrap();

    assert_eq!(wal.write_seq(), 1);
    assert_eq!(wal.append(&test_event("2")).unwrap(), 2);
}

#[test]
fn open_corrupt_wal_rotates_bak_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");

    // Four corrupt opens keep at most three backups
    for i in 1..=4u8 {
        std::fs::write(&path, [i; 8]).unwrap();
        let wal = Wal::open(&path, 0).unwrap();
        assert_eq!(wal.write_seq(), 0);
    }

    assert_eq!(std::fs::read(path.with_extension("bak")).unwrap(), vec![4u8; 8]);
    assert_eq!(std::fs::read(path.with_extension("bak.2")).unwrap(), vec![3u8; 8]);
    assert_eq!(std::fs::read(path.with_extension("bak.3")).unwrap(), vec![2u8; 8]);
    assert!(!path.with_extension("bak.4").exists());
}

#[test]
fn entries_after_stops_at_binary_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    let mut wal = Wal::open(&path, 0).unwrap();
    wal.append(&test_event("1")).unwrap();
    wal.flush().unwrap();

    append_raw(&path, b"\x80\x81\x82\xff\xfe\n");

    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].seq, 1);
}

#[test]
fn unknown_event_types_replay_as_custom() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    std::fs::write(&path, b"{\"seq\":1,\"event\":{\"type\":\"future:thing\"}}\n").unwrap();

    let wal = Wal::open(&path, 0).unwrap();

    assert_eq!(wal.entries_after(0).unwrap()[0].event, Event::Custom);
}

#[test]
fn append_after_flush_failure_reuses_the_discarded_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 2);
    let mut wal = Wal::open(&path, 0).unwrap();

    wal.append(&test_event("rejected")).unwrap();
    let good = std::mem::replace(&mut wal.file, OpenOptions::new().read(true).open(&path).unwrap());
    assert!(wal.flush().is_err(), "read-only handle must fail the write");
    assert_eq!(wal.write_seq(), 2);

    wal.file = good;
    assert_eq!(wal.append(&test_event("accepted")).unwrap(), 3);
    wal.flush().unwrap();

    let entries = Wal::open(&path, 0).unwrap().entries_after(0).unwrap();
    let events: Vec<_> = entries.iter().map(|e| (e.seq, e.event.clone())).collect();
    assert_eq!(
        events,
        vec![(1, test_event("1")), (2, test_event("2")), (3, test_event("accepted"))]
    );
}

#[cfg(target_os = "linux")]
#[test]
fn full_disk_discards_the_buffered_entry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.wal");
    seeded(&path, 1);
    let before = std::fs::read(&path).unwrap();
    let mut wal = Wal::open(&path, 0).unwrap();

    wal.append(&test_event("lost")).unwrap();
    let good = std::mem::replace(
        &mut wal.file,
        OpenOptions::new().write(true).open("/dev/full").unwrap(),
    );
    assert!(matches!(wal.flush(), Err(WalError::Io(_))));
    wal.file = good;
    wal.flush().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(wal.write_seq(), 1);
}
