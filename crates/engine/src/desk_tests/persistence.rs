// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

fn open(dir: &Path) -> Desk<FakeClock> {
    Desk::open(dir, Settings::default(), FakeClock::new()).unwrap()
}

fn populate(desk: &Desk<FakeClock>) {
    desk.sync_agents(vec![remote(1, "Ana"), remote(2, "Bruno")]).unwrap();
    desk.set_expertise("pix", KnowledgeLevel::Advanced, &[AgentId(2)]).unwrap();
    for id in ["1", "2", "3"] {
        desk.enqueue(Ticket::builder().id(id).tags(vec!["pix".into()]).build()).unwrap();
    }
    desk.activate("3").unwrap();
    desk.assign(None).unwrap();
    desk.assign(Some("1")).unwrap();
}

#[test]
fn reopen_replays_journal() {
    let dir = tempdir().unwrap();
    let before = {
        let desk = open(dir.path());
        populate(&desk);
        desk.with_state(|s| s.clone())
    };

    let desk = open(dir.path());

    assert_eq!(desk.with_state(|s| s.clone()), before);
    assert_eq!(desk.agent(AgentId(2)).unwrap().current_workload, 2);
    assert_eq!(desk.memory().success_count("pix", AgentId(2)), 2);
    assert_eq!(desk.log(10).len(), 2);
}

#[test]
fn checkpoint_then_reopen_matches() {
    let dir = tempdir().unwrap();
    let before = {
        let desk = open(dir.path());
        populate(&desk);
        let seq = desk.checkpoint().unwrap().unwrap();
        assert!(seq > 0);
        desk.enqueue(ticket("4")).unwrap();
        desk.with_state(|s| s.clone())
    };

    let desk = open(dir.path());

    assert!(dir.path().join(SNAPSHOT_FILE).exists());
    assert_eq!(desk.with_state(|s| s.clone()), before);
    assert_eq!(desk.pending().len(), 2);
}

#[test]
fn checkpoint_truncates_journal() {
    let dir = tempdir().unwrap();
    let desk = open(dir.path());
    populate(&desk);

    let seq = desk.checkpoint().unwrap().unwrap();

    let wal = triage_storage::Wal::open(&dir.path().join(WAL_FILE), seq).unwrap();
    assert!(wal.entries_after(0).unwrap().is_empty());
    assert_eq!(wal.write_seq(), seq);
}

#[test]
fn corrupt_snapshot_falls_back_to_journal() {
    let dir = tempdir().unwrap();
    let before = {
        let desk = open(dir.path());
        populate(&desk);
        desk.with_state(|s| s.clone())
    };
    std::fs::write(dir.path().join(SNAPSHOT_FILE), b"{not json").unwrap();

    let desk = open(dir.path());

    assert_eq!(desk.with_state(|s| s.clone()), before);
    assert!(dir.path().join("snapshot.bak").exists());
}

#[test]
fn replay_from_zero_reproduces_workloads() {
    let dir = tempdir().unwrap();
    let desk = open(dir.path());
    populate(&desk);
    let live = desk.with_state(|s| s.clone());

    let wal = triage_storage::Wal::open(&dir.path().join(WAL_FILE), 0).unwrap();
    let mut replayed = triage_storage::MaterializedState::default();
    for entry in wal.entries_after(0).unwrap() {
        replayed.apply_event(&entry.event);
    }

    assert_eq!(replayed, live);
}
