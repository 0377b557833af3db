// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use triage_core::{AgentId, OutcomeMemory};

fn memory() -> OutcomeMemory {
    let mut memory = OutcomeMemory::default();
    memory.record_success("pix", AgentId(1));
    memory.record_success("boleto", AgentId(2));
    memory.record_success("boleto", AgentId(2));
    memory.record_success("pix", AgentId(2));
    memory
}

#[test]
fn all_records_sorted_by_successes() {
    let memory = memory();
    let records = select_records(memory.records(), None);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].tag, "boleto");
    assert_eq!(records[0].success_count, 2);
}

#[test]
fn tag_filter_ignores_case() {
    let memory = memory();
    let records = select_records(memory.records(), Some(" PIX "));

    let agents: Vec<AgentId> = records.iter().map(|r| r.agent_id).collect();
    assert_eq!(agents, vec![AgentId(1), AgentId(2)]);
}
