// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment log, outcome memory and checkpoint commands

use anyhow::Result;
use clap::Args;
use triage_core::{fold, Clock, OutcomeRecord};
use triage_engine::Desk;

use crate::output::{format_time_ago, handle_list, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct LogArgs {
    /// Number of recent assignments to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

#[derive(Args)]
pub struct MemoryArgs {
    /// Only records for this tag
    #[arg(long)]
    pub tag: Option<String>,
}

pub fn log<C: Clock>(args: LogArgs, desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    let entries = desk.log(args.limit);
    let now = desk.clock().epoch_ms();
    handle_list(format, &entries, "No assignments yet", |items, out| {
        let mut table = Table::new(vec![
            Column::left("WHEN"),
            Column::left("TICKET"),
            Column::left("AGENT"),
            Column::left("TYPE"),
            Column::right("SCORE"),
            Column::left("REASON"),
        ]);
        for entry in items {
            table.row(vec![
                format_time_ago(entry.timestamp_ms, now),
                entry.ticket_id.to_string(),
                entry.agent_name.clone(),
                entry.kind.to_string(),
                entry.score.to_string(),
                entry.reason.clone(),
            ]);
        }
        table.render(out);
    })
}

pub fn memory<C: Clock>(args: MemoryArgs, desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    let memory = desk.memory();
    let records = select_records(memory.records(), args.tag.as_deref());
    handle_list(format, &records, "No outcomes recorded", |items, out| {
        let mut table =
            Table::new(vec![Column::left("TAG"), Column::right("AGENT"), Column::right("SUCCESSES")]);
        for record in items {
            table.row(vec![
                record.tag.clone(),
                record.agent_id.to_string(),
                record.success_count.to_string(),
            ]);
        }
        table.render(out);
    })
}

pub fn checkpoint<C: Clock>(desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    let seq = desk.checkpoint()?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "seq": seq }))?,
        OutputFormat::Text => match seq {
            Some(seq) => println!("Checkpoint written at seq {seq}"),
            None => println!("Nothing to checkpoint"),
        },
    }
    Ok(())
}

/// Records for `tag` (case-insensitive), or all of them, busiest first.
pub(crate) fn select_records(records: &[OutcomeRecord], tag: Option<&str>) -> Vec<OutcomeRecord> {
    let tag = tag.map(fold);
    let mut selected: Vec<OutcomeRecord> = records
        .iter()
        .filter(|r| tag.as_deref().is_none_or(|t| fold(&r.tag) == t))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.success_count.cmp(&a.success_count));
    selected
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
