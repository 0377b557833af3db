// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket queue commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use triage_core::{format_wait, wait_time, Clock, SlaBucket, Ticket};
use triage_engine::Desk;

use super::{parse_one_or_many, read_input};
use crate::color;
use crate::output::{handle_list, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct TicketsArgs {
    #[command(subcommand)]
    pub command: TicketsCommand,
}

#[derive(Subcommand)]
pub enum TicketsCommand {
    /// Queue tickets from a JSON file ("-" for stdin)
    Push {
        /// Path to a JSON object or array
        source: String,
    },
    /// List pending tickets with their wait and SLA bucket
    List {},
    /// Make a pending ticket the one recommendations default to
    Activate {
        /// Ticket ID
        id: String,
    },
}

/// A pending ticket as listed, with its wait measured at listing time.
#[derive(Debug, Serialize)]
pub(crate) struct PendingRow {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla: Option<SlaBucket>,
}

pub(crate) fn pending_rows(tickets: Vec<Ticket>, active: Option<&Ticket>, now_ms: u64) -> Vec<PendingRow> {
    tickets
        .into_iter()
        .map(|ticket| {
            let wait = wait_time(&ticket, now_ms);
            PendingRow {
                active: active.is_some_and(|a| a.id == ticket.id),
                wait_ms: wait.map(|w| w.as_millis() as u64),
                sla: wait.map(SlaBucket::classify),
                ticket,
            }
        })
        .collect()
}

pub fn handle<C: Clock>(command: TicketsCommand, desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    match command {
        TicketsCommand::Push { source } => {
            let tickets: Vec<Ticket> = parse_one_or_many(&read_input(&source)?)?;
            let ids: Vec<String> = tickets.iter().map(|t| t.id.as_str().trim().to_string()).collect();
            for ticket in tickets {
                desk.enqueue(ticket)?;
            }
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "queued": ids }))?,
                OutputFormat::Text => println!("Queued {} ticket(s)", ids.len()),
            }
        }
        TicketsCommand::List {} => {
            let active = desk.active_ticket();
            let rows = pending_rows(desk.pending(), active.as_ref(), desk.clock().epoch_ms());
            handle_list(format, &rows, "No pending tickets", |items, out| {
                let mut table = Table::new(vec![
                    Column::left(""),
                    Column::left("ID"),
                    Column::left("PRIORITY"),
                    Column::right("WAIT"),
                    Column::left("SLA"),
                    Column::left("SUBJECT"),
                ]);
                for row in items {
                    let wait = row
                        .wait_ms
                        .map(|ms| format_wait(std::time::Duration::from_millis(ms)))
                        .unwrap_or_else(|| "-".to_string());
                    let sla = row.sla.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string());
                    table.row(vec![
                        if row.active { "*" } else { "" }.to_string(),
                        row.ticket.id.to_string(),
                        row.ticket.priority.to_string(),
                        wait,
                        sla,
                        row.ticket.subject.clone(),
                    ]);
                }
                table.render(out);
            })?;
            if format == OutputFormat::Text {
                if let Some(late) = rows.iter().filter_map(|r| r.sla).max() {
                    if late != SlaBucket::Normal {
                        println!("\n{}", color::sla(late, &format!("oldest wait is {late}")));
                    }
                }
            }
        }
        TicketsCommand::Activate { id } => {
            desk.activate(&id)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "active": id.trim() }))?,
                OutputFormat::Text => println!("Ticket {} is now active", color::header(id.trim())),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
