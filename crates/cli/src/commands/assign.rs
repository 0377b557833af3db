// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recommendation, assignment and autopilot commands

use anyhow::Result;
use clap::Args;
use triage_core::{Assignment, Clock, Recommendation};
use triage_engine::Desk;

use crate::color;
use crate::output::{format_percent, handle_list, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct RecommendArgs {
    /// Ticket ID (defaults to the active ticket)
    #[arg(long)]
    pub ticket: Option<String>,
    /// Show every active candidate, best first
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct AssignArgs {
    /// Ticket ID (defaults to the active ticket)
    #[arg(long)]
    pub ticket: Option<String>,
}

pub fn recommend<C: Clock>(args: RecommendArgs, desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    let ticket = args.ticket.as_deref();
    let threshold = desk.settings().overload_threshold;
    if args.all {
        let candidates = desk.candidates(ticket)?;
        return handle_list(format, &candidates, "No active agents to recommend", |items, out| {
            let mut table = Table::new(vec![
                Column::right("SCORE"),
                Column::left("AGENT"),
                Column::right("OCCUPANCY"),
                Column::right("LOAD"),
                Column::right("TECH"),
                Column::left("EVIDENCE"),
            ]);
            for rec in items {
                let flag = if rec.is_overloaded(threshold) { " !" } else { "" };
                table.row(vec![
                    rec.rounded_score().to_string(),
                    format!("{} ({})", rec.agent.name, rec.agent.id),
                    format!("{}{flag}", format_percent(rec.occupancy_rate)),
                    format!("{:.1}", rec.load_score),
                    format!("{:.1}", rec.tech_score),
                    evidence_summary(rec),
                ]);
            }
            table.render(out);
        });
    }

    let best = desk.recommend(ticket)?;
    match (format, best) {
        (OutputFormat::Json, best) => print_json(&best)?,
        (OutputFormat::Text, Some(rec)) => print_recommendation(&rec, threshold),
        (OutputFormat::Text, None) => println!("{}", no_candidate_message(has_ticket(desk, ticket))),
    }
    Ok(())
}

pub fn assign<C: Clock>(args: AssignArgs, desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    let ticket = args.ticket.as_deref();
    let assignment = desk.assign(ticket)?;
    match (format, assignment) {
        (OutputFormat::Json, assignment) => print_json(&assignment)?,
        (OutputFormat::Text, Some(assignment)) => print_assignment(&assignment),
        (OutputFormat::Text, None) => println!("{}", no_candidate_message(has_ticket(desk, ticket))),
    }
    Ok(())
}

pub fn autopilot<C: Clock>(desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    let assignments = desk.autopilot_sweep()?;
    let left = desk.pending().len();
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "assignments": assignments,
            "pending": left,
        }))?,
        OutputFormat::Text => {
            for assignment in &assignments {
                print_assignment(assignment);
            }
            println!("{} assigned, {} still pending", assignments.len(), left);
        }
    }
    Ok(())
}

/// Whether an empty result had a ticket to score, so no agent was active.
fn has_ticket<C: Clock>(desk: &Desk<C>, ticket: Option<&str>) -> bool {
    ticket.is_some() || desk.active_ticket().is_some()
}

fn no_candidate_message(had_ticket: bool) -> &'static str {
    if had_ticket {
        "No active agent available"
    } else {
        "No pending ticket"
    }
}

fn print_recommendation(rec: &Recommendation, threshold: u32) {
    println!(
        "{} {} score {}",
        color::header(&rec.agent.name),
        color::muted(&format!("(id {})", rec.agent.id)),
        rec.rounded_score()
    );
    println!(
        "  {} {} ({:.1} pts)",
        color::context("occupancy:"),
        color::occupancy(rec.is_overloaded(threshold), &format_percent(rec.occupancy_rate)),
        rec.load_score
    );
    println!("  {} {:.1} pts", color::context("technical:"), rec.tech_score);
    for evidence in &rec.evidence {
        let note = if evidence.duplicate { " duplicate" } else { "" };
        println!(
            "    {} {} +{:.1}{}",
            color::literal(&evidence.label()),
            color::muted(&evidence.level.to_string()),
            evidence.points,
            color::muted(note)
        );
    }
}

fn print_assignment(assignment: &Assignment) {
    let entry = &assignment.entry;
    println!(
        "Assigned ticket {} to {} {}",
        color::header(entry.ticket_id.as_str()),
        color::header(&entry.agent_name),
        color::muted(&format!("({}, score {}, {})", entry.kind, entry.score, entry.reason))
    );
}

/// Evidence labels joined for one table cell; `-` when nothing matched.
pub(crate) fn evidence_summary(rec: &Recommendation) -> String {
    if rec.evidence.is_empty() {
        return "-".to_string();
    }
    rec.evidence
        .iter()
        .filter(|e| !e.duplicate)
        .map(|e| e.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
