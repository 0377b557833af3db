// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent roster commands

use anyhow::Result;
use clap::{Args, Subcommand};
use triage_core::{Agent, AgentId, Clock, Occupancy, RemoteAgent};
use triage_engine::{Desk, DeskError};

use super::{parse_one_or_many, read_input};
use crate::color;
use crate::output::{format_percent, handle_list, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct AgentsArgs {
    #[command(subcommand)]
    pub command: AgentsCommand,
}

#[derive(Subcommand)]
pub enum AgentsCommand {
    /// List agents with their load and declared expertise
    List {
        /// Only active agents above the overload threshold
        #[arg(long)]
        overloaded: bool,
    },
    /// Show one agent
    Show {
        /// Agent ID
        id: u64,
    },
    /// Replace the roster from a JSON file of remote agents ("-" for stdin)
    Sync {
        /// Path to a JSON object or array
        source: String,
    },
}

pub fn handle<C: Clock>(command: AgentsCommand, desk: &Desk<C>, format: OutputFormat) -> Result<()> {
    match command {
        AgentsCommand::List { overloaded } => {
            let agents = if overloaded { desk.overloaded_agents() } else { desk.agents() };
            let threshold = desk.settings().overload_threshold;
            handle_list(format, &agents, "No agents found", |items, out| {
                let mut table = Table::new(vec![
                    Column::right("ID"),
                    Column::left("NAME"),
                    Column::left("ACTIVE"),
                    Column::right("LOAD"),
                    Column::right("OCCUPANCY"),
                    Column::left("EXPERTISE"),
                ]);
                for agent in items {
                    let occupancy = Occupancy::of(agent);
                    let flag = if occupancy.is_overloaded(threshold) { " !" } else { "" };
                    table.row(vec![
                        agent.id.to_string(),
                        agent.name.clone(),
                        if agent.is_active { "yes" } else { "no" }.to_string(),
                        format!("{}/{}", agent.current_workload, agent.max_capacity),
                        format!("{}{flag}", format_percent(occupancy.rate)),
                        expertise_summary(agent),
                    ]);
                }
                table.render(out);
            })?;
        }
        AgentsCommand::Show { id } => {
            let agent = desk.agent(AgentId(id)).ok_or(DeskError::UnknownAgent(AgentId(id)))?;
            match format {
                OutputFormat::Json => print_json(&agent)?,
                OutputFormat::Text => print_agent(&agent, desk.settings().overload_threshold),
            }
        }
        AgentsCommand::Sync { source } => {
            let remote: Vec<RemoteAgent> = parse_one_or_many(&read_input(&source)?)?;
            let count = desk.sync_agents(remote)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "agents": count }))?,
                OutputFormat::Text => println!("Synced {count} agent(s)"),
            }
        }
    }
    Ok(())
}

fn print_agent(agent: &Agent, threshold: u32) {
    let occupancy = Occupancy::of(agent);
    println!("{} {}", color::header(&agent.name), color::muted(&format!("(id {})", agent.id)));
    if !agent.email.is_empty() {
        println!("  {} {}", color::context("email:"), agent.email);
    }
    println!("  {} {}", color::context("active:"), agent.is_active);
    println!(
        "  {} {}/{} ({})",
        color::context("load:"),
        agent.current_workload,
        agent.max_capacity,
        color::occupancy(occupancy.is_overloaded(threshold), &format_percent(occupancy.rate))
    );
    if !agent.group_ids.is_empty() {
        println!("  {} {}", color::context("groups:"), agent.group_ids.join(", "));
    }
    println!("  {} {}", color::context("expertise:"), expertise_summary(agent));
}

/// `"pix (advanced), boleto (basic)"`, or `-` when nothing is declared.
pub(crate) fn expertise_summary(agent: &Agent) -> String {
    if agent.expertise.is_empty() {
        return "-".to_string();
    }
    agent
        .expertise
        .iter()
        .map(|e| format!("{} ({})", e.system_name, e.level))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "agents_tests.rs"]
mod tests;
