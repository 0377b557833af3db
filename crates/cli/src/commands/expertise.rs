// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expertise declaration commands

use anyhow::Result;
use clap::{Args, Subcommand};
use triage_core::{AgentId, Clock, KnowledgeLevel};
use triage_engine::Desk;

use crate::color;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ExpertiseArgs {
    #[command(subcommand)]
    pub command: ExpertiseCommand,
}

#[derive(Subcommand)]
pub enum ExpertiseCommand {
    /// Declare a system for one or more agents
    Set {
        /// System name, e.g. "MagaluPay"
        system: String,
        /// Level: 1-3 or basic/intermediate/advanced
        #[arg(value_parser = parse_level)]
        level: KnowledgeLevel,
        /// Agent ID (repeatable; all must exist)
        #[arg(long = "agent", required = true)]
        agents: Vec<u64>,
    },
    /// Remove a declared system from an agent
    Remove {
        /// Agent ID
        agent: u64,
        /// System name
        system: String,
    },
    /// Average team level for a system
    Insight {
        /// System name
        system: String,
    },
}

pub(crate) fn parse_level(s: &str) -> Result<KnowledgeLevel, String> {
    KnowledgeLevel::parse(s)
        .ok_or_else(|| format!("unknown level '{s}': use 1-3 or basic/intermediate/advanced"))
}

pub fn handle<C: Clock>(
    command: ExpertiseCommand,
    desk: &Desk<C>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ExpertiseCommand::Set { system, level, agents } => {
            let ids: Vec<AgentId> = agents.into_iter().map(AgentId).collect();
            let updated = desk.set_expertise(&system, level, &ids)?;
            match format {
                OutputFormat::Json => print_json(&updated)?,
                OutputFormat::Text => {
                    let names: Vec<&str> = updated.iter().map(|a| a.name.as_str()).collect();
                    println!(
                        "Set {} ({}) for {}",
                        color::header(system.trim()),
                        level,
                        names.join(", ")
                    );
                }
            }
        }
        ExpertiseCommand::Remove { agent, system } => {
            let removed = desk.remove_expertise(AgentId(agent), &system)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "removed": removed }))?,
                OutputFormat::Text if removed => println!("Removed {system} from agent {agent}"),
                OutputFormat::Text => println!("Agent {agent} did not declare {system}"),
            }
        }
        ExpertiseCommand::Insight { system } => {
            let insight = desk.team_insight(&system);
            match (format, insight) {
                (OutputFormat::Json, insight) => print_json(&insight)?,
                (OutputFormat::Text, Some(insight)) => println!(
                    "{}: {} average across {} agent(s)",
                    color::header(&insight.system_name),
                    insight.average_level,
                    insight.agent_count
                ),
                (OutputFormat::Text, None) => println!("No agent declares {}", system.trim()),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "expertise_tests.rs"]
mod tests;
