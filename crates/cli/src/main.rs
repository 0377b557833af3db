// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! triage: command line for the support ticket triage desk.

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use commands::agents::AgentsArgs;
use commands::assign::{AssignArgs, RecommendArgs};
use commands::expertise::ExpertiseArgs;
use commands::history::{LogArgs, MemoryArgs};
use commands::tickets::TicketsArgs;
use output::OutputFormat;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "triage", version = VERSION, styles = color::styles())]
#[command(about = "Recommend the best available agent for each support ticket")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and sync the agent roster
    Agents(AgentsArgs),
    /// Declare agent expertise and view team coverage
    Expertise(ExpertiseArgs),
    /// Queue, list and activate pending tickets
    Tickets(TicketsArgs),
    /// Rank agents for a ticket without assigning it
    Recommend(RecommendArgs),
    /// Assign a ticket to its best-ranked agent
    Assign(AssignArgs),
    /// Assign every pending ticket (requires autopilot_enabled)
    Autopilot,
    /// Show recent assignments, newest first
    Log(LogArgs),
    /// Show per-tag success counts
    Memory(MemoryArgs),
    /// Snapshot state and compact the journal
    Checkpoint,
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_logging();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let desk = commands::open_desk()?;
    let format = cli.output;
    match cli.command {
        Commands::Agents(args) => commands::agents::handle(args.command, &desk, format),
        Commands::Expertise(args) => commands::expertise::handle(args.command, &desk, format),
        Commands::Tickets(args) => commands::tickets::handle(args.command, &desk, format),
        Commands::Recommend(args) => commands::assign::recommend(args, &desk, format),
        Commands::Assign(args) => commands::assign::assign(args, &desk, format),
        Commands::Autopilot => commands::assign::autopilot(&desk, format),
        Commands::Log(args) => commands::history::log(args, &desk, format),
        Commands::Memory(args) => commands::history::memory(args, &desk, format),
        Commands::Checkpoint => commands::history::checkpoint(&desk, format),
    }
}

/// Log to `triage.log` in the state directory, filtered by `TRIAGE_LOG`.
///
/// `None` when the state directory is unusable; the command still runs.
fn init_logging() -> Option<WorkerGuard> {
    let dir = env::state_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, "triage.log"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
