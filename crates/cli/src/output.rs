// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use triage_core::format_wait;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a list as JSON, or hand it to `render` as text.
///
/// An empty list prints `empty_message` in text mode and `[]` in JSON.
pub fn handle_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    empty_message: &str,
    render: impl FnOnce(&[T], &mut dyn Write),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{empty_message}");
            } else {
                let mut out = std::io::stdout().lock();
                render(items, &mut out);
            }
            Ok(())
        }
    }
}

/// Occupancy rate (0..) as a whole percentage, e.g. `"75%"`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// Elapsed time since `epoch_ms` as of `now_ms`, e.g. `"42 min ago"`.
pub fn format_time_ago(epoch_ms: u64, now_ms: u64) -> String {
    if epoch_ms == 0 {
        return "-".to_string();
    }
    let elapsed = Duration::from_millis(now_ms.saturating_sub(epoch_ms));
    format!("{} ago", format_wait(elapsed))
}
