//! Shared helpers for CLI commands.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use bloch_ir::SimulationRequest;
use bloch_sim::Counts;

/// Outcomes shown before the table is truncated.
const MAX_ROWS: usize = 16;

/// Load a simulation request from a JSON file, or stdin when `path` is `-`.
pub fn load_request(path: &str) -> Result<SimulationRequest> {
    let source = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        if !Path::new(path).exists() {
            anyhow::bail!("File not found: {path}");
        }
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?
    };

    parse_request(&source).with_context(|| format!("Invalid request: {path}"))
}

/// Parse a JSON simulation request.
pub fn parse_request(source: &str) -> Result<SimulationRequest> {
    Ok(serde_json::from_str(source)?)
}

/// Histogram bar: one block per two percent.
pub fn bar(prob_percent: f64) -> String {
    "█".repeat((prob_percent / 2.0).round() as usize)
}

/// Print measurement counts as a table, most frequent first.
pub fn print_results(counts: &Counts) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        counts.total_shots()
    );

    let sorted = counts.sorted();
    let total = f64::from(counts.total_shots());

    for (bitstring, count) in sorted.iter().take(MAX_ROWS) {
        let prob = f64::from(**count) / total * 100.0;

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar(prob)).green()
        );
    }

    if sorted.len() > MAX_ROWS {
        println!("  ... and {} more outcomes", sorted.len() - MAX_ROWS);
    }
}
