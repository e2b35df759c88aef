//! Run command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use bloch_sim::{SimConfig, SimulationEngine, SimulationResponse};

use super::common::{load_request, print_results};

/// Execute the run command.
pub fn execute(
    input: &str,
    shots: Option<u32>,
    seed: Option<u64>,
    format: &str,
    mut config: SimConfig,
) -> Result<()> {
    let json = match format.to_lowercase().as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown output format: '{other}'. Available: table, json"),
    };

    let mut request = load_request(input)?;
    debug!(n_qubits = request.n_qubits, gates = request.gates.len(), "Loaded request");

    if let Some(shots) = shots {
        request.repetitions = Some(i64::from(shots));
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let engine = SimulationEngine::new(config)?;

    if !json {
        println!(
            "{} Simulating {} ({} qubits, {} shots)",
            style("→").cyan().bold(),
            style(input).green(),
            request.n_qubits,
            request
                .repetitions
                .unwrap_or(i64::from(engine.config().default_shots))
        );
    }
    let response = engine
        .simulate(&request)
        .with_context(|| format!("Simulation of {input} failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_table(&response);
    }

    Ok(())
}

fn print_table(response: &SimulationResponse) {
    println!();
    println!("{}", response.circuit);
    print_results(&response.counts);
}
