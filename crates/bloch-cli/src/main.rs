//! Bloch Command-Line Interface
//!
//! Simulates a circuit described by a JSON request and prints the
//! measurement histogram.
//!
//! ```text
//! $ bloch run -i bell.json --seed 7
//! → Simulating bell.json (2 qubits, 500 shots)
//!
//! 0          1
//! │          │
//! H          │
//! │          │
//! @──────────X
//! │          │
//! M('final')─M
//!
//! ✓ Results (500 shots):
//!   00:    256 (51.20%) ██████████████████████████
//!   11:    244 (48.80%) ████████████████████████
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use bloch_sim::{LoggingConfig, SimConfig};

mod commands;

use commands::{gates, run, version};

/// Bloch - statevector quantum circuit simulator
#[derive(Debug, Parser)]
#[command(name = "bloch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Engine configuration file (YAML)
    #[arg(short, long, global = true, env = "BLOCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Simulate a circuit request and print the measurement histogram
    Run {
        /// Request file (JSON), or "-" for stdin
        #[arg(short, long)]
        input: String,

        /// Number of shots (overrides the request)
        #[arg(short, long)]
        shots: Option<u32>,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List supported gates and initial states
    Gates,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = execute(cli);

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let (config, ignored) = SimConfig::load_with_ignored(cli.config.as_deref())
        .context("Failed to load configuration")?;

    init_logging(cli.verbose, &config.logging);
    // Logging depends on the loaded config, so env problems are reported late.
    for var in &ignored {
        warn!("{var}");
    }

    match cli.command {
        Commands::Run {
            input,
            shots,
            seed,
            format,
        } => run::execute(&input, shots, seed, &format, config),

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

/// `-v` flags take precedence over the configured level.
fn log_filter(verbose: u8, logging: &LoggingConfig) -> &str {
    match verbose {
        0 => logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    // Logs go to stderr so `--format json` output stays parseable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter(verbose, logging)))
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
