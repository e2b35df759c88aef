//! `bloch-sim` — statevector simulation of Bloch circuits.
//!
//! Runs a validated [`bloch_ir::Circuit`] against a dense statevector and
//! samples full-register measurements from the final state:
//!
//! 1. [`CircuitBuilder`](bloch_ir::CircuitBuilder) validates the request and
//!    expands initial states into preparation gates
//! 2. [`apply_instruction`] applies each gate's unitary in order, checking
//!    |ψ|² after every step
//! 3. [`Sampler`] draws Born-rule outcomes into a [`Counts`] histogram
//!
//! [`SimulationEngine`] wires these together.
//!
//! # Quick start
//!
//! ```rust
//! use bloch_ir::GateSpec;
//! use bloch_sim::{SimConfig, SimulationEngine};
//!
//! let engine = SimulationEngine::new(SimConfig {
//!     seed: Some(42),
//!     ..SimConfig::default()
//! })
//! .unwrap();
//!
//! let counts = engine
//!     .run(2, &["|0⟩", "|0⟩"], &[GateSpec::new("H", 0), GateSpec::cnot(0, 1)], 500)
//!     .unwrap();
//!
//! assert_eq!(counts.total_shots(), 500);
//! assert_eq!(counts.get("01") + counts.get("10"), 0);
//! ```
//!
//! # Bit order
//!
//! Qubit 0 is the most significant bit of a statevector index and the first
//! character of a bitstring: `X` on qubit 0 of three yields `"100"`.

pub mod config;
pub mod counts;
pub mod engine;
pub mod error;
pub mod gates;
pub mod sampler;
pub mod statevector;

pub use config::{ConfigError, IgnoredVar, LoggingConfig, SimConfig};
pub use counts::Counts;
pub use engine::{SimulationEngine, SimulationResponse};
pub use error::{SimError, SimResult};
pub use gates::{GateMatrix, apply_instruction};
pub use sampler::Sampler;
pub use statevector::Statevector;
