//! The simulation pipeline: build, apply, sample.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

use bloch_ir::{Circuit, CircuitBuilder, GateSpec, IrError, SimulationRequest};

use crate::config::SimConfig;
use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::gates::apply_instruction;
use crate::sampler::Sampler;
use crate::statevector::Statevector;

/// Result of a [`SimulationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Text diagram of the executed circuit, preparation gates included.
    pub circuit: String,
    /// Measurement histogram.
    pub counts: Counts,
}

/// Statevector simulation engine.
///
/// Holds only configuration. Every call builds its own state and RNG, so one
/// engine can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    config: SimConfig,
}

impl SimulationEngine {
    /// Create an engine with the given configuration.
    ///
    /// The configuration is validated first, so `max_qubits` never exceeds
    /// [`QUBIT_CEILING`](crate::config::QUBIT_CEILING).
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Build a circuit from its description, run it and sample `repetitions`
    /// measurements.
    pub fn run<S: AsRef<str>>(
        &self,
        num_qubits: i64,
        initial_states: &[S],
        gates: &[GateSpec],
        repetitions: i64,
    ) -> SimResult<Counts> {
        self.run_with_rng(num_qubits, initial_states, gates, repetitions, self.rng())
    }

    /// Like [`run`](Self::run), drawing measurements from `rng`.
    pub fn run_with_rng<S: AsRef<str>, R: Rng>(
        &self,
        num_qubits: i64,
        initial_states: &[S],
        gates: &[GateSpec],
        repetitions: i64,
        rng: R,
    ) -> SimResult<Counts> {
        let shots = validate_shots(repetitions)?;
        let circuit = CircuitBuilder::new(num_qubits)
            .max_qubits(self.config.max_qubits)
            .initial_states(initial_states)
            .gates(gates)
            .build()?;
        self.execute(&circuit, shots, rng)
    }

    /// Run an already-built circuit.
    pub fn run_circuit(&self, circuit: &Circuit, repetitions: i64) -> SimResult<Counts> {
        let shots = validate_shots(repetitions)?;
        self.execute(circuit, shots, self.rng())
    }

    /// Serve a declarative request, filling in defaults from the configuration.
    #[instrument(skip(self, request), fields(n_qubits = request.n_qubits, gates = request.gates.len()))]
    pub fn simulate(&self, request: &SimulationRequest) -> SimResult<SimulationResponse> {
        let repetitions = request
            .repetitions
            .unwrap_or(i64::from(self.config.default_shots));
        let shots = validate_shots(repetitions)?;

        let mut builder = CircuitBuilder::new(request.n_qubits)
            .max_qubits(self.config.max_qubits)
            .gates(&request.gates);
        if let Some(labels) = &request.initial_states {
            builder = builder.initial_states(labels.as_slice());
        }
        let circuit = builder.build()?;

        let counts = self.execute(&circuit, shots, self.rng())?;
        Ok(SimulationResponse {
            circuit: circuit.to_text_diagram(),
            counts,
        })
    }

    /// Apply every instruction of `circuit` to a fresh state and return it.
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_width(circuit)?;

        let mut state = Statevector::new(circuit.num_qubits());
        for (step, instruction) in circuit.instructions().iter().enumerate() {
            apply_instruction(&mut state, instruction)?;
            state.check_normalized(self.config.normalization_tolerance)?;
            trace!(step, %instruction, "applied gate");
        }
        Ok(state)
    }

    #[instrument(skip(self, circuit, rng), fields(num_qubits = circuit.num_qubits(), gates = circuit.len()))]
    fn execute<R: Rng>(&self, circuit: &Circuit, shots: u32, rng: R) -> SimResult<Counts> {
        let start = Instant::now();

        let state = self.statevector(circuit)?;
        debug!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "applied {} gates",
            circuit.len()
        );

        let counts = Sampler::new(rng).sample(&state, shots)?;
        debug!(outcomes = counts.len(), "sampled {shots} shots");

        info!(
            num_qubits = circuit.num_qubits(),
            shots,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Simulation complete"
        );
        Ok(counts)
    }

    fn check_width(&self, circuit: &Circuit) -> SimResult<()> {
        let num_qubits = circuit.num_qubits() as i64;
        if num_qubits == 0 {
            return Err(IrError::InvalidQubitCount(0).into());
        }
        if num_qubits > i64::from(self.config.max_qubits) {
            return Err(IrError::TooManyQubits {
                num_qubits,
                max_qubits: self.config.max_qubits,
            }
            .into());
        }
        Ok(())
    }

    /// Per-request RNG: seeded from the config when set, else from entropy.
    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn validate_shots(repetitions: i64) -> SimResult<u32> {
    match u32::try_from(repetitions) {
        Ok(shots) if shots > 0 => Ok(shots),
        _ => Err(SimError::InvalidShots(repetitions)),
    }
}
