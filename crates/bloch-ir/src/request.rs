//! Declarative simulation requests.
//!
//! These are the JSON shapes a front end sends:
//!
//! ```json
//! {
//!   "n_qubits": 2,
//!   "gates": [
//!     {"type": "H", "target": 0},
//!     {"type": "CNOT", "control": 0, "target": 1}
//!   ],
//!   "initial_states": ["|0⟩", "|0⟩"],
//!   "repetitions": 500
//! }
//! ```
//!
//! Indices and counts are kept signed so that negative values surface as
//! validation errors instead of deserialization failures.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;

/// Qubit count used when a request omits `n_qubits`.
pub const DEFAULT_NUM_QUBITS: i64 = 2;

/// One entry of a request's gate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Gate type, e.g. `"H"` or `"CNOT"`.
    #[serde(rename = "type")]
    pub gate_type: String,
    /// Target qubit index.
    pub target: i64,
    /// Control qubit index (two-qubit gates only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<i64>,
}

impl GateSpec {
    /// A single-qubit gate spec.
    pub fn new(gate_type: impl Into<String>, target: i64) -> Self {
        Self {
            gate_type: gate_type.into(),
            target,
            control: None,
        }
    }

    /// A controlled gate spec.
    pub fn controlled(gate_type: impl Into<String>, control: i64, target: i64) -> Self {
        Self {
            gate_type: gate_type.into(),
            target,
            control: Some(control),
        }
    }

    /// Shorthand for `CNOT(control, target)`.
    pub fn cnot(control: i64, target: i64) -> Self {
        Self::controlled("CNOT", control, target)
    }

    /// Build a spec from an already-typed gate.
    pub fn from_gate(gate: StandardGate, control: Option<i64>, target: i64) -> Self {
        Self {
            gate_type: gate.name().to_ascii_uppercase(),
            target,
            control,
        }
    }
}

/// A complete simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Number of qubits.
    #[serde(default = "default_num_qubits")]
    pub n_qubits: i64,
    /// Gates applied after initial-state preparation, in order.
    #[serde(default)]
    pub gates: Vec<GateSpec>,
    /// Per-qubit initial-state labels; all `|0⟩` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_states: Option<Vec<String>>,
    /// Number of measurement repetitions; the engine default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<i64>,
}

fn default_num_qubits() -> i64 {
    DEFAULT_NUM_QUBITS
}

impl SimulationRequest {
    /// A request over `n_qubits` with no gates and default settings.
    pub fn new(n_qubits: i64) -> Self {
        Self {
            n_qubits,
            gates: vec![],
            initial_states: None,
            repetitions: None,
        }
    }

    /// Append a gate.
    #[must_use]
    pub fn with_gate(mut self, gate: GateSpec) -> Self {
        self.gates.push(gate);
        self
    }

    /// Set the initial-state labels.
    #[must_use]
    pub fn with_initial_states<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_states = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the repetition count.
    #[must_use]
    pub fn with_repetitions(mut self, repetitions: i64) -> Self {
        self.repetitions = Some(repetitions);
        self
    }
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_QUBITS)
    }
}
