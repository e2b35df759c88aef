//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors raised while building or validating a circuit.
///
/// Every variant is a request-level validation failure: it is detected
/// before any simulation state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Circuit must have at least one qubit.
    #[error("Qubit count must be at least 1, got {0}")]
    InvalidQubitCount(i64),

    /// Circuit is larger than the simulator accepts.
    #[error("Circuit has {num_qubits} qubits but at most {max_qubits} are supported")]
    TooManyQubits {
        /// Requested number of qubits.
        num_qubits: i64,
        /// Configured upper bound.
        max_qubits: u32,
    },

    /// Wrong number of initial-state labels.
    #[error("Expected {expected} initial states (one per qubit), got {got}")]
    InitialStateCount {
        /// Number of qubits in the circuit.
        expected: u32,
        /// Number of labels supplied.
        got: usize,
    },

    /// Initial-state label is not one of the supported basis preparations.
    #[error("Unknown initial state '{0}' (expected one of |0⟩, |1⟩, |+⟩, |-⟩, |i⟩, |-i⟩)")]
    UnknownInitialState(String),

    /// Gate type is not part of the supported gate set.
    #[error("Unknown gate type '{0}'")]
    UnknownGate(String),

    /// Qubit index lies outside `[0, num_qubits)`.
    #[error("Qubit index {qubit} out of range for {num_qubits}-qubit circuit{}", format_gate_context(.gate_name))]
    QubitOutOfRange {
        /// The offending index as supplied by the caller.
        qubit: i64,
        /// Number of qubits in the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Two-qubit gate was given without its control qubit.
    #[error("Gate '{0}' requires a control qubit")]
    MissingControl(String),

    /// The same qubit was used twice in one operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate received the wrong number of operands.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },
}

impl IrError {
    /// Whether this error rejects the request (as opposed to an internal fault).
    ///
    /// All IR errors are validation errors today.
    pub fn is_validation(&self) -> bool {
        true
    }
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
