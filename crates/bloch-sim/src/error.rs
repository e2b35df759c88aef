//! Error types for the simulation crate.

use thiserror::Error;

use bloch_ir::IrError;

use crate::config::ConfigError;

/// Errors produced while simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The request was rejected while building the circuit.
    #[error("Invalid circuit: {0}")]
    Validation(#[from] IrError),

    /// Repetition count must be at least 1.
    #[error("Repetitions must be at least 1, got {0}")]
    InvalidShots(i64),

    /// A gate could not be mapped to a unitary on the given operands.
    ///
    /// Circuits produced by the builder never trigger this.
    #[error("Unsupported gate '{gate}': {reason}")]
    UnsupportedGate {
        /// Gate name.
        gate: String,
        /// Why the gate cannot be applied.
        reason: String,
    },

    /// The state vector drifted away from unit norm.
    #[error("Normalization invariant violated: |ψ|² = {norm} (tolerance {tolerance:e})")]
    NormalizationInvariant {
        /// Observed squared norm.
        norm: f64,
        /// Allowed deviation from 1.
        tolerance: f64,
    },

    /// Engine configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SimError {
    /// Whether this error rejects the caller's request.
    ///
    /// `false` means an internal fault: a bad gate mapping or numerical drift.
    pub fn is_validation(&self) -> bool {
        match self {
            SimError::Validation(e) => e.is_validation(),
            SimError::InvalidShots(_) => true,
            SimError::UnsupportedGate { .. }
            | SimError::NormalizationInvariant { .. }
            | SimError::Config(_) => false,
        }
    }
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
