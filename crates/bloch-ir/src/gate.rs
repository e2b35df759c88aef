//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;

/// The fixed gate set understood by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// Controlled-X (CNOT) gate. Operands are `[control, target]`.
    CX,
}

impl StandardGate {
    /// Every supported gate, in display order.
    pub const ALL: [StandardGate; 8] = [
        StandardGate::H,
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::S,
        StandardGate::Sdg,
        StandardGate::T,
        StandardGate::CX,
    ];

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::CX => "cx",
        }
    }

    /// Symbol drawn on the target wire in a circuit diagram.
    pub fn symbol(&self) -> &'static str {
        match self {
            StandardGate::H => "H",
            StandardGate::X | StandardGate::CX => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::S => "S",
            StandardGate::Sdg => "S^-1",
            StandardGate::T => "T",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardGate {
    type Err = IrError;

    /// Parse a gate type as it appears in a simulation request.
    ///
    /// Matching is case-insensitive; `S_INV`/`SDG` and `CNOT`/`CX` are aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(StandardGate::H),
            "X" => Ok(StandardGate::X),
            "Y" => Ok(StandardGate::Y),
            "Z" => Ok(StandardGate::Z),
            "S" => Ok(StandardGate::S),
            "S_INV" | "SDG" => Ok(StandardGate::Sdg),
            "T" => Ok(StandardGate::T),
            "CNOT" | "CX" => Ok(StandardGate::CX),
            _ => Err(IrError::UnknownGate(s.to_string())),
        }
    }
}
