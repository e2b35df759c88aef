//! Gate unitaries and the instruction applicator.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use bloch_ir::{Instruction, StandardGate};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// A gate unitary in the computational basis, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateMatrix {
    /// 2×2 unitary.
    Single([[Complex64; 2]; 2]),
    /// 4×4 unitary; the first operand is the high bit of the row/column index.
    Two([[Complex64; 4]; 4]),
}

impl GateMatrix {
    /// The unitary for a standard gate.
    pub fn for_gate(gate: StandardGate) -> Self {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        match gate {
            StandardGate::H => GateMatrix::Single([[h, h], [h, -h]]),
            StandardGate::X => GateMatrix::Single([[ZERO, ONE], [ONE, ZERO]]),
            StandardGate::Y => GateMatrix::Single([[ZERO, -I], [I, ZERO]]),
            StandardGate::Z => GateMatrix::Single([[ONE, ZERO], [ZERO, -ONE]]),
            StandardGate::S => GateMatrix::Single([[ONE, ZERO], [ZERO, I]]),
            StandardGate::Sdg => GateMatrix::Single([[ONE, ZERO], [ZERO, -I]]),
            StandardGate::T => GateMatrix::Single([
                [ONE, ZERO],
                [ZERO, Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)],
            ]),
            StandardGate::CX => GateMatrix::Two([
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, ZERO, ONE],
                [ZERO, ZERO, ONE, ZERO],
            ]),
        }
    }

    /// Number of qubits the matrix acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            GateMatrix::Single(_) => 1,
            GateMatrix::Two(_) => 2,
        }
    }

    /// Whether `M† M` equals the identity within `tolerance`.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        match self {
            GateMatrix::Single(m) => is_unitary(m, tolerance),
            GateMatrix::Two(m) => is_unitary(m, tolerance),
        }
    }
}

fn is_unitary<const N: usize>(m: &[[Complex64; N]; N], tolerance: f64) -> bool {
    (0..N).all(|r| {
        (0..N).all(|c| {
            let dot: Complex64 = (0..N).map(|k| m[k][r].conj() * m[k][c]).sum();
            let expected = if r == c { ONE } else { ZERO };
            (dot - expected).norm() < tolerance
        })
    })
}

/// Apply one circuit instruction to the state.
///
/// Operands are re-checked against the state so a hand-built [`Instruction`]
/// cannot index outside the amplitude array. On error the state is untouched.
pub fn apply_instruction(state: &mut Statevector, instruction: &Instruction) -> SimResult<()> {
    let gate = instruction.gate;
    let matrix = GateMatrix::for_gate(gate);
    let unsupported = |reason: String| SimError::UnsupportedGate {
        gate: gate.name().to_string(),
        reason,
    };

    if instruction.qubits.len() != matrix.num_qubits() {
        return Err(unsupported(format!(
            "expects {} operand(s), got {}",
            matrix.num_qubits(),
            instruction.qubits.len()
        )));
    }

    let mut qubits = Vec::with_capacity(instruction.qubits.len());
    for qubit in &instruction.qubits {
        let q = qubit.index();
        if q >= state.num_qubits() {
            return Err(unsupported(format!(
                "operand {qubit} outside a {}-qubit state",
                state.num_qubits()
            )));
        }
        if qubits.contains(&q) {
            return Err(unsupported(format!("operand {qubit} repeated")));
        }
        qubits.push(q);
    }

    state.apply(&matrix, &qubits)
}
