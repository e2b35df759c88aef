//! Statevector storage.

use num_complex::Complex64;

use crate::error::{SimError, SimResult};
use crate::gates::GateMatrix;

/// A statevector representing a quantum state.
///
/// Amplitudes are stored flat, indexed by the joint basis configuration.
/// Qubit 0 is the most significant bit of the index, so formatting an index
/// as an `n`-bit binary string yields the measurement bitstring directly.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// # Panics
    ///
    /// Panics if `2^num_qubits` does not fit in a `usize`. The engine never
    /// asks for more than [`QUBIT_CEILING`](crate::config::QUBIT_CEILING).
    pub fn new(num_qubits: usize) -> Self {
        assert!(
            num_qubits < usize::BITS as usize,
            "cannot allocate a {num_qubits}-qubit statevector"
        );
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Read-only view of the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Index mask selecting `qubit`'s bit.
    #[inline]
    fn mask(&self, qubit: usize) -> usize {
        1 << (self.num_qubits - 1 - qubit)
    }

    /// Apply a one- or two-qubit unitary to the given qubit lines.
    ///
    /// For a two-qubit matrix, `qubits[0]` is the high bit of the matrix
    /// index and `qubits[1]` the low bit. Operands must be distinct and in
    /// range; the gate applicator checks this before calling.
    pub fn apply(&mut self, matrix: &GateMatrix, qubits: &[usize]) -> SimResult<()> {
        match (matrix, qubits) {
            (GateMatrix::Single(m), &[q]) => {
                self.apply_single(m, q);
                Ok(())
            }
            (GateMatrix::Two(m), &[q0, q1]) => {
                self.apply_two(m, q0, q1);
                Ok(())
            }
            _ => Err(SimError::UnsupportedGate {
                gate: format!("{}-qubit matrix", matrix.num_qubits()),
                reason: format!("cannot act on {} operand(s)", qubits.len()),
            }),
        }
    }

    fn apply_single(&mut self, m: &[[Complex64; 2]; 2], qubit: usize) {
        let mask = self.mask(qubit);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    fn apply_two(&mut self, m: &[[Complex64; 4]; 4], q0: usize, q1: usize) {
        let hi = self.mask(q0);
        let lo = self.mask(q1);
        for i in 0..self.amplitudes.len() {
            if i & (hi | lo) == 0 {
                let idx = [i, i | lo, i | hi, i | hi | lo];
                let v = idx.map(|k| self.amplitudes[k]);
                for (row, &k) in m.iter().zip(&idx) {
                    self.amplitudes[k] = row
                        .iter()
                        .zip(&v)
                        .map(|(m_rc, v_c)| m_rc * v_c)
                        .sum();
                }
            }
        }
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Check that |ψ|² is within `tolerance` of 1.
    pub fn check_normalized(&self, tolerance: f64) -> SimResult<()> {
        let norm = self.norm_sqr();
        if (norm - 1.0).abs() > tolerance {
            return Err(SimError::NormalizationInvariant { norm, tolerance });
        }
        Ok(())
    }

    /// Born-rule probability of every basis outcome.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Convert measurement outcome to bitstring, qubit 0 first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
    }

    /// Whether two states agree amplitude-by-amplitude within `tolerance`.
    pub fn approx_eq(&self, other: &Statevector, tolerance: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - b).norm() < tolerance)
    }
}
