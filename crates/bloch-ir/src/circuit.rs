//! Circuit construction and validation.

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::initial_state::InitialState;
use crate::instruction::Instruction;
use crate::qubit::QubitId;
use crate::request::GateSpec;

/// Widest circuit a [`CircuitBuilder`] accepts: 2^30 amplitudes.
///
/// [`CircuitBuilder::max_qubits`] can only lower this.
pub const MAX_QUBITS: u32 = 30;

/// An ordered, validated sequence of gate instructions over `num_qubits` lines.
///
/// Every instruction in a `Circuit` has the right arity for its gate, refers
/// only to qubits in `[0, num_qubits)` and never repeats a qubit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: u32,
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit with a given number of qubits.
    pub fn with_size(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            instructions: vec![],
        }
    }

    /// Build a circuit from a declarative description.
    ///
    /// The preparation prefix of each qubit's initial state is emitted first,
    /// in qubit order, followed by `gates` in the order given.
    pub fn build<S: AsRef<str>>(
        num_qubits: i64,
        initial_states: &[S],
        gates: &[GateSpec],
    ) -> IrResult<Self> {
        CircuitBuilder::new(num_qubits)
            .initial_states(initial_states)
            .gates(gates)
            .build()
    }

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate_instruction(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    fn validate_instruction(&self, instruction: &Instruction) -> IrResult<()> {
        let gate = instruction.gate;
        let got = instruction.qubits.len() as u32;
        if got != gate.num_qubits() {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got,
            });
        }

        for (i, qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit: i64::from(qubit.0),
                    num_qubits: self.num_qubits,
                    gate_name: Some(gate.name().to_string()),
                });
            }
            if instruction.qubits[..i].contains(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit: *qubit,
                    gate_name: Some(gate.name().to_string()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Gate shorthands
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::T, qubit))
    }

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// The instructions, in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Circuit depth: the longest chain of instructions sharing a qubit.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.num_qubits()];
        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .map(|q| levels[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                levels[q.index()] = level;
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }

    // =========================================================================
    // Standard circuits
    // =========================================================================

    /// Create a Bell state circuit: H on q0, then CNOT(q0, q1).
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size(2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size(n);
        if n == 0 {
            return Ok(circuit);
        }
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        Ok(circuit)
    }
}

/// Builds a [`Circuit`] from a declarative request, rejecting malformed input
/// with an [`IrError`].
///
/// ```rust
/// use bloch_ir::{CircuitBuilder, GateSpec};
///
/// let circuit = CircuitBuilder::new(2)
///     .initial_states(&["|+⟩", "|0⟩"])
///     .gates(&[GateSpec::cnot(0, 1)])
///     .build()
///     .unwrap();
///
/// // H from the |+⟩ preparation, then the CNOT.
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    num_qubits: i64,
    max_qubits: u32,
    initial_states: Option<Vec<String>>,
    gates: Vec<GateSpec>,
}

impl CircuitBuilder {
    /// Start a builder for `num_qubits` lines.
    pub fn new(num_qubits: i64) -> Self {
        Self {
            num_qubits,
            max_qubits: MAX_QUBITS,
            initial_states: None,
            gates: vec![],
        }
    }

    /// Reject circuits wider than `max_qubits`, capped at [`MAX_QUBITS`].
    #[must_use]
    pub fn max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits.min(MAX_QUBITS);
        self
    }

    /// Per-qubit initial-state labels. Omitted means all `|0⟩`.
    #[must_use]
    pub fn initial_states<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.initial_states = Some(labels.iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    /// The user gate list, in application order.
    #[must_use]
    pub fn gates(mut self, gates: &[GateSpec]) -> Self {
        self.gates = gates.to_vec();
        self
    }

    /// Validate the inputs and emit the circuit.
    pub fn build(self) -> IrResult<Circuit> {
        let num_qubits = self.validated_qubit_count()?;
        let initial_states = self.parse_initial_states(num_qubits)?;

        let mut circuit = Circuit::with_size(num_qubits);
        for (qubit, state) in initial_states.iter().enumerate() {
            for &gate in state.preparation() {
                circuit.apply(Instruction::single_qubit_gate(gate, QubitId(qubit as u32)))?;
            }
        }

        for spec in &self.gates {
            circuit.apply(lower_gate_spec(spec, num_qubits)?)?;
        }

        Ok(circuit)
    }

    fn validated_qubit_count(&self) -> IrResult<u32> {
        if self.num_qubits < 1 {
            return Err(IrError::InvalidQubitCount(self.num_qubits));
        }
        if self.num_qubits > i64::from(self.max_qubits) {
            return Err(IrError::TooManyQubits {
                num_qubits: self.num_qubits,
                max_qubits: self.max_qubits,
            });
        }
        Ok(self.num_qubits as u32)
    }

    fn parse_initial_states(&self, num_qubits: u32) -> IrResult<Vec<InitialState>> {
        match &self.initial_states {
            None => Ok(vec![InitialState::Zero; num_qubits as usize]),
            Some(labels) => {
                if labels.len() != num_qubits as usize {
                    return Err(IrError::InitialStateCount {
                        expected: num_qubits,
                        got: labels.len(),
                    });
                }
                labels.iter().map(|label| label.parse::<InitialState>()).collect()
            }
        }
    }
}

/// Turn one request gate into a typed instruction.
fn lower_gate_spec(spec: &GateSpec, num_qubits: u32) -> IrResult<Instruction> {
    let gate: StandardGate = spec.gate_type.parse()?;
    let target = qubit_index(spec.target, num_qubits, gate)?;

    match (gate.num_qubits(), spec.control) {
        (1, None) => Ok(Instruction::single_qubit_gate(gate, target)),
        (1, Some(_)) => Err(IrError::QubitCountMismatch {
            gate_name: gate.name().to_string(),
            expected: 1,
            got: 2,
        }),
        (_, None) => Err(IrError::MissingControl(gate.name().to_string())),
        (_, Some(control)) => {
            let control = qubit_index(control, num_qubits, gate)?;
            if control == target {
                return Err(IrError::DuplicateQubit {
                    qubit: target,
                    gate_name: Some(gate.name().to_string()),
                });
            }
            Ok(Instruction::two_qubit_gate(gate, control, target))
        }
    }
}

fn qubit_index(index: i64, num_qubits: u32, gate: StandardGate) -> IrResult<QubitId> {
    match u32::try_from(index) {
        Ok(i) if i < num_qubits => Ok(QubitId(i)),
        _ => Err(IrError::QubitOutOfRange {
            qubit: index,
            num_qubits,
            gate_name: Some(gate.name().to_string()),
        }),
    }
}
