//! Property-based tests for circuit building.
//!
//! The builder must accept every well-formed request, emit the preparation
//! prefix before the user's gates, and reject anything that names a qubit
//! outside the register.

use bloch_ir::{CircuitBuilder, GateSpec, InitialState, IrError, StandardGate};
use proptest::prelude::*;

fn arb_gate(num_qubits: i64) -> impl Strategy<Value = GateSpec> {
    let single = (
        prop::sample::select(vec!["H", "X", "Y", "Z", "S", "S_INV", "T", "h", "sdg"]),
        0..num_qubits,
    )
        .prop_map(|(name, target)| GateSpec::new(name, target));

    if num_qubits < 2 {
        return single.boxed();
    }

    let cnot = (0..num_qubits, 1..num_qubits)
        .prop_map(move |(control, offset)| GateSpec::cnot(control, (control + offset) % num_qubits));

    prop_oneof![single, cnot].boxed()
}

fn arb_states(num_qubits: i64) -> impl Strategy<Value = Vec<InitialState>> {
    prop::collection::vec(prop::sample::select(InitialState::ALL.to_vec()), num_qubits as usize)
}

proptest! {
    #[test]
    fn valid_requests_build(
        (n, states, gates) in (1_i64..=8).prop_flat_map(|n| {
            (Just(n), arb_states(n), prop::collection::vec(arb_gate(n), 0..=16))
        })
    ) {
        let labels: Vec<&str> = states.iter().map(InitialState::label).collect();
        let circuit = CircuitBuilder::new(n)
            .initial_states(labels.as_slice())
            .gates(&gates)
            .build()
            .unwrap();

        let prefix_len: usize = states.iter().map(|s| s.preparation().len()).sum();
        prop_assert_eq!(circuit.len(), prefix_len + gates.len());
        prop_assert_eq!(circuit.num_qubits() as i64, n);

        // User gates follow the prefix, in order.
        for (inst, spec) in circuit.instructions()[prefix_len..].iter().zip(&gates) {
            let gate: StandardGate = spec.gate_type.parse().unwrap();
            prop_assert_eq!(inst.gate, gate);
            prop_assert_eq!(i64::from(inst.target().unwrap().0), spec.target);
            prop_assert_eq!(inst.control().map(|q| i64::from(q.0)), spec.control);
        }
    }

    #[test]
    fn out_of_range_targets_are_rejected(n in 1_i64..=8, offset in 0_i64..100) {
        let bad = GateSpec::new("X", n + offset);
        let err = CircuitBuilder::new(n).gates(&[bad]).build().unwrap_err();
        let is_out_of_range = matches!(err, IrError::QubitOutOfRange { .. });
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn non_positive_qubit_counts_are_rejected(n in i64::MIN..=0) {
        prop_assert_eq!(
            CircuitBuilder::new(n).build().unwrap_err(),
            IrError::InvalidQubitCount(n)
        );
    }
}
