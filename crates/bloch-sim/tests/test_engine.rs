//! End-to-end tests for the simulation engine.

use std::f64::consts::FRAC_1_SQRT_2;

use bloch_ir::{Circuit, CircuitBuilder, GateSpec, InitialState, IrError, QubitId, SimulationRequest};
use bloch_sim::{
    Counts, SimConfig, SimError, SimulationEngine, Statevector, apply_instruction,
};
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SHOTS: i64 = 500;

fn engine(seed: u64) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    })
    .unwrap()
}

fn zeros(n: usize) -> Vec<&'static str> {
    vec!["|0⟩"; n]
}

fn assert_amplitudes(state: &Statevector, expected: &[Complex64]) {
    assert_eq!(state.amplitudes().len(), expected.len());
    for (i, (a, e)) in state.amplitudes().iter().zip(expected).enumerate() {
        assert!((a - e).norm() < 1e-10, "amplitude {i}: got {a}, expected {e}");
    }
}

// ---------------------------------------------------------------------------
// Sampling statistics
// ---------------------------------------------------------------------------

#[test]
fn hadamard_is_fair_within_three_sigma() {
    let counts = engine(2024)
        .run(1, &zeros(1), &[GateSpec::new("H", 0)], SHOTS)
        .unwrap();

    // Binomial(500, 0.5): σ = √125 ≈ 11.2
    let three_sigma = 3.0 * (SHOTS as f64 * 0.25).sqrt();
    assert_eq!(counts.len(), 2);
    for key in ["0", "1"] {
        let deviation = (f64::from(counts.get(key)) - 250.0).abs();
        assert!(deviation <= three_sigma, "{key}: {}", counts.get(key));
    }
}

#[test]
fn bell_pair_is_perfectly_correlated() {
    let gates = [GateSpec::new("H", 0), GateSpec::cnot(0, 1)];
    let counts = engine(99).run(2, &zeros(2), &gates, SHOTS).unwrap();

    assert_eq!(counts.get("01"), 0);
    assert_eq!(counts.get("10"), 0);
    assert_eq!(counts.get("00") + counts.get("11"), 500);
    let three_sigma = 3.0 * (SHOTS as f64 * 0.25).sqrt();
    assert!((f64::from(counts.get("00")) - 250.0).abs() <= three_sigma);
}

#[test]
fn x_only_circuit_is_deterministic() {
    let gates = [GateSpec::new("X", 0), GateSpec::new("X", 2), GateSpec::new("X", 3)];
    // Without a seed: the outcome must not depend on randomness at all.
    let counts = SimulationEngine::default()
        .run(4, &zeros(4), &gates, SHOTS)
        .unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("1011"), 500);
}

#[test]
fn counts_sum_to_repetitions_and_keys_have_width_n() {
    let gates = [
        GateSpec::new("H", 0),
        GateSpec::new("H", 1),
        GateSpec::new("T", 1),
        GateSpec::cnot(1, 2),
        GateSpec::new("Y", 2),
    ];
    for reps in [1, 7, 500, 1234] {
        let counts = engine(5).run(3, &zeros(3), &gates, reps).unwrap();
        assert_eq!(i64::from(counts.total_shots()), reps);
        assert!(counts.iter().all(|(k, _)| k.len() == 3));
        assert!(counts.iter().all(|(k, _)| k.chars().all(|c| c == '0' || c == '1')));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let gates = [GateSpec::new("H", 0), GateSpec::new("H", 1), GateSpec::new("H", 2)];
    let a = engine(42).run(3, &zeros(3), &gates, SHOTS).unwrap();
    let b = engine(42).run(3, &zeros(3), &gates, SHOTS).unwrap();
    assert_eq!(a, b);

    let c = SimulationEngine::default()
        .run_with_rng(3, &zeros(3), &gates, SHOTS, StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a, c);
}

// ---------------------------------------------------------------------------
// Gate algebra
// ---------------------------------------------------------------------------

#[test]
fn s_four_times_is_identity_on_every_initial_state() {
    let engine = SimulationEngine::default();
    for state in InitialState::ALL {
        let labels = [state.label()];
        let reference = CircuitBuilder::new(1).initial_states(labels.as_slice()).build().unwrap();
        let cycled = CircuitBuilder::new(1)
            .initial_states(labels.as_slice())
            .gates(&vec![GateSpec::new("S", 0); 4])
            .build()
            .unwrap();
        let inverted = CircuitBuilder::new(1)
            .initial_states(labels.as_slice())
            .gates(&[GateSpec::new("S", 0), GateSpec::new("S_INV", 0)])
            .build()
            .unwrap();

        let expected = engine.statevector(&reference).unwrap();
        assert!(engine.statevector(&cycled).unwrap().approx_eq(&expected, 1e-10), "{state}");
        assert!(engine.statevector(&inverted).unwrap().approx_eq(&expected, 1e-10), "{state}");
    }
}

#[test]
fn initial_states_prepare_expected_amplitudes() {
    let engine = SimulationEngine::default();
    let h = FRAC_1_SQRT_2;
    let c = |re: f64, im: f64| Complex64::new(re, im);

    let cases = [
        ("|0⟩", [c(1.0, 0.0), c(0.0, 0.0)]),
        ("|1⟩", [c(0.0, 0.0), c(1.0, 0.0)]),
        ("|+⟩", [c(h, 0.0), c(h, 0.0)]),
        // X, H, Z: Z maps (|0⟩ - |1⟩)/√2 back onto the + superposition.
        ("|-⟩", [c(h, 0.0), c(h, 0.0)]),
        ("|i⟩", [c(h, 0.0), c(0.0, h)]),
        ("|-i⟩", [c(h, 0.0), c(0.0, -h)]),
    ];
    for (label, expected) in cases {
        let circuit = Circuit::build(1, &[label], &[]).unwrap();
        assert_amplitudes(&engine.statevector(&circuit).unwrap(), &expected);
    }
}

#[test]
fn cnot_respects_control_and_target_order() {
    let engine = SimulationEngine::default();
    // |10⟩ with control q0 = 1 flips q1.
    let counts = engine
        .run(2, &["|1⟩", "|0⟩"], &[GateSpec::cnot(0, 1)], 50)
        .unwrap();
    assert_eq!(counts.get("11"), 50);

    // Reversed operands: control q1 = 0, nothing happens.
    let counts = engine
        .run(2, &["|1⟩", "|0⟩"], &[GateSpec::cnot(1, 0)], 50)
        .unwrap();
    assert_eq!(counts.get("10"), 50);
}

#[test]
fn normalization_holds_after_every_gate() {
    let mut circuit = Circuit::ghz(5).unwrap();
    for q in 0..5 {
        circuit.t(QubitId(q)).unwrap().h(QubitId(q)).unwrap().s(QubitId(q)).unwrap();
    }

    let mut state = Statevector::new(circuit.num_qubits());
    for inst in circuit.instructions() {
        apply_instruction(&mut state, inst).unwrap();
        assert!((state.norm_sqr() - 1.0).abs() < 1e-9, "after {inst}");
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn expect_validation(result: Result<Counts, SimError>) -> SimError {
    let err = result.expect_err("request should be rejected");
    assert!(err.is_validation(), "{err}");
    err
}

#[test]
fn invalid_requests_are_rejected_without_histogram() {
    let engine = SimulationEngine::default();

    let err = expect_validation(engine.run::<&str>(0, &[], &[], SHOTS));
    assert!(matches!(err, SimError::Validation(IrError::InvalidQubitCount(0))));

    let err = expect_validation(engine.run(2, &zeros(2), &[GateSpec::new("H", 2)], SHOTS));
    assert!(matches!(err, SimError::Validation(IrError::QubitOutOfRange { qubit: 2, .. })));

    let err = expect_validation(engine.run(2, &zeros(2), &[GateSpec::cnot(-1, 0)], SHOTS));
    assert!(matches!(err, SimError::Validation(IrError::QubitOutOfRange { qubit: -1, .. })));

    let err = expect_validation(engine.run(2, &zeros(2), &[GateSpec::new("SWAP", 0)], SHOTS));
    assert!(matches!(err, SimError::Validation(IrError::UnknownGate(_))));

    let err = expect_validation(engine.run(2, &["|0⟩", "|ψ⟩"], &[], SHOTS));
    assert!(matches!(err, SimError::Validation(IrError::UnknownInitialState(_))));

    let err = expect_validation(engine.run(2, &zeros(2), &[GateSpec::cnot(1, 1)], SHOTS));
    assert!(matches!(err, SimError::Validation(IrError::DuplicateQubit { .. })));

    let err = expect_validation(engine.run(1, &zeros(1), &[], 0));
    assert!(matches!(err, SimError::InvalidShots(0)));
}

#[test]
fn simulate_reports_diagram_with_preparation_gates() {
    let request = SimulationRequest::new(2)
        .with_initial_states(["|1⟩", "|0⟩"])
        .with_gate(GateSpec::cnot(0, 1))
        .with_repetitions(20);

    let response = engine(1).simulate(&request).unwrap();
    assert_eq!(response.counts.get("11"), 20);
    assert_eq!(response.circuit, "0          1\n│          │\nX          │\n│          │\n@──────────X\n│          │\nM('final')─M");

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["counts"]["11"], 20);
}

#[test]
fn simulate_accepts_minimal_json_request() {
    let request: SimulationRequest =
        serde_json::from_str(r#"{"gates": [{"type": "h", "target": 1}]}"#).unwrap();
    let response = engine(8).simulate(&request).unwrap();

    assert_eq!(response.counts.total_shots(), 500);
    assert!(response.counts.iter().all(|(k, _)| k.starts_with('0')));
}
