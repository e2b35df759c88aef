//! End-to-end tests of the `bloch` binary.

use std::io::Write;
use std::process::{Command, Output};

fn bloch(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bloch"));
    cmd.args(args).env("NO_COLOR", "1");
    for key in [
        "BLOCH_CONFIG",
        "BLOCH_DEFAULT_SHOTS",
        "BLOCH_MAX_QUBITS",
        "BLOCH_SEED",
        "BLOCH_NORMALIZATION_TOLERANCE",
        "BLOCH_LOG_LEVEL",
        "BLOCH_LOG_FORMAT",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.envs(env.iter().copied());
    cmd.output().unwrap()
}

#[test]
fn test_invalid_env_value_is_reported() {
    let output = bloch(&["gates"], &[("BLOCH_SEED", "notanumber")]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring invalid BLOCH_SEED: notanumber"), "{stderr}");
}

#[test]
fn test_out_of_range_config_is_rejected() {
    let output = bloch(&["gates"], &[("BLOCH_MAX_QUBITS", "64")]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_qubits"), "{stderr}");
}

#[test]
fn test_run_json_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"n_qubits": 1, "gates": [{{"type": "X", "target": 0}}], "repetitions": 25}}"#
    )
    .unwrap();

    let output = bloch(
        &["run", "-i", file.path().to_str().unwrap(), "-f", "json", "--seed", "3"],
        &[],
    );
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["counts"]["1"], 25);
}
