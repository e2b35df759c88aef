//! Gates command implementation.

use console::style;

use bloch_ir::{InitialState, StandardGate};

/// Names accepted for a gate in a request's `type` field.
fn request_names(gate: StandardGate) -> &'static str {
    match gate {
        StandardGate::H => "H",
        StandardGate::X => "X",
        StandardGate::Y => "Y",
        StandardGate::Z => "Z",
        StandardGate::S => "S",
        StandardGate::Sdg => "S_INV, SDG",
        StandardGate::T => "T",
        StandardGate::CX => "CNOT, CX",
    }
}

/// Execute the gates command.
pub fn execute() {
    println!("{}", style("Gates:").bold());
    for gate in StandardGate::ALL {
        let operands = if gate.num_qubits() == 2 {
            "control, target"
        } else {
            "target"
        };
        println!(
            "  {:<12} {:<5} ({operands})",
            style(request_names(gate)).cyan(),
            gate.symbol()
        );
    }

    println!();
    println!("{}", style("Initial states:").bold());
    for state in InitialState::ALL {
        let prefix: Vec<&str> = state.preparation().iter().map(|g| g.symbol()).collect();
        let prefix = if prefix.is_empty() {
            "-".to_string()
        } else {
            prefix.join(", ")
        };
        println!("  {:<5} {}", style(state.label()).cyan(), style(prefix).dim());
    }
}
