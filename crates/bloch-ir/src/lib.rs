//! Bloch Circuit Representation
//!
//! This crate holds the data structures a Bloch simulation runs on. It turns a
//! declarative [`SimulationRequest`] into a validated [`Circuit`].
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses one qubit line
//! - **Gates**: [`StandardGate`] is the closed gate set (H, X, Y, Z, S, S†, T, CNOT)
//! - **Initial states**: [`InitialState`] labels (`|0⟩`, `|1⟩`, `|+⟩`, `|-⟩`, `|i⟩`, `|-i⟩`)
//!   and the gate prefix that prepares each one
//! - **Instructions**: [`Instruction`] pairs a gate with its operands
//! - **Circuit**: [`Circuit`] and [`CircuitBuilder`] for construction and validation
//! - **Requests**: [`SimulationRequest`] and [`GateSpec`], the JSON-facing shapes
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use bloch_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Example: From a Request
//!
//! ```rust
//! use bloch_ir::{Circuit, GateSpec};
//!
//! let circuit = Circuit::build(1, &["|1⟩"], &[GateSpec::new("H", 0)]).unwrap();
//!
//! // X prepares |1⟩, then the user's H.
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Request type | Qubits |
//! |------|--------------|--------|
//! | Hadamard | `H` | 1 |
//! | Pauli | `X`, `Y`, `Z` | 1 |
//! | Phase | `S`, `S_INV` (`SDG`), `T` | 1 |
//! | Controlled-NOT | `CNOT` (`CX`) | 2 (control, target) |

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod initial_state;
pub mod instruction;
pub mod qubit;
pub mod request;

pub use circuit::{Circuit, CircuitBuilder, MAX_QUBITS};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use initial_state::InitialState;
pub use instruction::Instruction;
pub use qubit::QubitId;
pub use request::{DEFAULT_NUM_QUBITS, GateSpec, SimulationRequest};
