// src/lib.rs

//! `qplay` - state tables and gate dispatch for small quantum circuits
//!
//! Two pieces do the work: a resolver that turns a base gate name plus a
//! control list into the right concrete operation (`x` with one control is
//! `cx`, with two is `mcx`), and a renderer that prints an amplitude vector
//! as a table of outcomes, amplitudes, phases, coloured bars and
//! probabilities.

pub mod core;
pub mod gates;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod display;
pub mod session;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{PlayError, StateVector};
pub use gates::{add_gate, resolve, ControlArity, Gate, GateKind, GateRequest};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder, GateCircuit};
pub use simulation::{RunResult, Snapshot};
pub use display::{complex_to_rgb, complex_to_rgb_ints, render_state_table, DisplayMode, TableOptions};
pub use session::SingleQubit;
pub use validation::{check_dimension, check_normalization, validate_state};

// Example 1: Bell state table
// Builds the Bell pair through the resolver and renders the live state.
/// ```
/// use qplay::{CircuitBuilder, DisplayMode, Gate, GateRequest, TableOptions};
///
/// let circuit = CircuitBuilder::new(2)
///     .add(GateRequest::new(Gate::H, 0))
///     .add(GateRequest::new(Gate::X, 1).controlled_by([0])) // resolves to cx(0, 1)
///     .build()
///     .unwrap();
///
/// let table = TableOptions::default()
///     .with_mode(DisplayMode::Plain)
///     .render_state(circuit.state())
///     .unwrap();
/// println!("{}", table);
///
/// let rows: Vec<&str> = table.lines().skip(3).collect();
/// assert!(rows[0].contains("0.7071"));
/// assert!(rows[3].contains("0.5000"));
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Resolving without a circuit
/// ```
/// use qplay::{resolve, Gate, GateRequest, Operation};
///
/// let request = GateRequest::new(Gate::Rz, 3).controlled_by([0, 1]).with_angle(1.57);
/// let op = resolve(&request).unwrap();
/// assert_eq!(op.name(), "mcrz");
/// assert_eq!(op.to_string(), "mcrz(1.57, [0, 1], 3)");
/// assert!(matches!(op, Operation::MultiControlledRotation { .. }));
/// ```
#[doc(hidden)]
const _: () = ();
