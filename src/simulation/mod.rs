// src/simulation/mod.rs

//! State-vector evolution behind the reference [`crate::circuits::Circuit`].
//!
//! The engine is internal; this module exposes the gate matrices, the
//! snapshot type recorded by `Circuit::report`, and measurement results.

mod results;
pub(crate) mod engine;

pub use results::RunResult;

use crate::core::{PlayError, StateVector};
use crate::gates::Gate;
use num_complex::Complex;

/// Returns the 2x2 unitary for `gate`.
///
/// # Errors
/// * `InvalidArgument` if `angle` is missing for an angle gate or given for a fixed one.
pub fn gate_matrix(gate: Gate, angle: Option<f64>) -> Result<[[Complex<f64>; 2]; 2], PlayError> {
    match (gate.takes_angle(), angle) {
        (true, Some(theta)) => Ok(engine::single_qubit_matrix(gate, theta)),
        (false, None) => Ok(engine::single_qubit_matrix(gate, 0.0)),
        (true, None) => Err(PlayError::invalid_argument(format!("gate '{}' requires an angle", gate))),
        (false, Some(_)) => Err(PlayError::invalid_argument(format!("gate '{}' does not take an angle", gate))),
    }
}

/// A named copy of a circuit's state, taken after some step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    label: String,
    state: StateVector,
}

impl Snapshot {
    pub(crate) fn new(label: String, state: StateVector) -> Self {
        Self { label, state }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_matrices_are_unitary() {
        for gate in Gate::ALL {
            let angle = gate.takes_angle().then_some(0.731);
            let m = gate_matrix(gate, angle).unwrap();
            // M * M^dagger == I
            for r in 0..2 {
                for c in 0..2 {
                    let v: Complex<f64> = (0..2).map(|k| m[r][k] * m[c][k].conj()).sum();
                    let expected = if r == c { 1.0 } else { 0.0 };
                    assert!((v - Complex::new(expected, 0.0)).norm() < 1e-12, "{} not unitary", gate);
                }
            }
        }
    }

    #[test]
    fn test_gate_matrix_checks_angle() {
        assert!(gate_matrix(Gate::Rx, None).is_err());
        assert!(gate_matrix(Gate::H, Some(1.0)).is_err());
    }
}
