// src/session/mod.rs

//! A one-qubit playground: apply gates by name, one step at a time, and look
//! at the state table after each step.

use crate::circuits::Circuit;
use crate::core::PlayError;
use crate::display::{DisplayMode, TableOptions};
use crate::gates::{Gate, GateRequest};
use crate::simulation::RunResult;

const STEP_PREFIX: &str = "Step";

/// Stateful wrapper around a single-qubit [`Circuit`].
///
/// Angles are taken in degrees. Each reported step is stored as a snapshot
/// labelled `Step 1`, `Step 2`, ...
#[derive(Debug, Clone)]
pub struct SingleQubit {
    display: DisplayMode,
    circuit: Circuit,
}

impl SingleQubit {
    pub fn new(display: DisplayMode) -> Result<Self, PlayError> {
        Ok(Self { display, circuit: Circuit::new(1)? })
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Applies `gate` (any case) to the qubit.
    ///
    /// `angle_degrees` must be given exactly for `p`, `rx`, `ry` and `rz`.
    /// When `report` is set, the new state is recorded as the next step.
    pub fn apply_gate(&mut self, gate: &str, angle_degrees: Option<f64>, report: bool) -> Result<(), PlayError> {
        let gate: Gate = gate.to_lowercase().parse()?;
        let request = GateRequest { gate, controls: Vec::new(), target: 0, angle: angle_degrees.map(f64::to_radians) };
        self.circuit.add_gate(&request)?;
        if report {
            let label = format!("{} {}", STEP_PREFIX, self.last_step() + 1);
            self.circuit.report(label);
        }
        Ok(())
    }

    /// Renders the latest step's snapshot, or the live state before any step.
    pub fn get_state(&self) -> Result<String, PlayError> {
        let options = TableOptions::default().with_mode(self.display);
        match self.circuit.reports().last() {
            Some(snapshot) => options.render_state(snapshot.state()),
            None => options.render_state(self.circuit.state()),
        }
    }

    /// Drops every gate and step, returning to `|0>`.
    pub fn reset(&mut self) -> Result<(), PlayError> {
        self.circuit = Circuit::new(1)?;
        Ok(())
    }

    /// Number of recorded steps.
    pub fn last_step(&self) -> usize {
        self.circuit.reports().len()
    }

    /// Samples measurements of the current state.
    pub fn run(&self, shots: usize, seed: Option<u64>) -> Result<RunResult, PlayError> {
        self.circuit.run(shots, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered() {
        let mut q = SingleQubit::new(DisplayMode::Rich).unwrap();
        q.apply_gate("H", None, true).unwrap();
        q.apply_gate("rz", Some(90.0), true).unwrap();
        q.apply_gate("x", None, false).unwrap();
        assert_eq!(q.last_step(), 2);
        assert!(q.circuit().snapshot("Step 2").is_ok());
        assert_eq!(q.circuit().len(), 3);
    }

    #[test]
    fn test_angle_required_for_rotation() {
        let mut q = SingleQubit::new(DisplayMode::Plain).unwrap();
        let err = q.apply_gate("ry", None, true).unwrap_err();
        assert!(matches!(err, PlayError::InvalidArgument { .. }));
        assert_eq!(q.last_step(), 0);
    }

    #[test]
    fn test_reset_clears_steps() {
        let mut q = SingleQubit::new(DisplayMode::Rich).unwrap();
        q.apply_gate("x", None, true).unwrap();
        q.reset().unwrap();
        assert_eq!(q.last_step(), 0);
        assert!(q.circuit().is_empty());
    }
}
