// src/operations/mod.rs

//! Concrete gate operations.
//!
//! Each variant is one of the invocation shapes a circuit exposes:
//! plain, single-controlled or multi-controlled, each with or without a
//! rotation angle. Values are produced by [`crate::gates::resolve`].

use crate::gates::{operation_name, ControlArity, Gate};
use std::fmt;

/// A fully resolved gate invocation.
#[derive(Debug, Clone, PartialEq)] // f64 angles rule out Eq
pub enum Operation {
    /// `name(target)`
    Single {
        gate: Gate,
        target: usize,
    },

    /// `name(angle, target)`
    Rotation {
        gate: Gate,
        /// Radians
        angle: f64,
        target: usize,
    },

    /// `cname(control, target)`
    Controlled {
        gate: Gate,
        control: usize,
        target: usize,
    },

    /// `cname(angle, control, target)`
    ControlledRotation {
        gate: Gate,
        angle: f64,
        control: usize,
        target: usize,
    },

    /// `mcname(controls, target)`
    MultiControlled {
        gate: Gate,
        controls: Vec<usize>,
        target: usize,
    },

    /// `mcname(angle, controls, target)`
    MultiControlledRotation {
        gate: Gate,
        angle: f64,
        controls: Vec<usize>,
        target: usize,
    },
}

impl Operation {
    /// The base gate this operation applies.
    pub fn gate(&self) -> Gate {
        match self {
            Operation::Single { gate, .. }
            | Operation::Rotation { gate, .. }
            | Operation::Controlled { gate, .. }
            | Operation::ControlledRotation { gate, .. }
            | Operation::MultiControlled { gate, .. }
            | Operation::MultiControlledRotation { gate, .. } => *gate,
        }
    }

    /// The qubit the gate acts on.
    pub fn target(&self) -> usize {
        match self {
            Operation::Single { target, .. }
            | Operation::Rotation { target, .. }
            | Operation::Controlled { target, .. }
            | Operation::ControlledRotation { target, .. }
            | Operation::MultiControlled { target, .. }
            | Operation::MultiControlledRotation { target, .. } => *target,
        }
    }

    /// Control qubits in the order they were requested.
    pub fn controls(&self) -> Vec<usize> {
        match self {
            Operation::Single { .. } | Operation::Rotation { .. } => Vec::new(),
            Operation::Controlled { control, .. } | Operation::ControlledRotation { control, .. } => vec![*control],
            Operation::MultiControlled { controls, .. } | Operation::MultiControlledRotation { controls, .. } => {
                controls.clone()
            }
        }
    }

    /// Rotation angle in radians, for the rotation shapes only.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Operation::Rotation { angle, .. }
            | Operation::ControlledRotation { angle, .. }
            | Operation::MultiControlledRotation { angle, .. } => Some(*angle),
            _ => None,
        }
    }

    /// Control arity implied by the shape.
    pub fn arity(&self) -> ControlArity {
        match self {
            Operation::Single { .. } | Operation::Rotation { .. } => ControlArity::None,
            Operation::Controlled { .. } | Operation::ControlledRotation { .. } => ControlArity::Single,
            Operation::MultiControlled { .. } | Operation::MultiControlledRotation { .. } => ControlArity::Multi,
        }
    }

    /// Concrete identifier, e.g. `h`, `cx`, `mcrz`.
    pub fn name(&self) -> &'static str {
        operation_name(self.gate(), self.arity())
    }

    /// Every qubit the operation touches: controls first, then the target.
    pub fn involved_qubits(&self) -> Vec<usize> {
        let mut qubits = self.controls();
        qubits.push(self.target());
        qubits
    }
}

impl fmt::Display for Operation {
    /// Prints the invocation as `name(args...)`, e.g. `mcrz(1.57, [0, 1], 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        if let Some(angle) = self.angle() {
            write!(f, "{}, ", angle)?;
        }
        match self {
            Operation::Controlled { control, .. } | Operation::ControlledRotation { control, .. } => {
                write!(f, "{}, ", control)?;
            }
            Operation::MultiControlled { controls, .. } | Operation::MultiControlledRotation { controls, .. } => {
                write!(f, "{:?}, ", controls)?;
            }
            _ => {}
        }
        write!(f, "{})", self.target())
    }
}
