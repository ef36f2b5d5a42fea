// src/gates/mod.rs

//! Gate resolution.
//!
//! A caller names a base gate, lists zero or more control qubits, picks a
//! target and (for rotation-style gates) an angle. The resolver turns that
//! request into exactly one concrete [`Operation`] and hands it to a
//! [`GateCircuit`], so the caller never has to spell `cx` or `mcrz` itself.

use crate::circuits::GateCircuit;
use crate::core::PlayError;
use crate::operations::Operation;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Base single-qubit gates understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gate {
    /// Hadamard
    H,
    /// Pauli X
    X,
    /// Pauli Y
    Y,
    /// Pauli Z
    Z,
    /// Phase, `diag(1, e^(iθ))`
    P,
    /// Rotation about X
    Rx,
    /// Rotation about Y
    Ry,
    /// Rotation about Z
    Rz,
}

/// Whether a gate takes a rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// `h`, `x`, `y`, `z`
    Fixed,
    /// `p`, `rx`, `ry`, `rz`
    Angle,
}

impl Gate {
    /// Every supported gate, no-argument gates first.
    pub const ALL: [Gate; 8] = [Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::P, Gate::Rx, Gate::Ry, Gate::Rz];

    /// Lower-case base name, e.g. `rz`.
    pub fn name(self) -> &'static str {
        OPERATION_NAMES[self.index()][ControlArity::None.index()]
    }

    /// Whether the gate takes a rotation angle.
    pub fn kind(self) -> GateKind {
        match self {
            Gate::H | Gate::X | Gate::Y | Gate::Z => GateKind::Fixed,
            Gate::P | Gate::Rx | Gate::Ry | Gate::Rz => GateKind::Angle,
        }
    }

    /// `true` for the angle-parameterized subset.
    pub fn takes_angle(self) -> bool {
        self.kind() == GateKind::Angle
    }

    fn index(self) -> usize {
        match self {
            Gate::H => 0,
            Gate::X => 1,
            Gate::Y => 2,
            Gate::Z => 3,
            Gate::P => 4,
            Gate::Rx => 5,
            Gate::Ry => 6,
            Gate::Rz => 7,
        }
    }
}

impl FromStr for Gate {
    type Err = PlayError;

    /// Parses a base gate name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Gate::ALL
            .into_iter()
            .find(|g| g.name() == lowered)
            .ok_or(PlayError::UnsupportedGate { operation: lowered })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Control-count class that selects the concrete operation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlArity {
    /// No controls: base name.
    None,
    /// One control: `c` prefix.
    Single,
    /// Two or more controls: `mc` prefix.
    Multi,
}

impl ControlArity {
    /// Arity for a control list of this length.
    pub fn of(controls: &[usize]) -> Self {
        match controls.len() {
            0 => ControlArity::None,
            1 => ControlArity::Single,
            _ => ControlArity::Multi,
        }
    }

    fn index(self) -> usize {
        match self {
            ControlArity::None => 0,
            ControlArity::Single => 1,
            ControlArity::Multi => 2,
        }
    }
}

/// Concrete operation identifiers, indexed by `[gate][arity]`.
const OPERATION_NAMES: [[&str; 3]; 8] = [
    ["h", "ch", "mch"],
    ["x", "cx", "mcx"],
    ["y", "cy", "mcy"],
    ["z", "cz", "mcz"],
    ["p", "cp", "mcp"],
    ["rx", "crx", "mcrx"],
    ["ry", "cry", "mcry"],
    ["rz", "crz", "mcrz"],
];

/// Looks up the concrete identifier for a gate at a given control arity.
pub fn operation_name(gate: Gate, arity: ControlArity) -> &'static str {
    OPERATION_NAMES[gate.index()][arity.index()]
}

/// A request to apply `gate` to `target`, controlled by `controls`.
///
/// `angle` is in radians and must be present exactly when the gate is
/// angle-parameterized; [`resolve`] enforces this.
#[derive(Debug, Clone, PartialEq)]
pub struct GateRequest {
    pub gate: Gate,
    /// Control qubits in caller order; may be empty.
    pub controls: Vec<usize>,
    pub target: usize,
    pub angle: Option<f64>,
}

impl GateRequest {
    /// Uncontrolled, argument-free request.
    pub fn new(gate: Gate, target: usize) -> Self {
        Self { gate, controls: Vec::new(), target, angle: None }
    }

    /// Sets the control qubits.
    pub fn controlled_by<I>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.controls = controls.into_iter().collect();
        self
    }

    /// Sets the rotation angle (radians).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Builds a request from a gate name and numeric operands that may not
    /// be integers by type (e.g. `2.0`). Indices must be finite,
    /// non-negative and integral.
    pub fn from_raw(name: &str, controls: &[f64], target: f64, angle: Option<f64>) -> Result<Self, PlayError> {
        let gate: Gate = name.parse()?;
        let controls = controls.iter().map(|c| coerce_index(*c)).collect::<Result<Vec<_>, _>>()?;
        let target = coerce_index(target)?;
        Ok(Self { gate, controls, target, angle })
    }
}

fn coerce_index(value: f64) -> Result<usize, PlayError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(PlayError::invalid_argument(format!("'{}' is not a valid qubit index", value)));
    }
    Ok(value as usize)
}

/// Normalizes a request into its concrete operation without touching any circuit.
///
/// # Errors
/// * `InvalidArgument` if the angle is missing for `p`/`rx`/`ry`/`rz`,
///   supplied for `h`/`x`/`y`/`z`, or not finite.
pub fn resolve(request: &GateRequest) -> Result<Operation, PlayError> {
    let gate = request.gate;
    let target = request.target;

    let angle = match (gate.takes_angle(), request.angle) {
        (true, Some(angle)) if !angle.is_finite() => {
            return Err(PlayError::invalid_argument(format!("angle for '{}' must be finite, got {}", gate, angle)));
        }
        (true, Some(angle)) => Some(angle),
        (true, None) => {
            return Err(PlayError::invalid_argument(format!("gate '{}' requires an angle", gate)));
        }
        (false, Some(_)) => {
            return Err(PlayError::invalid_argument(format!("gate '{}' does not take an angle", gate)));
        }
        (false, None) => None,
    };

    let op = match (ControlArity::of(&request.controls), angle) {
        (ControlArity::None, None) => Operation::Single { gate, target },
        (ControlArity::None, Some(angle)) => Operation::Rotation { gate, angle, target },
        (ControlArity::Single, None) => Operation::Controlled { gate, control: request.controls[0], target },
        (ControlArity::Single, Some(angle)) => {
            Operation::ControlledRotation { gate, angle, control: request.controls[0], target }
        }
        (ControlArity::Multi, None) => Operation::MultiControlled { gate, controls: request.controls.clone(), target },
        (ControlArity::Multi, Some(angle)) => {
            Operation::MultiControlledRotation { gate, angle, controls: request.controls.clone(), target }
        }
    };
    Ok(op)
}

/// Resolves `request` and applies the resulting operation to `circuit`.
///
/// # Errors
/// * `InvalidArgument` from [`resolve`].
/// * `UnsupportedGate` if the circuit does not offer the resolved operation.
/// * Anything the circuit itself reports while applying it.
pub fn add_gate<C>(circuit: &mut C, request: &GateRequest) -> Result<(), PlayError>
where
    C: GateCircuit + ?Sized,
{
    let op = resolve(request)?;
    if !circuit.supports(&op) {
        return Err(PlayError::UnsupportedGate { operation: op.name().to_string() });
    }
    debug!("dispatching {}", op);
    circuit.apply(op)
}
