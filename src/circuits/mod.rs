// src/circuits/mod.rs

//! The circuit capability surface and a reference state-vector circuit.
//!
//! [`GateCircuit`] is what the resolver talks to: anything that can accept
//! a resolved [`Operation`]. [`Circuit`] is the in-crate implementation that
//! keeps a state vector, the ordered list of applied operations, and the
//! named snapshots taken along the way.

use crate::core::{PlayError, StateVector};
use crate::gates::{self, GateRequest};
use crate::operations::Operation;
use crate::simulation::engine::SimulationEngine;
use crate::simulation::{RunResult, Snapshot};
use log::info;
use std::fmt;

/// A circuit that can receive resolved gate operations.
///
/// Implementors override [`GateCircuit::supports`] when they only offer part
/// of the `{h, ch, mch, ..., rz, crz, mcrz}` surface; the resolver reports
/// anything outside it as `UnsupportedGate`.
pub trait GateCircuit {
    /// Whether the concrete operation is a capability of this circuit.
    fn supports(&self, operation: &Operation) -> bool {
        let _ = operation;
        true
    }

    /// Appends `operation` to the circuit.
    fn apply(&mut self, operation: Operation) -> Result<(), PlayError>;
}

/// A register of qubits, the operations applied to it, and its evolving state.
///
/// Analogy: a minimal `QuantumCircuit` that simulates as it is built.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    engine: SimulationEngine,

    /// Applied operations, in order.
    operations: Vec<Operation>,

    /// Snapshots in recording order. Labels are unique.
    reports: Vec<Snapshot>,
}

impl Circuit {
    /// Creates a circuit over `num_qubits` qubits in `|0...0>`.
    pub fn new(num_qubits: usize) -> Result<Self, PlayError> {
        Ok(Self {
            engine: SimulationEngine::init(num_qubits)?,
            operations: Vec::new(),
            reports: Vec::new(),
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.engine.num_qubits()
    }

    /// The live state after every operation applied so far.
    pub fn state(&self) -> &StateVector {
        self.engine.state()
    }

    /// Resolves and applies a gate request.
    pub fn add_gate(&mut self, request: &GateRequest) -> Result<(), PlayError> {
        gates::add_gate(self, request)
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations applied.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operation has been applied.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Records a snapshot of the live state under `label`.
    /// Reusing a label replaces the earlier snapshot in place.
    pub fn report(&mut self, label: impl Into<String>) -> &Snapshot {
        let label = label.into();
        let snapshot = Snapshot::new(label.clone(), self.engine.state().clone());
        info!("recorded snapshot '{}' after {} operations", label, self.operations.len());

        let index = match self.reports.iter().position(|s| s.label() == label) {
            Some(i) => {
                self.reports[i] = snapshot;
                i
            }
            None => {
                self.reports.push(snapshot);
                self.reports.len() - 1
            }
        };
        &self.reports[index]
    }

    /// Looks up a snapshot by label.
    pub fn snapshot(&self, label: &str) -> Result<&Snapshot, PlayError> {
        self.reports
            .iter()
            .find(|s| s.label() == label)
            .ok_or_else(|| PlayError::SnapshotNotFound { label: label.to_string() })
    }

    /// All snapshots, oldest first.
    pub fn reports(&self) -> &[Snapshot] {
        &self.reports
    }

    /// Samples `shots` measurements of the live state.
    ///
    /// With `seed = None` the sample is seeded from the state itself, so the
    /// same state always yields the same counts.
    pub fn run(&self, shots: usize, seed: Option<u64>) -> Result<RunResult, PlayError> {
        let result = self.engine.sample(shots, seed)?;
        info!("sampled {} shots over {} outcomes", shots, result.counts().len());
        Ok(result)
    }
}

impl GateCircuit for Circuit {
    fn apply(&mut self, operation: Operation) -> Result<(), PlayError> {
        self.engine.apply_operation(&operation)?;
        self.operations.push(operation);
        Ok(())
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Collects gate requests and applies them in order on `build`.
pub struct CircuitBuilder {
    num_qubits: usize,
    requests: Vec<GateRequest>,
}

impl CircuitBuilder {
    /// Creates a builder for a `num_qubits`-qubit circuit.
    pub fn new(num_qubits: usize) -> Self {
        Self { num_qubits, requests: Vec::new() }
    }

    /// Queues a single gate request.
    pub fn add(mut self, request: GateRequest) -> Self {
        self.requests.push(request);
        self
    }

    /// Queues several gate requests.
    pub fn add_all<I>(mut self, requests: I) -> Self
    where
        I: IntoIterator<Item = GateRequest>,
    {
        self.requests.extend(requests);
        self
    }

    /// Creates the circuit and applies every queued request.
    /// Stops at the first request that fails.
    pub fn build(self) -> Result<Circuit, PlayError> {
        let mut circuit = Circuit::new(self.num_qubits)?;
        for request in &self.requests {
            circuit.add_gate(request)?;
        }
        Ok(circuit)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_qubits = self.num_qubits();
        let ops = &self.operations;
        let num_ops = ops.len();
        writeln!(f, "qplay::Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        if ops.is_empty() {
            return Ok(());
        }

        const GATE_WIDTH: usize = 9; // e.g. "RZ(-1.57)"
        const WIRE: &str = "─────────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        let labels: Vec<String> = (0..num_qubits).map(|q| format!("q{}: ", q)).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        // v_connect[row][t] is the connector drawn below `row` at step t
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total = GATE_WIDTH - slen;
                let pre = total / 2;
                let post = total - pre;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
            }
        }

        for (t, op) in ops.iter().enumerate() {
            let name = op.gate().name().to_uppercase();
            let symbol = match op.angle() {
                Some(angle) => format!("{}({:.2})", name, angle),
                None => name,
            };
            let target = op.target();
            op_grid[target][t] = format_gate(&symbol);

            let controls = op.controls();
            if controls.is_empty() {
                continue;
            }
            for c in &controls {
                op_grid[*c][t] = format_gate("@");
            }
            let r_min = controls.iter().copied().chain([target]).min().unwrap_or(target);
            let r_max = controls.iter().copied().chain([target]).max().unwrap_or(target);
            for row in v_connect.iter_mut().take(r_max).skip(r_min) {
                row[t] = V_WIRE;
            }
        }

        let label_padding = " ".repeat(label_width);
        for r in 0..num_qubits {
            write!(f, "{:<width$}", labels[r], width = label_width)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let pre = (GATE_WIDTH - 1) / 2;
                    let post = GATE_WIDTH - 1 - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), v_connect[r][t], " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
