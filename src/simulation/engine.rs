// src/simulation/engine.rs
use crate::core::{PlayError, StateVector};
use crate::gates::Gate;
use crate::operations::Operation;
use crate::simulation::RunResult;
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Owns the state vector of a circuit and evolves it one operation at a time.
/// (Internal visibility)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimulationEngine {
    state: StateVector,
}

impl SimulationEngine {
    /// Starts in `|0...0>` over `num_qubits` qubits.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, PlayError> {
        Ok(Self { state: StateVector::zero_state(num_qubits)? })
    }

    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    pub(crate) fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Checks operands against the register without changing the state.
    pub(crate) fn validate_operation(&self, op: &Operation) -> Result<(), PlayError> {
        let num_qubits = self.num_qubits();
        let target = op.target();
        let controls = op.controls();

        for qubit in op.involved_qubits() {
            if qubit >= num_qubits {
                return Err(PlayError::QubitOutOfRange { qubit, num_qubits });
            }
        }
        if controls.contains(&target) {
            return Err(PlayError::invalid_argument(format!(
                "qubit {} cannot be both control and target of '{}'",
                target,
                op.name()
            )));
        }
        let distinct: HashSet<usize> = controls.iter().copied().collect();
        if distinct.len() != controls.len() {
            return Err(PlayError::invalid_argument(format!("duplicate control qubits in '{}'", op)));
        }
        Ok(())
    }

    /// Applies a resolved operation to the state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), PlayError> {
        self.validate_operation(op)?;
        let matrix = super::gate_matrix(op.gate(), op.angle())?;
        self.apply_controlled_gate(&op.controls(), op.target(), &matrix);
        Ok(())
    }

    /// Applies a 2x2 matrix to `target` on the subspace where every control is `|1>`.
    /// Qubit `q` maps to bit position `n - 1 - q` of the basis index.
    fn apply_controlled_gate(&mut self, controls: &[usize], target: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let n = self.num_qubits();
        let target_mask = 1usize << (n - 1 - target);
        let control_mask = controls.iter().fold(0usize, |mask, c| mask | (1 << (n - 1 - c)));

        let amplitudes = self.state.amplitudes_mut();
        for i0 in 0..amplitudes.len() {
            // Visit each |..0..>,|..1..> pair once, from its target=0 member
            if i0 & target_mask != 0 || i0 & control_mask != control_mask {
                continue;
            }
            let i1 = i0 | target_mask;
            let psi_0 = amplitudes[i0];
            let psi_1 = amplitudes[i1];
            amplitudes[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            amplitudes[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }

    /// Samples `shots` measurements of every qubit from `|a_k|^2`.
    ///
    /// With `seed = None` the generator is seeded from a hash of the state
    /// vector, so repeated runs on the same state agree.
    pub(crate) fn sample(&self, shots: usize, seed: Option<u64>) -> Result<RunResult, PlayError> {
        let amplitudes = self.state.amplitudes();
        let weights: Vec<f64> = amplitudes.iter().map(|c| c.norm_sqr()).collect();
        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total < 1e-12 {
            return Err(PlayError::invalid_state("cannot sample a state with zero norm"));
        }

        let seed = seed.unwrap_or_else(|| {
            let mut hasher = DefaultHasher::new();
            for c in amplitudes {
                c.re.to_ne_bytes().hash(&mut hasher);
                c.im.to_ne_bytes().hash(&mut hasher);
            }
            hasher.finish()
        });
        let mut rng = StdRng::seed_from_u64(seed);

        // Last outcome with weight absorbs floating-point shortfall at the top end
        let fallback = weights.iter().rposition(|w| *w > 0.0).unwrap_or(0);
        let mut result = RunResult::new(shots);
        for _ in 0..shots {
            let p_sample: f64 = rng.random::<f64>() * total; // Sample in [0, total)
            let mut cumulative = 0.0;
            let mut chosen = fallback;
            for (k, w) in weights.iter().enumerate() {
                cumulative += *w;
                if p_sample < cumulative {
                    chosen = k;
                    break;
                }
            }
            result.record(self.state.label(chosen));
        }
        Ok(result)
    }
}

/// Matrix for each base gate. Angles are in radians.
pub(crate) fn single_qubit_matrix(gate: Gate, angle: f64) -> [[Complex<f64>; 2]; 2] {
    use std::f64::consts::FRAC_1_SQRT_2;
    let one = Complex::new(1.0, 0.0);
    let zero = Complex::zero();
    let i = Complex::i();
    let (cos_a, sin_a) = ((angle / 2.0).cos(), (angle / 2.0).sin());

    match gate {
        Gate::H => [
            [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0)],
            [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0)],
        ],
        Gate::X => [[zero, one], [one, zero]],
        Gate::Y => [[zero, -i], [i, zero]],
        Gate::Z => [[one, zero], [zero, -one]],
        Gate::P => [[one, zero], [zero, Complex::from_polar(1.0, angle)]],
        Gate::Rx => [
            [Complex::new(cos_a, 0.0), -i * sin_a],
            [-i * sin_a, Complex::new(cos_a, 0.0)],
        ],
        Gate::Ry => [
            [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
            [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
        ],
        Gate::Rz => [
            [Complex::from_polar(1.0, -angle / 2.0), zero],
            [zero, Complex::from_polar(1.0, angle / 2.0)],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const TOL: f64 = 1e-12;

    fn approx(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < TOL
    }

    #[test]
    fn test_x_on_first_qubit_sets_high_bit() {
        let mut engine = SimulationEngine::init(2).unwrap();
        engine.apply_operation(&Operation::Single { gate: Gate::X, target: 0 }).unwrap();
        // qubit 0 is the leftmost label bit: |10> is index 2
        assert!(approx(engine.state().amplitudes()[2], Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_controlled_x_only_acts_when_control_set() {
        let mut engine = SimulationEngine::init(2).unwrap();
        engine.apply_operation(&Operation::Controlled { gate: Gate::X, control: 0, target: 1 }).unwrap();
        assert!(approx(engine.state().amplitudes()[0], Complex::new(1.0, 0.0)));

        engine.apply_operation(&Operation::Single { gate: Gate::X, target: 0 }).unwrap();
        engine.apply_operation(&Operation::Controlled { gate: Gate::X, control: 0, target: 1 }).unwrap();
        assert!(approx(engine.state().amplitudes()[3], Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_toffoli_via_multi_controlled_x() {
        let mut engine = SimulationEngine::init(3).unwrap();
        engine.apply_operation(&Operation::Single { gate: Gate::X, target: 0 }).unwrap();
        engine.apply_operation(&Operation::Single { gate: Gate::X, target: 1 }).unwrap();
        engine
            .apply_operation(&Operation::MultiControlled { gate: Gate::X, controls: vec![0, 1], target: 2 })
            .unwrap();
        assert!(approx(engine.state().amplitudes()[7], Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_hadamard_then_phase() {
        let mut engine = SimulationEngine::init(1).unwrap();
        engine.apply_operation(&Operation::Single { gate: Gate::H, target: 0 }).unwrap();
        engine.apply_operation(&Operation::Rotation { gate: Gate::P, angle: PI / 2.0, target: 0 }).unwrap();
        let amps = engine.state().amplitudes();
        assert!(approx(amps[0], Complex::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx(amps[1], Complex::new(0.0, FRAC_1_SQRT_2)));
    }

    #[test]
    fn test_rejects_target_among_controls() {
        let mut engine = SimulationEngine::init(2).unwrap();
        let err = engine
            .apply_operation(&Operation::Controlled { gate: Gate::Z, control: 1, target: 1 })
            .unwrap_err();
        assert!(matches!(err, PlayError::InvalidArgument { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_qubit() {
        let mut engine = SimulationEngine::init(2).unwrap();
        let err = engine.apply_operation(&Operation::Single { gate: Gate::H, target: 2 }).unwrap_err();
        assert_eq!(err, PlayError::QubitOutOfRange { qubit: 2, num_qubits: 2 });
    }

    #[test]
    fn test_sampling_basis_state_is_certain() {
        let mut engine = SimulationEngine::init(2).unwrap();
        engine.apply_operation(&Operation::Single { gate: Gate::X, target: 1 }).unwrap();
        let result = engine.sample(50, Some(7)).unwrap();
        assert_eq!(result.count("01"), 50);
        assert_eq!(result.shots(), 50);
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let mut engine = SimulationEngine::init(1).unwrap();
        engine.apply_operation(&Operation::Single { gate: Gate::H, target: 0 }).unwrap();
        let a = engine.sample(200, None).unwrap();
        let b = engine.sample(200, None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count("0") + a.count("1"), 200);
    }
}
