// src/core/state.rs

use super::error::PlayError;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// An amplitude vector over `n` qubits.
///
/// The length is always `2^n` with `n >= 1`; index `k` is the basis outcome
/// whose zero-padded `n`-bit binary form is its label. Qubit `0` is the most
/// significant bit of that label.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Wraps an amplitude vector, rejecting lengths that are not a power of two
    /// of at least 2. Normalization is not enforced.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Result<Self, PlayError> {
        let num_qubits = qubit_count(amplitudes.len())?;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Copies a slice into a validated state vector.
    pub fn from_slice(amplitudes: &[Complex<f64>]) -> Result<Self, PlayError> {
        Self::new(amplitudes.to_vec())
    }

    /// The basis state `|0...0>` over `num_qubits` qubits.
    pub fn zero_state(num_qubits: usize) -> Result<Self, PlayError> {
        if num_qubits == 0 {
            return Err(PlayError::invalid_state("a state needs at least one qubit"));
        }
        let dim = 1usize.checked_shl(num_qubits as u32)
            .filter(|d| *d != 0)
            .ok_or_else(|| PlayError::invalid_state(format!("{} qubits overflow the state dimension", num_qubits)))?;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Ok(Self { amplitudes, num_qubits })
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of basis outcomes (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits (`n`).
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Zero-padded binary label of outcome `k`.
    pub fn label(&self, k: usize) -> String {
        format!("{:0width$b}", k, width = self.num_qubits)
    }
}

/// Returns `n` for a vector of length `2^n`, `n >= 1`.
pub(crate) fn qubit_count(len: usize) -> Result<usize, PlayError> {
    if len < 2 || !len.is_power_of_two() {
        return Err(PlayError::invalid_state(format!(
            "amplitude vector length {} is not a power of two of at least 2",
            len
        )));
    }
    Ok(len.trailing_zeros() as usize)
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
