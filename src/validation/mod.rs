// src/validation/mod.rs

//! Checks a caller can run on an amplitude vector before handing it to the
//! renderer. The renderer itself only requires a power-of-two length; these
//! add the physical constraints a simulator output should meet.

use crate::core::{state, PlayError};
use num_complex::Complex;

// Default tolerance (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks the length is `2^n` with `n >= 1` and returns `n`.
pub fn check_dimension(amplitudes: &[Complex<f64>]) -> Result<usize, PlayError> {
    state::qubit_count(amplitudes.len())
}

/// Checks that `sum(|a_k|^2)` is within `tolerance` of 1.
///
/// # Arguments
/// * `amplitudes` - The vector to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(PlayError::InvalidState)` otherwise.
pub fn check_normalization(amplitudes: &[Complex<f64>], tolerance: Option<f64>) -> Result<(), PlayError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = amplitudes.iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(PlayError::invalid_state(format!(
            "state vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
            norm_sq, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Runs [`check_dimension`] then [`check_normalization`].
pub fn validate_state(amplitudes: &[Complex<f64>], norm_tolerance: Option<f64>) -> Result<usize, PlayError> {
    let num_qubits = check_dimension(amplitudes)?;
    check_normalization(amplitudes, norm_tolerance)?;
    Ok(num_qubits)
}
