//! Error handling logic

use thiserror::Error;

/// Errors raised when a caller violates the contract of the resolver,
/// the renderer or the reference circuit.
/// None of these are transient; they surface immediately and nothing
/// is partially applied or partially rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayError {
    /// The resolved concrete operation is not a capability of the circuit,
    /// or the base gate name is unknown.
    #[error("Unsupported Gate: '{operation}' is not available on this circuit")]
    UnsupportedGate {
        /// Concrete operation identifier, e.g. `mcrz`
        operation: String,
    },

    /// Angle presence disagrees with the gate kind, or an operand is malformed.
    #[error("Invalid Argument: {message}")]
    InvalidArgument {
        /// InvalidArgument failure message
        message: String,
    },

    /// More decimal digits were requested than the renderer supports.
    #[error("Precision Error: {decimals} decimals requested, at most {max} supported")]
    Precision {
        /// Requested digit count
        decimals: usize,
        /// Supported upper bound
        max: usize,
    },

    /// The amplitude vector does not describe a whole number of qubits.
    #[error("Invalid State: {message}")]
    InvalidState {
        /// InvalidState failure message
        message: String,
    },

    /// A qubit index lies outside the circuit's register.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// Offending index
        qubit: usize,
        /// Register size
        num_qubits: usize,
    },

    /// No snapshot was recorded under the requested label.
    #[error("Snapshot '{label}' was never recorded")]
    SnapshotNotFound {
        /// Requested label
        label: String,
    },
}

impl PlayError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PlayError::InvalidArgument { message: message.into() }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        PlayError::InvalidState { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_error_message() {
        let err = PlayError::Precision { decimals: 12, max: 10 };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_unsupported_gate_message() {
        let err = PlayError::UnsupportedGate { operation: "mcrz".to_string() };
        assert_eq!(err.to_string(), "Unsupported Gate: 'mcrz' is not available on this circuit");
    }
}
