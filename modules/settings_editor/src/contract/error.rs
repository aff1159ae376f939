//! Contract error types for the settings editor
//!
//! These errors are transport-agnostic and used for in-process communication.

use super::model::SessionState;
use thiserror::Error;

/// Settings editor errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Store handle absent or the store could not be reached
    #[error("Store unavailable: {reason}")]
    Connectivity {
        /// Driver or session detail
        reason: String,
    },
    /// Candidate and baseline row counts differ
    #[error("Structural mismatch: baseline has {expected} rows, candidate has {actual}")]
    StructuralMismatch { expected: usize, actual: usize },
    /// A setting key is empty, too long, or duplicated in a loaded set
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
    /// Operation not allowed in the current session state
    #[error("Cannot {operation} while session is {state}")]
    InvalidState {
        state: SessionState,
        operation: &'static str,
    },
    /// Internal error
    #[error("Internal error")]
    Internal,
}

/// Value validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("value is empty")]
    Empty,
    #[error("'{input}' is not a decimal number")]
    NotNumeric { input: String },
    #[error("{value} is outside [0.00, 99999999.99]")]
    OutOfRange { value: String },
}
