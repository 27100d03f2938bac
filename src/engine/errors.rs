//! Error types for the step engine and its callers
//!
//! This module defines [`EngineError`], covering every failure the sorting
//! core can report: bad starting data, starting a run with no data, and
//! advancing an engine that has already finished.
//!
//! All of these are synchronous contract violations - nothing here is
//! transient or retryable. Callers are expected to validate before calling
//! rather than catch and continue.

use std::fmt;

/// Errors reported by the sequence container, step engines, and controller
#[derive(Debug, Clone)]
pub enum EngineError {
    /// The starting sequence was empty or otherwise unusable
    InvalidInput { message: String },

    /// A run was requested while the sequence holds no data
    EmptySequence,

    /// `advance()` was called on an engine that already completed or was
    /// aborted
    Exhausted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidInput { message } => {
                write!(f, "Invalid input sequence: {}", message)
            }
            EngineError::EmptySequence => {
                write!(f, "Cannot start sorting: the sequence is empty")
            }
            EngineError::Exhausted => {
                write!(f, "Engine already finished; construct a new one to sort again")
            }
        }
    }
}

impl std::error::Error for EngineError {}
