//! Error types for position analysis
//!
//! Decoding, square parsing and move parsing are the only fallible operations in
//! this crate. Once a [`Position`](crate::Position) exists, every attack query,
//! move generation call and feature function is total.

use thiserror::Error;

/// Errors that can occur while building or manipulating a position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessFeaturesError {
    /// The board-state string failed structural validation
    ///
    /// Also covers positions that violate the one-king-per-color invariant.
    #[error("Malformed board-state string: {reason}")]
    MalformedInput { reason: String },

    /// An algebraic square name (e.g. `e4`) could not be parsed
    #[error("Invalid square name: {name:?}")]
    InvalidSquare { name: String },

    /// A coordinate-notation move was malformed or not legal in the position
    #[error("Invalid move {notation:?}: {reason}")]
    InvalidMove { notation: String, reason: String },
}

impl ChessFeaturesError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ChessFeaturesError::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Result type alias for position analysis operations
pub type ChessFeaturesResult<T> = Result<T, ChessFeaturesError>;

/// Failures reported by an external position evaluator
///
/// These never abort an analysis: the evaluation is left out instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No position evaluator is available")]
    Unavailable,

    #[error("Position evaluator failed: {message}")]
    Failed { message: String },
}
