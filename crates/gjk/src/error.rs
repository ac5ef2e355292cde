//! Errors raised at the edges of the crate.
//!
//! The intersection test itself is total and never returns an error, only building shapes
//! from untrusted input and reading scenarios can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GjkError {
    /// Shape parameters can not describe a convex shape.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Scenario file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario text is not valid json or does not match the scenario layout.
    #[error("Invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),
}

pub type GjkResult<T> = Result<T, GjkError>;
