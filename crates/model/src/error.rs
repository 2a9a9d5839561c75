//! Model error types
//!
//! Defines the standardized error type for all model operations.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading or evaluating a model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read or write the artifact file
    #[error("Failed to read artifact: {0}")]
    Io(String),

    /// Artifact file is not valid JSON for the expected schema
    #[error("Failed to parse artifact: {0}")]
    Malformed(String),

    /// Artifact deserialized but its contents are not a usable model
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
