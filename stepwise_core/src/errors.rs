//! # Error Types
//!
//! Structured error types for stepwise_core. Every failure carries enough
//! context (field names, indices, offending values) for a caller to locate
//! the bad sample without re-running the pipeline.
//!
//! ## Example
//!
//! ```rust
//! use stepwise_core::errors::{SeriesError, SeriesResult};
//!
//! fn validate_step(step: f64) -> SeriesResult<()> {
//!     if step <= 0.0 {
//!         return Err(SeriesError::invalid_argument(
//!             "step",
//!             step.to_string(),
//!             "Step must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_step(-0.1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stepwise_core operations
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Structured error type for pipeline operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SeriesError {
    /// An argument is out of range (non-positive step, bad geometry, etc.)
    #[error("Invalid argument '{field}': {value} - {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    /// Two series that must be index-paired have different lengths
    #[error("Length mismatch: {left} samples vs {right} samples")]
    LengthMismatch { left: usize, right: usize },

    /// At least one sample is required
    #[error("Empty input: {context} requires at least one sample")]
    EmptyInput { context: String },

    /// A sample gap does not match the declared step
    #[error("Non-uniform sampling at index {index}: expected step {expected}, found {actual}")]
    NonUniformSampling {
        index: usize,
        expected: f64,
        actual: f64,
    },

    /// Index-paired series disagree on the x-coordinate at some index
    #[error("Misaligned samples at index {index}: x = {left} vs x = {right}")]
    MisalignedSamples { index: usize, left: f64, right: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl SeriesError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SeriesError::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an EmptyInput error
    pub fn empty_input(context: impl Into<String>) -> Self {
        SeriesError::EmptyInput {
            context: context.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        SeriesError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error comes from the input data rather than the environment
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            SeriesError::FileError { .. }
                | SeriesError::SerializationError { .. }
                | SeriesError::VersionMismatch { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SeriesError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            SeriesError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            SeriesError::EmptyInput { .. } => "EMPTY_INPUT",
            SeriesError::NonUniformSampling { .. } => "NON_UNIFORM_SAMPLING",
            SeriesError::MisalignedSamples { .. } => "MISALIGNED_SAMPLES",
            SeriesError::FileError { .. } => "FILE_ERROR",
            SeriesError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SeriesError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
