//! Error types for claims analysis
//!
//! Provides a unified error type for all claims-stats crates. The taxonomy
//! follows the three failure classes of the pipeline: data errors at load
//! time, degenerate inputs to a statistical procedure, and invalid
//! configuration parameters.

use thiserror::Error;

/// Core error type for claims analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or unparsable input data
    #[error("Data error: {0}")]
    Data(String),

    /// A required input column is absent
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Sample or table too small for the requested statistic
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Input is too uniform for the requested statistic
    #[error("Degenerate input: {0}")]
    Degenerate(String),

    /// Invalid parameter provided to a procedure
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common failure patterns

impl Error {
    /// Error for an empty sample handed to a statistic
    pub fn empty_sample(procedure: &str) -> Self {
        Self::Degenerate(format!("{procedure}: sample is empty"))
    }

    /// Error for a zero-variance input where spread is required
    pub fn zero_variance(context: &str) -> Self {
        Self::Degenerate(format!("{context} has zero variance"))
    }

    /// Error for a proportion at the 0/1 boundary
    pub fn boundary_proportion(p: f64, context: &str) -> Self {
        Self::Degenerate(format!(
            "{context}: proportion {p} is at the boundary of (0, 1)"
        ))
    }

    /// Error for a malformed field value
    pub fn bad_field(column: &str, row: usize, detail: &str) -> Self {
        Self::Data(format!("row {row}, column {column}: {detail}"))
    }

    /// Error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}
