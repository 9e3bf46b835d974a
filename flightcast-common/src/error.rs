//! Common error types for flightcast

use thiserror::Error;

/// Common result type for flightcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the flightcast crates
#[derive(Error, Debug)]
pub enum Error {
    /// Model artifact missing, unreadable, or internally inconsistent
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Predictor invocation failure (shape mismatch, non-finite values)
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Feature schema names a value the assembler did not produce
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// CSV serialization error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
