//! Error types for oppflow
//!
//! Each error type has a corresponding error code for programmatic handling.
//! The lifecycle engine itself never fails; these cover the store and CLI.

use thiserror::Error;

/// Result type alias for oppflow operations
pub type Result<T> = std::result::Result<T, OppflowError>;

/// Main error type for all oppflow operations
#[derive(Debug, Error)]
pub enum OppflowError {
    /// No .oppflow directory found from the working directory upwards
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// No opportunity with the given ID
    #[error("Opportunity not found: {0}")]
    OpportunityNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Bad command-line input (unknown status label, malformed date, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Status transition rejected by the lifecycle table
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl OppflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            OppflowError::StoreNotFound(_) => "STORE_NOT_FOUND",
            OppflowError::InvalidJson(_) => "INVALID_JSON",
            OppflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            OppflowError::OpportunityNotFound(_) => "OPPORTUNITY_NOT_FOUND",
            OppflowError::ConfigError(_) => "CONFIG_ERROR",
            OppflowError::InvalidInput(_) => "INVALID_INPUT",
            OppflowError::StateTransition(_) => "STATE_TRANSITION",
            OppflowError::Io(_) => "IO_ERROR",
            OppflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        OppflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &OppflowError) -> i32 {
    match error {
        OppflowError::InvalidInput(_) => 2, // Usage error, same as clap
        _ => 1,
    }
}
