//! Error types for the stegscan steganalysis suite.
//!
//! Only input resolution failures abort a run. Configuration and report
//! failures degrade to defaults or log lines, and statistic failures inside a
//! detector are folded into that detector's fragment.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stegscan operations.
#[derive(Debug, Error)]
pub enum StegError {
    /// The input path does not exist
    #[error("Input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but could not be read or decoded
    #[error("Input unreadable: {}: {reason}", path.display())]
    InputUnreadable { path: PathBuf, reason: String },

    /// No configuration file at the given path
    #[error("Configuration not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    /// Configuration file exists but is not valid
    #[error("Malformed configuration {}: {reason}", path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    /// A statistic could not be computed over the available samples
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Report could not be persisted
    #[error("Failed to write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StegError {
    /// Whether the run can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StegError::ConfigMissing { .. }
                | StegError::ConfigMalformed { .. }
                | StegError::InsufficientData(_)
                | StegError::ReportWrite { .. }
        )
    }
}

/// Result type alias for stegscan operations
pub type Result<T> = std::result::Result<T, StegError>;
