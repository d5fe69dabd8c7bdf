//! Error types for report output and command line handling.
//!
//! Collector operations themselves never fail; only the surroundings do.

use thiserror::Error;

/// Result type alias for named_collector operations
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Main error type for named_collector operations
#[derive(Error, Debug)]
pub enum CollectorError {
    /// IO errors while writing a report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for invalid arguments
        reason: String,
    },
}

impl CollectorError {
    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            CollectorError::InvalidArguments { .. } => vec![
                "Run with --help to see accepted values".to_string(),
                format!("Keep --count at or below {}", crate::cli::MAX_ITEMS),
            ],
            CollectorError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                vec!["Check that the output stream is writable".to_string()]
            }
            _ => vec![],
        }
    }

    /// Whether this error only means the reader closed the output early
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CollectorError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
