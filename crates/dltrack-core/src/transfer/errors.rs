//! Transfer error types.
//!
//! Cancellation and interruption travel through the same channel as every
//! other failure; callers branch on the variant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::TransferId;

/// Error type for transfer tracking.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferError {
    /// The configured destination directory is not absolute.
    #[error("The `directory` option must be an absolute path, got `{path}`")]
    InvalidDirectory {
        /// The offending directory as configured.
        path: String,
    },

    /// The window owning a transfer could not be resolved.
    #[error("Failed to get window for {id}")]
    WindowNotFound {
        /// The transfer whose window is unknown.
        id: TransferId,
    },

    /// The transfer was cancelled by the user or the host.
    #[error("Download cancelled")]
    Cancelled,

    /// The transfer failed mid-flight.
    #[error("{message}")]
    Interrupted {
        /// Message formatted from the configured template.
        message: String,
    },

    /// The host refused to start a transfer.
    #[error("Failed to start download: {message}")]
    StartFailed {
        /// Host-provided reason.
        message: String,
    },

    /// The session listener stopped before the transfer resolved.
    #[error("Session listener closed before the download finished")]
    SessionClosed,
}

impl TransferError {
    /// Create a configuration error for a relative directory.
    pub fn invalid_directory(path: impl Into<String>) -> Self {
        Self::InvalidDirectory { path: path.into() }
    }

    /// Create a window resolution error.
    #[must_use]
    pub const fn window_not_found(id: TransferId) -> Self {
        Self::WindowNotFound { id }
    }

    /// Create an interruption error with an already formatted message.
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted {
            message: message.into(),
        }
    }

    /// Create a start failure.
    pub fn start_failed(message: impl Into<String>) -> Self {
        Self::StartFailed {
            message: message.into(),
        }
    }

    /// Check if this is a cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this is a configuration error (never retried).
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidDirectory { .. })
    }

    /// Convert to a message suitable for a modal dialog.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidDirectory { path } => {
                format!("The download directory `{path}` must be an absolute path.")
            }
            Self::WindowNotFound { .. } => {
                "The window that started this download is no longer available.".to_string()
            }
            Self::Cancelled => "Download was cancelled.".to_string(),
            Self::Interrupted { message } => message.clone(),
            Self::StartFailed { message } => format!("Could not start the download: {message}"),
            Self::SessionClosed => "The download session has ended.".to_string(),
        }
    }
}

/// Convenience result type for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_distinguished() {
        assert!(TransferError::Cancelled.is_cancelled());
        assert!(!TransferError::interrupted("boom").is_cancelled());
        assert!(!TransferError::SessionClosed.is_cancelled());
    }

    #[test]
    fn test_interrupted_displays_message_verbatim() {
        let err = TransferError::interrupted("The download of a.zip was interrupted");
        assert_eq!(err.to_string(), "The download of a.zip was interrupted");
        assert_eq!(err.user_message(), err.to_string());
    }

    #[test]
    fn test_configuration_error() {
        let err = TransferError::invalid_directory("downloads");
        assert!(err.is_configuration());
        assert!(err.to_string().contains("downloads"));
        assert!(!TransferError::Cancelled.is_configuration());
    }

    #[test]
    fn test_error_serialization() {
        let err = TransferError::window_not_found(TransferId::new(3));
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("window_not_found"));

        let parsed: TransferError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }
}
