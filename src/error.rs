//! Error types for moai-hooks.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for hook operations.
#[derive(Error, Debug)]
pub enum HookError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backing store exists but does not hold a session history.
    #[error("invalid session history at {}: {reason}", .path.display())]
    InvalidStore { path: PathBuf, reason: String },
}

/// Convenience Result type for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: HookError = io_err.into();
        assert!(matches!(err, HookError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: HookError = json_err.into();
        assert!(matches!(err, HookError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_invalid_store_display() {
        let err = HookError::InvalidStore {
            path: PathBuf::from(".moai/logs/session_history.json"),
            reason: "missing field `sessions`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("session_history.json"));
        assert!(msg.contains("missing field"));
    }
}
