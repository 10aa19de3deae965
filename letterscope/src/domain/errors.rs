//! Structured error types for letterscope
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// User-visible failure category of a remote analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The counting service could not be reached at all
    Unreachable,
    /// The service answered, but not with a usable tally
    ServiceError,
}

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Counting service unreachable: {0}")]
    Unreachable(String),

    #[error("Counting service returned HTTP {status}")]
    Service { status: u16 },

    /// Request failed after reaching the service (redirect loop, bad body)
    #[error("Counting service request failed: {0}")]
    Protocol(String),

    #[error("Invalid response from counting service: {0}")]
    InvalidResponse(String),
}

impl RemoteError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            RemoteError::Unreachable(_) => FailureKind::Unreachable,
            RemoteError::Service { .. }
            | RemoteError::Protocol(_)
            | RemoteError::InvalidResponse(_) => FailureKind::ServiceError,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid server URL {url}: {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Timeout must be greater than zero seconds")]
    InvalidTimeout,

    #[error("Missing required argument: TEXT (required with --headless)")]
    MissingText,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl ConfigError {
    /// Whether the error stems from the command line rather than the environment
    #[must_use]
    pub fn is_usage(&self) -> bool {
        !matches!(self, ConfigError::HttpClient(_))
    }
}

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_kinds() {
        assert_eq!(
            RemoteError::Unreachable("connection refused".into()).kind(),
            FailureKind::Unreachable
        );
        assert_eq!(RemoteError::Service { status: 500 }.kind(), FailureKind::ServiceError);
        assert_eq!(
            RemoteError::InvalidResponse("not an object".into()).kind(),
            FailureKind::ServiceError
        );
        assert_eq!(
            RemoteError::Protocol("too many redirects".into()).kind(),
            FailureKind::ServiceError
        );
    }

    #[test]
    fn test_http_client_failure_is_not_usage() {
        assert!(ConfigError::MissingText.is_usage());
        assert!(ConfigError::InvalidTimeout.is_usage());
        assert!(!ConfigError::HttpClient("no TLS backend".into()).is_usage());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidServerUrl {
            url: "ftp://host".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        assert!(err.to_string().contains("ftp://host"));
        assert!(err.to_string().contains("unsupported scheme"));
        assert!(ConfigError::MissingText.to_string().contains("Missing required argument"));
    }
}
