//! Gateway error types.
//!
//! The taxonomy deliberately has two operational kinds: the remote said no
//! ([`GatewayError::RemoteRejected`], not retryable without a state change)
//! and everything between us and the remote broke
//! ([`GatewayError::Transport`], retryable). Absence of a resource is never
//! an error; fetch models it as `Ok(None)`.

use std::fmt;

/// Errors that can occur during gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The remote understood the request and rejected it: duplicate name on
    /// create, or a validation failure. Retrying without changing state will
    /// fail the same way.
    #[error("Remote rejected {name} (HTTP {status}): {message}")]
    RemoteRejected {
        /// Name of the task definition the request concerned.
        name: String,
        /// HTTP status reported by the remote.
        status: u16,
        /// Best-effort message extracted from the remote error body.
        message: String,
    },

    /// Network, protocol, timeout, or unexpected-response failure. The
    /// request may or may not have reached the remote; callers must
    /// re-describe to learn true remote state.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
}

impl GatewayError {
    /// Creates a new `RemoteRejected` error.
    #[must_use]
    pub fn remote_rejected(
        name: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::RemoteRejected {
            name: name.into(),
            status,
            message: message.into(),
        }
    }

    /// Creates a new `Transport` error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a remote rejection.
    #[must_use]
    pub fn is_remote_rejected(&self) -> bool {
        matches!(self, Self::RemoteRejected { .. })
    }

    /// Returns `true` if this is a transport failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` if a driver may retry the operation unchanged.
    ///
    /// Transport failures are transient; remote rejections require a state
    /// change (for a duplicate-create, a successful describe) first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.is_transport()
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RemoteRejected { .. } => ErrorCategory::Rejected,
            Self::Transport { .. } => ErrorCategory::Transport,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request deadline exceeded: {err}")
        } else {
            err.to_string()
        };
        Self::Transport { message }
    }
}

/// Categories of gateway errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Remote-side semantic rejection.
    Rejected,
    /// Network/protocol failure.
    Transport,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => write!(f, "rejected"),
            Self::Transport => write!(f, "transport"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::remote_rejected("MyTask01", 409, "already exists");
        assert_eq!(
            err.to_string(),
            "Remote rejected MyTask01 (HTTP 409): already exists"
        );

        let err = GatewayError::transport("connection refused");
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_error_predicates() {
        let rejected = GatewayError::remote_rejected("t1", 409, "dup");
        assert!(rejected.is_remote_rejected());
        assert!(!rejected.is_transport());
        assert!(!rejected.is_retryable());
        assert_eq!(rejected.category(), ErrorCategory::Rejected);

        let transport = GatewayError::transport("timeout");
        assert!(transport.is_retryable());
        assert_eq!(transport.category(), ErrorCategory::Transport);
    }
}
