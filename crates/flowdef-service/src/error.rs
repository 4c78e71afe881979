//! Service error type.

use flowdef_config::ConfigError;
use flowdef_core::ProjectionError;
use flowdef_gateway::GatewayError;

/// Errors surfaced by the task definition service.
///
/// The service adds no failure modes of its own; each variant wraps one
/// collaborator's error so callers can tell a remote/transport problem, a
/// malformed definition, and a bad connection descriptor apart without
/// string matching. Gateway errors pass through transparently: the kind a
/// driver sees is exactly the kind the gateway produced.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A gateway operation failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A definition could not be normalized for comparison.
    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    /// The connection descriptor was rejected at construction.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ServiceError {
    /// Returns `true` if a driver may retry the operation unchanged.
    ///
    /// Only transient gateway failures qualify; rejections, malformed
    /// definitions, and bad configuration need a state change first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Gateway(err) if err.is_retryable())
    }

    /// Returns `true` if this wraps a remote rejection.
    #[must_use]
    pub fn is_remote_rejected(&self) -> bool {
        matches!(self, Self::Gateway(err) if err.is_remote_rejected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_errors_pass_through_verbatim() {
        let err: ServiceError = GatewayError::remote_rejected("t1", 409, "dup").into();
        // transparent: the gateway's own message, nothing prepended
        assert_eq!(err.to_string(), "Remote rejected t1 (HTTP 409): dup");
        assert!(err.is_remote_rejected());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryability_delegation() {
        let transient: ServiceError = GatewayError::transport("timeout").into();
        assert!(transient.is_retryable());

        let malformed: ServiceError = ProjectionError::EmptyDefinition.into();
        assert!(!malformed.is_retryable());
        assert!(malformed.to_string().starts_with("Projection error:"));
    }
}
