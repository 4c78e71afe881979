//! The gateway trait every remote backend implements.

use async_trait::async_trait;
use flowdef_core::{DesiredTaskDefinition, ObservedTaskDefinition};

use crate::error::GatewayError;

/// Stateless operations against the remote task definition API.
///
/// Implementations must be safe for concurrent use (`Send + Sync`); the
/// service layer shares one instance across all reconciliation calls.
/// Gateways carry no reconciliation policy: no retries, no existence
/// pre-checks, no error remapping. That policy belongs to the driver, which
/// can be tested against a fake implementation of this trait.
#[async_trait]
pub trait TaskDefinitionGateway: Send + Sync {
    /// Issues a remote creation request for the task definition.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::RemoteRejected` when the remote reports a
    /// conflict (name already exists) or validation failure. A retried
    /// create whose first attempt succeeded remotely will surface as a
    /// duplicate rejection; reconciling that into success is the caller's
    /// decision, not the gateway's.
    async fn create(&self, task: &DesiredTaskDefinition) -> Result<(), GatewayError>;

    /// Fetches the task definition with the given name.
    ///
    /// Returns `Ok(None)` when the remote reports "not found"; absence is
    /// data, not failure.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` for any outcome other than a
    /// well-formed resource or a clean not-found.
    async fn fetch_by_name(&self, name: &str)
    -> Result<Option<ObservedTaskDefinition>, GatewayError>;

    /// Deletes the task definition with the given name.
    ///
    /// Deleting an absent resource is not a failure; after a successful
    /// return the resource is not present. Callers wanting proof re-fetch
    /// rather than trusting this return value.
    async fn delete_by_name(&self, name: &str) -> Result<(), GatewayError>;

    /// Returns the name of this gateway backend for logging/debugging.
    fn gateway_name(&self) -> &'static str;
}

/// Type alias for a shared gateway trait object.
pub type DynGateway = std::sync::Arc<dyn TaskDefinitionGateway>;

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that TaskDefinitionGateway is object-safe
    fn _assert_gateway_object_safe(_: &dyn TaskDefinitionGateway) {}
}
