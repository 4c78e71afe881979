//! The task definition service.

use std::sync::Arc;

use flowdef_config::ConnectionConfig;
use flowdef_core::{
    DesiredTaskDefinition, ObservedTaskDefinition, TaskDefinitionCompare, TaskDefinitionRepr,
    project,
};
use flowdef_gateway::{DynGateway, HttpTaskDefinitionGateway};
use tracing::debug;

use crate::error::ServiceError;

/// Capability-typed surface over gateway and projector.
///
/// The service is stateless: its only field is a shared gateway, so cloning
/// it is cheap and every operation may run concurrently. It carries no
/// reconciliation policy (no retries, no existence pre-checks) because
/// only the driving controller knows its cadence and backoff rules.
/// Concurrent operations on the same name are resolved by the remote, not
/// serialized here.
///
/// The externally driven state machine per name is
/// `Absent → create → Present → delete → Absent`; drift while `Present` is
/// remediated by delete-then-create, never in place, because the remote
/// models task definitions as immutable.
#[derive(Clone)]
pub struct TaskDefinitionService {
    gateway: DynGateway,
}

impl std::fmt::Debug for TaskDefinitionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDefinitionService")
            .field("gateway", &self.gateway.gateway_name())
            .finish()
    }
}

impl TaskDefinitionService {
    /// Builds a service from a JSON connection descriptor, wiring the HTTP
    /// gateway. This is the production entry point and the only place
    /// configuration is validated.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Configuration` for a malformed descriptor and
    /// `ServiceError::Gateway` if the HTTP client cannot be constructed.
    pub fn from_json(blob: &[u8]) -> Result<Self, ServiceError> {
        let config = ConnectionConfig::from_json(blob)?;
        let gateway = HttpTaskDefinitionGateway::new(&config)?;
        Ok(Self::with_gateway(Arc::new(gateway)))
    }

    /// Builds a service over an injected gateway. Tests and drivers use this
    /// to run the reconciliation surface against a fake remote.
    pub fn with_gateway(gateway: DynGateway) -> Self {
        debug!(gateway = gateway.gateway_name(), "task definition service ready");
        Self { gateway }
    }

    /// Creates the task definition on the remote.
    ///
    /// No existence pre-check: callers wanting idempotent creation describe
    /// first. A duplicate name surfaces as a remote rejection, untouched.
    pub async fn create_task_definition(
        &self,
        task: &DesiredTaskDefinition,
    ) -> Result<(), ServiceError> {
        self.gateway.create(task).await?;
        Ok(())
    }

    /// Observes the task definition's remote state.
    ///
    /// `Ok(None)` means the resource does not exist; whether it never did
    /// or was deleted is indistinguishable. This is the sole existence-check
    /// primitive.
    pub async fn describe_task_definition(
        &self,
        task: &DesiredTaskDefinition,
    ) -> Result<Option<ObservedTaskDefinition>, ServiceError> {
        let observed = self.gateway.fetch_by_name(&task.name).await?;
        Ok(observed)
    }

    /// Deletes the task definition from the remote.
    ///
    /// Success is not proof of absence; callers re-describe to confirm,
    /// which also absorbs remotes that error on double-delete.
    pub async fn delete_task_definition(
        &self,
        task: &DesiredTaskDefinition,
    ) -> Result<(), ServiceError> {
        self.gateway.delete_by_name(&task.name).await?;
        Ok(())
    }

    /// Projects either desired or observed state onto the comparable shape.
    ///
    /// Exposed so reconciliation logic can diff desired against observed
    /// without duplicating the normalization rules. A normalization failure
    /// comes back as `ServiceError::Projection`, distinct from any
    /// remote/transport kind.
    pub fn map_to_task_definition_compare<'a>(
        &self,
        source: impl Into<TaskDefinitionRepr<'a>>,
    ) -> Result<TaskDefinitionCompare, ServiceError> {
        let compare = project(source)?;
        Ok(compare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_rejects_bad_descriptor() {
        let err = TaskDefinitionService::from_json(b"{}").unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));

        let err = TaskDefinitionService::from_json(b"not json").unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }

    #[test]
    fn test_from_json_accepts_provider_descriptor() {
        let service =
            TaskDefinitionService::from_json(br#"{"Uri": "http://localhost:9393/"}"#).unwrap();
        // cheap to clone and share across reconciliation calls
        let _clone = service.clone();
    }

    #[test]
    fn test_projection_error_kind_is_distinct() {
        let service =
            TaskDefinitionService::from_json(br#"{"Uri": "http://localhost:9393/"}"#).unwrap();
        let bad = DesiredTaskDefinition::new("t1", "d", "");
        let err = service.map_to_task_definition_compare(&bad).unwrap_err();
        assert!(matches!(err, ServiceError::Projection(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_compare_accepts_both_representations() {
        let service =
            TaskDefinitionService::from_json(br#"{"Uri": "http://localhost:9393/"}"#).unwrap();

        let desired = DesiredTaskDefinition::new("t1", "d", "timestamp --format=yyyy");
        let observed = ObservedTaskDefinition {
            name: "t1".to_string(),
            description: "d".to_string(),
            dsl_text: "timestamp --format='yyyy'".to_string(),
            status: Default::default(),
        };

        let left = service.map_to_task_definition_compare(&desired).unwrap();
        let right = service.map_to_task_definition_compare(&observed).unwrap();
        assert_eq!(left, right);
    }
}
