//! # flowdef-gateway-memory
//!
//! In-memory implementation of the task definition gateway.
//!
//! Behaves like a well-mannered control plane: duplicate creates are
//! rejected, fetches of unknown names report absence, deletes of unknown
//! names succeed. Stored observations echo the submitted definition text as
//! their `dslText`, so drift comparisons exercise the same projection path
//! they would against a real remote.
//!
//! [`InMemoryTaskDefinitionGateway::set_offline`] turns every operation into
//! a transport failure, for driving retry/backoff paths in driver tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use flowdef_core::{DesiredTaskDefinition, ObservedTaskDefinition, TaskDefinitionStatus};
use flowdef_gateway::{GatewayError, TaskDefinitionGateway};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory gateway backend keyed by task definition name.
#[derive(Debug, Default)]
pub struct InMemoryTaskDefinitionGateway {
    data: Arc<RwLock<HashMap<String, ObservedTaskDefinition>>>,
    offline: AtomicBool,
}

impl InMemoryTaskDefinitionGateway {
    /// Creates an empty in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline, every operation fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of task definitions currently stored.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// Returns `true` when no task definitions are stored.
    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }

    fn check_online(&self) -> Result<(), GatewayError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(GatewayError::transport("gateway is offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TaskDefinitionGateway for InMemoryTaskDefinitionGateway {
    async fn create(&self, task: &DesiredTaskDefinition) -> Result<(), GatewayError> {
        self.check_online()?;
        let mut data = self.data.write().await;
        if data.contains_key(&task.name) {
            return Err(GatewayError::remote_rejected(
                &task.name,
                409,
                "name already in use",
            ));
        }
        debug!(name = %task.name, "storing task definition");
        data.insert(
            task.name.clone(),
            ObservedTaskDefinition {
                name: task.name.clone(),
                description: task.description.clone(),
                dsl_text: task.definition.clone(),
                status: TaskDefinitionStatus::Unknown,
            },
        );
        Ok(())
    }

    async fn fetch_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ObservedTaskDefinition>, GatewayError> {
        self.check_online()?;
        Ok(self.data.read().await.get(name).cloned())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), GatewayError> {
        self.check_online()?;
        // Removing an absent name is a no-op, matching the remote contract.
        self.data.write().await.remove(name);
        Ok(())
    }

    fn gateway_name(&self) -> &'static str {
        "memory"
    }
}
