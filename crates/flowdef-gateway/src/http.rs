//! HTTP gateway backend.
//!
//! Talks to the control plane's task definition endpoints:
//!
//! - `POST   /tasks/definitions`: create (form fields `name`, `definition`,
//!   `description`); 4xx means the remote rejected the request (duplicate
//!   name or validation failure)
//! - `GET    /tasks/definitions/{name}`: fetch; 404 maps to absence
//! - `DELETE /tasks/definitions/{name}`: delete; 404 is already-absent and
//!   therefore success
//!
//! The wrapped `reqwest::Client` pools connections and is safe to share
//! across concurrent reconciliation calls. Dropping an in-flight future
//! aborts the outstanding request; the optional request timeout from the
//! connection descriptor surfaces as a retryable transport error.

use async_trait::async_trait;
use flowdef_config::ConnectionConfig;
use flowdef_core::{DesiredTaskDefinition, ObservedTaskDefinition};
use tracing::debug;

use crate::error::GatewayError;
use crate::traits::TaskDefinitionGateway;
use crate::wire::{parse_observed, remote_message};

/// Gateway backed by the control plane's HTTP API.
pub struct HttpTaskDefinitionGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTaskDefinitionGateway {
    /// Builds a gateway from validated connection settings.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ConnectionConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    fn definitions_url(&self) -> String {
        format!("{}/tasks/definitions", self.base_url)
    }

    fn definition_url(&self, name: &str) -> String {
        format!("{}/tasks/definitions/{name}", self.base_url)
    }
}

#[async_trait]
impl TaskDefinitionGateway for HttpTaskDefinitionGateway {
    async fn create(&self, task: &DesiredTaskDefinition) -> Result<(), GatewayError> {
        debug!(name = %task.name, "creating task definition");
        let resp = self
            .http
            .post(self.definitions_url())
            .form(&[
                ("name", task.name.as_str()),
                ("definition", task.definition.as_str()),
                ("description", task.description.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        if status.is_client_error() {
            Err(GatewayError::remote_rejected(
                &task.name,
                status.as_u16(),
                remote_message(&body),
            ))
        } else {
            Err(GatewayError::transport(format!(
                "create failed (HTTP {status}): {body}"
            )))
        }
    }

    async fn fetch_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ObservedTaskDefinition>, GatewayError> {
        debug!(name, "fetching task definition");
        let resp = self.http.get(self.definition_url(name)).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::transport(format!(
                "fetch failed (HTTP {status}): {body}"
            )));
        }
        let body = resp.text().await?;
        parse_observed(&body).map(Some)
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), GatewayError> {
        debug!(name, "deleting task definition");
        let resp = self.http.delete(self.definition_url(name)).send().await?;

        let status = resp.status();
        // 404 means the resource is already gone, which is the outcome the
        // caller asked for.
        if status.is_success() || status == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        if status.is_client_error() {
            Err(GatewayError::remote_rejected(
                name,
                status.as_u16(),
                remote_message(&body),
            ))
        } else {
            Err(GatewayError::transport(format!(
                "delete failed (HTTP {status}): {body}"
            )))
        }
    }

    fn gateway_name(&self) -> &'static str {
        "http"
    }
}
