//! # flowdef-service
//!
//! Task definition reconciliation service for Flowdef.
//!
//! [`TaskDefinitionService`] is the single capability-typed surface a
//! reconciliation driver talks to: create, describe (observe-or-absent),
//! delete, and the comparison projection for drift detection. All transport
//! goes through the gateway trait, so the whole surface runs unchanged
//! against the HTTP backend or a fake.
//!
//! ```ignore
//! use flowdef_core::DesiredTaskDefinition;
//! use flowdef_service::TaskDefinitionService;
//!
//! let service = TaskDefinitionService::from_json(br#"{"Uri": "http://localhost:9393/"}"#)?;
//! let desired = DesiredTaskDefinition::new("MyTask01", "MyDesc", "Test010");
//!
//! if service.describe_task_definition(&desired).await?.is_none() {
//!     service.create_task_definition(&desired).await?;
//! }
//! ```

mod application;
mod error;
mod service;

pub use application::{Application, ApplicationService};
pub use error::ServiceError;
pub use service::TaskDefinitionService;

/// Type alias for a service result.
pub type ServiceResult<T> = Result<T, ServiceError>;
