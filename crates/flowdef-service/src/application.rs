//! Application collaborator interface.
//!
//! A task definition's pipeline may reference application names that must be
//! registered with the control plane before the definition can be created.
//! Sequencing that is the driver's job; this core only declares the
//! interface it expects the collaborator to satisfy, so harnesses can stand
//! in a fake and scenarios can pre-register applications.

use async_trait::async_trait;

use crate::error::ServiceError;

/// Declared state of a registered application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Registration name, referenced from pipeline expressions.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Registered version.
    pub version: String,
}

impl Application {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
        }
    }
}

/// Lifecycle operations for applications, provided by an external
/// collaborator. This core never calls it; drivers sequence application
/// registration around task definition reconciliation.
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Registers the application with the control plane.
    async fn create_application(&self, app: &Application) -> Result<(), ServiceError>;

    /// Unregisters the application.
    async fn delete_application(&self, app: &Application) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that ApplicationService is object-safe
    fn _assert_application_service_object_safe(_: &dyn ApplicationService) {}
}
