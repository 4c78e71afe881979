//! Task definition domain types.
//!
//! Two representations exist for one remote resource: the declared desired
//! state supplied by the caller on every reconciliation pass, and the
//! observed state read back from the control plane. They are deliberately
//! separate types; equality between them is only defined through the
//! comparison projection (see [`crate::projection`]).

use serde::{Deserialize, Serialize};

/// Declared desired state of a task definition.
///
/// Owned by the caller and supplied fresh on every reconciliation pass. The
/// name is the sole identity key and is immutable once the resource has been
/// created; any change to the definition requires delete-then-recreate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredTaskDefinition {
    /// Unique identifier of the task definition on the remote.
    pub name: String,
    /// Free-form description, compared verbatim.
    pub description: String,
    /// Pipeline expression referencing zero or more registered applications.
    pub definition: String,
}

impl DesiredTaskDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            definition: definition.into(),
        }
    }
}

/// Observed state of a task definition as reported by the control plane.
///
/// `dsl_text` is the remote's canonical rendering of the definition and may
/// differ syntactically from the declared definition while remaining
/// semantically equivalent. Absence of the resource is modeled as
/// `Option<ObservedTaskDefinition>::None`, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedTaskDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The remote's rendering of the pipeline expression.
    #[serde(rename = "dslText")]
    pub dsl_text: String,
    #[serde(default)]
    pub status: TaskDefinitionStatus,
}

/// Remote lifecycle state of a task definition.
///
/// Unrecognized wire values map to `Unknown` so that a control plane adding
/// states does not break describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskDefinitionStatus {
    Running,
    Complete,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TaskDefinitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Running => write!(f, "running"),
            Self::Complete => write!(f, "complete"),
            Self::Error => write!(f, "error"),
        }
    }
}
