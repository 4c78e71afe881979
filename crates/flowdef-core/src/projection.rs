//! Comparison projection between desired and observed task definitions.
//!
//! Desired and observed state carry the pipeline expression in different
//! fields and potentially different surface syntax. [`project`] maps either
//! representation onto one canonical comparable shape so drift detection is
//! a plain equality check and the normalization rules live in exactly one
//! place.

use crate::dsl::Pipeline;
use crate::error::Result;
use crate::task_definition::{DesiredTaskDefinition, ObservedTaskDefinition};

/// Representation-agnostic comparable shape of a task definition.
///
/// Used only for equality testing, never persisted. Name and description are
/// compared verbatim; `definition` holds the canonical pipeline rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinitionCompare {
    pub name: String,
    pub description: String,
    /// Canonical rendering of the pipeline expression.
    pub definition: String,
}

/// Either side of a comparison, borrowed from the caller.
///
/// Desired and observed task definitions are unrelated types by design; this
/// sum type is the single seam through which both reach the projector, one
/// normalization branch per variant.
#[derive(Debug, Clone, Copy)]
pub enum TaskDefinitionRepr<'a> {
    Desired(&'a DesiredTaskDefinition),
    Observed(&'a ObservedTaskDefinition),
}

impl<'a> From<&'a DesiredTaskDefinition> for TaskDefinitionRepr<'a> {
    fn from(desired: &'a DesiredTaskDefinition) -> Self {
        Self::Desired(desired)
    }
}

impl<'a> From<&'a ObservedTaskDefinition> for TaskDefinitionRepr<'a> {
    fn from(observed: &'a ObservedTaskDefinition) -> Self {
        Self::Observed(observed)
    }
}

impl TaskDefinitionRepr<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Desired(d) => &d.name,
            Self::Observed(o) => &o.name,
        }
    }

    fn description(&self) -> &str {
        match self {
            Self::Desired(d) => &d.description,
            Self::Observed(o) => &o.description,
        }
    }

    /// The raw pipeline expression: the declared definition for desired
    /// state, the remote's `dslText` for observed state.
    fn expression(&self) -> &str {
        match self {
            Self::Desired(d) => &d.definition,
            Self::Observed(o) => &o.dsl_text,
        }
    }
}

/// Projects either representation onto the comparable shape.
///
/// Pure and deterministic. Fails only when the pipeline expression does not
/// parse; see [`crate::error::ProjectionError`].
pub fn project<'a>(source: impl Into<TaskDefinitionRepr<'a>>) -> Result<TaskDefinitionCompare> {
    let source = source.into();
    let pipeline = Pipeline::parse(source.expression())?;
    Ok(TaskDefinitionCompare {
        name: source.name().to_string(),
        description: source.description().to_string(),
        definition: pipeline.canonical(),
    })
}
