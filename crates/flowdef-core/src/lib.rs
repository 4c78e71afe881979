//! # flowdef-core
//!
//! Core task definition types and normalization for Flowdef.
//!
//! This crate defines the two representations of a remote task definition
//! (declared desired state and observed remote state), the pipeline DSL
//! parser, and the comparison projection that gives the two a stable
//! equality notion for drift detection. It knows nothing about transports;
//! gateways and services build on top of it.

pub mod dsl;
pub mod error;
pub mod projection;
pub mod task_definition;

pub use dsl::{Pipeline, PipelineStep};
pub use error::{ErrorCategory, ProjectionError};
pub use projection::{TaskDefinitionCompare, TaskDefinitionRepr, project};
pub use task_definition::{DesiredTaskDefinition, ObservedTaskDefinition, TaskDefinitionStatus};
