//! # flowdef-gateway
//!
//! Remote resource gateway for Flowdef task definitions.
//!
//! This crate defines the [`TaskDefinitionGateway`] trait (the stateless
//! create / fetch-by-name / delete-by-name contract every remote backend
//! implements), the gateway error taxonomy, and the HTTP backend that talks
//! to a real control plane. A hermetic in-memory backend lives in the
//! `flowdef-gateway-memory` crate.
//!
//! Two invariants hold across all backends:
//!
//! - Absence is data: `fetch_by_name` returns `Ok(None)` for a missing
//!   resource, and `delete_by_name` succeeds when there is nothing to
//!   delete.
//! - No policy: gateways never retry, never pre-check existence, and never
//!   remap errors. Every failure reaches the caller with its kind intact.

mod error;
mod http;
mod traits;
mod wire;

pub use error::{ErrorCategory, GatewayError};
pub use http::HttpTaskDefinitionGateway;
pub use traits::{DynGateway, TaskDefinitionGateway};

/// Type alias for a gateway result.
pub type GatewayResult<T> = Result<T, GatewayError>;
