//! Error types for definition normalization.

use std::fmt;

/// Errors that can occur while normalizing a task definition for comparison.
///
/// Projection is pure and deterministic; a malformed definition is its only
/// failure mode. These errors block reconciliation of the one resource that
/// carries the bad definition and must never be confused with transport or
/// remote-rejection failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// The definition text is empty or contains only whitespace.
    #[error("Definition is empty")]
    EmptyDefinition,

    /// A pipeline step has no name where one was required.
    #[error("Expected a step name at offset {position}")]
    MissingStepName {
        /// Offset into the definition text.
        position: usize,
    },

    /// A quoted argument value was never closed.
    #[error("Unterminated quote starting at offset {position}")]
    UnterminatedQuote {
        /// Offset of the opening quote.
        position: usize,
    },

    /// An argument did not follow the `--key=value` form.
    #[error("Malformed argument `{argument}` at offset {position}")]
    MalformedArgument {
        /// The offending argument text.
        argument: String,
        /// Offset of the argument.
        position: usize,
    },
}

impl ProjectionError {
    /// Creates a new `MissingStepName` error.
    #[must_use]
    pub fn missing_step_name(position: usize) -> Self {
        Self::MissingStepName { position }
    }

    /// Creates a new `UnterminatedQuote` error.
    #[must_use]
    pub fn unterminated_quote(position: usize) -> Self {
        Self::UnterminatedQuote { position }
    }

    /// Creates a new `MalformedArgument` error.
    #[must_use]
    pub fn malformed_argument(argument: impl Into<String>, position: usize) -> Self {
        Self::MalformedArgument {
            argument: argument.into(),
            position,
        }
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyDefinition => ErrorCategory::Empty,
            Self::MissingStepName { .. }
            | Self::UnterminatedQuote { .. }
            | Self::MalformedArgument { .. } => ErrorCategory::Syntax,
        }
    }
}

/// Categories of projection errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Empty definition text.
    Empty,
    /// Definition text that does not parse as a pipeline.
    Syntax,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Syntax => write!(f, "syntax"),
        }
    }
}

/// Convenience result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
