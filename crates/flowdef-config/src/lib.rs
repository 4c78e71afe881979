//! # flowdef-config
//!
//! Connection descriptor parsing for Flowdef.
//!
//! The control plane connection is described by a JSON blob supplied by the
//! caller (typically lifted out of a provider secret). It is parsed and
//! validated exactly once, at service construction, into an immutable
//! [`ConnectionConfig`]; nothing revalidates afterwards. A malformed blob or
//! a missing/invalid endpoint URI fails fast with [`ConfigError`].

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Errors that can occur while building a [`ConnectionConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The connection descriptor is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The descriptor carries no endpoint URI.
    #[error("Connection descriptor is missing the endpoint URI")]
    MissingUri,

    /// The endpoint URI does not parse or uses an unsupported scheme.
    #[error("Invalid endpoint URI `{uri}`: {message}")]
    InvalidUri {
        /// The rejected URI text.
        uri: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates a new `Parse` error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a new `InvalidUri` error.
    #[must_use]
    pub fn invalid_uri(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            message: message.into(),
        }
    }
}

/// Wire form of the connection descriptor.
///
/// Field names are accepted in both the provider's PascalCase form and
/// camelCase.
#[derive(Debug, Deserialize)]
struct RawConnectionConfig {
    #[serde(alias = "Uri")]
    uri: Option<String>,
    #[serde(alias = "RequestTimeoutSecs", alias = "requestTimeoutSecs")]
    request_timeout_secs: Option<u64>,
}

/// Validated, immutable connection settings for the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base endpoint of the control plane API.
    pub uri: Url,
    /// Optional per-request deadline.
    pub request_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Parses and validates a JSON connection descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the blob is not JSON, the URI is absent,
    /// the URI does not parse, or its scheme is not http/https.
    pub fn from_json(blob: &[u8]) -> Result<Self, ConfigError> {
        let raw: RawConnectionConfig =
            serde_json::from_slice(blob).map_err(|e| ConfigError::parse(e.to_string()))?;

        let uri_text = raw.uri.ok_or(ConfigError::MissingUri)?;
        let uri = Url::parse(&uri_text)
            .map_err(|e| ConfigError::invalid_uri(&uri_text, e.to_string()))?;
        if !matches!(uri.scheme(), "http" | "https") {
            return Err(ConfigError::invalid_uri(
                &uri_text,
                format!("unsupported scheme `{}`", uri.scheme()),
            ));
        }

        Ok(Self {
            uri,
            request_timeout: raw.request_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Base endpoint with any trailing slash removed, for path joining.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.uri.as_str().trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_style_descriptor() {
        let config = ConnectionConfig::from_json(br#"{"Uri": "http://localhost:9393/"}"#).unwrap();
        assert_eq!(config.uri.as_str(), "http://localhost:9393/");
        assert_eq!(config.base_url(), "http://localhost:9393");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_camel_case_and_timeout() {
        let config = ConnectionConfig::from_json(
            br#"{"uri": "https://dataflow.example.com", "requestTimeoutSecs": 30}"#,
        )
        .unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_malformed_json() {
        let err = ConnectionConfig::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_uri() {
        let err = ConnectionConfig::from_json(b"{}").unwrap_err();
        assert!(matches!(err, ConfigError::MissingUri));
    }

    #[test]
    fn test_unparseable_uri() {
        let err = ConnectionConfig::from_json(br#"{"Uri": "not a uri"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUri { .. }));
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = ConnectionConfig::from_json(br#"{"Uri": "ftp://host/"}"#).unwrap_err();
        match err {
            ConfigError::InvalidUri { message, .. } => {
                assert!(message.contains("ftp"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
