//! Wire-level response handling for the control plane API.

use flowdef_core::ObservedTaskDefinition;
use serde_json::Value;

use crate::error::GatewayError;

/// Parses a 2xx fetch response body into an observation.
///
/// The control plane returns the resource flat (`name`, `description`,
/// `dslText`, `status`) alongside hypermedia noise, which serde ignores.
pub(crate) fn parse_observed(body: &str) -> Result<ObservedTaskDefinition, GatewayError> {
    serde_json::from_str(body)
        .map_err(|e| GatewayError::transport(format!("undecodable resource body: {e}")))
}

/// Best-effort extraction of a human-readable message from a remote error
/// body.
///
/// The control plane reports errors either as `{"message": ...}` or as an
/// array of such objects; anything else falls back to the raw body.
pub(crate) fn remote_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let candidate = match &json {
            Value::Array(items) => items.first().and_then(|i| i.get("message")),
            _ => json.get("message"),
        };
        if let Some(message) = candidate.and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdef_core::TaskDefinitionStatus;

    #[test]
    fn test_parse_observed_ignores_hypermedia() {
        let observed = parse_observed(
            r#"{
                "name": "MyTask01",
                "dslText": "Test010",
                "description": "MyDesc",
                "status": "UNKNOWN",
                "composed": false,
                "_links": {"self": {"href": "http://localhost:9393/tasks/definitions/MyTask01"}}
            }"#,
        )
        .unwrap();

        assert_eq!(observed.name, "MyTask01");
        assert_eq!(observed.dsl_text, "Test010");
        assert_eq!(observed.status, TaskDefinitionStatus::Unknown);
    }

    #[test]
    fn test_parse_observed_rejects_garbage() {
        let err = parse_observed("<html>gateway timeout</html>").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_remote_message_object() {
        assert_eq!(
            remote_message(r#"{"message": "name already in use"}"#),
            "name already in use"
        );
    }

    #[test]
    fn test_remote_message_array() {
        assert_eq!(
            remote_message(r#"[{"message": "invalid definition"}]"#),
            "invalid definition"
        );
    }

    #[test]
    fn test_remote_message_fallback() {
        assert_eq!(remote_message("plain text failure"), "plain text failure");
        assert_eq!(remote_message(r#"{"error": "nope"}"#), r#"{"error": "nope"}"#);
    }
}
