//! Wire types of the debate backend
//!
//! Both endpoints answer `{"response": "<text>"}`. Error responses carry a
//! FastAPI-style `detail`, either a message or a list of validation errors.

use serde::Deserialize;
use serde_json::Value;

/// Successful response body
#[derive(Debug, Deserialize)]
pub struct BackendResponse {
    pub response: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Extract a human-readable `detail` from an error body, if it has one
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(message) if !message.trim().is_empty() => Some(message),
        Value::String(_) | Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Rate limit exceeded"}"#),
            Some("Rate limit exceeded".to_string())
        );
    }

    #[test]
    fn test_structured_detail_is_rendered_as_json() {
        let detail = error_detail(r#"{"detail": [{"loc": ["body", "topic"], "msg": "field required"}]}"#)
            .unwrap();
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_missing_or_unparseable_detail() {
        assert_eq!(error_detail(r#"{"error": "nope"}"#), None);
        assert_eq!(error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(error_detail(r#"{"detail": ""}"#), None);
    }

    #[test]
    fn test_backend_response_decodes() {
        let decoded: BackendResponse = serde_json::from_str(r#"{"response": "hi"}"#).unwrap();
        assert_eq!(decoded.response, "hi");
    }
}
