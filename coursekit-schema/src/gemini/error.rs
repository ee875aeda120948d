use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Google-style error envelope returned by the Gemini API on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiErrorBody {
    #[serde(rename = "error")]
    pub inner: GeminiErrorObject,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiErrorObject {
    /// Usually equal to the HTTP status code (`400`, `403`, `429`, …).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Canonical status name, e.g. `"INVALID_ARGUMENT"` or `"RESOURCE_EXHAUSTED"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Value>>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GeminiErrorBody {
    pub fn status(&self) -> &str {
        self.inner
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("UNKNOWN")
    }

    pub fn message(&self) -> &str {
        self.inner
            .message
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Upstream error without message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_invalid_key_error() {
        let raw = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [
                    { "@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "API_KEY_INVALID" }
                ]
            }
        }"#;

        let parsed: GeminiErrorBody = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.inner.code, Some(400));
        assert_eq!(parsed.status(), "INVALID_ARGUMENT");
        assert!(parsed.message().starts_with("API key not valid"));
        assert_eq!(parsed.inner.details.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn missing_fields_fall_back() {
        let parsed: GeminiErrorBody = serde_json::from_str(r#"{"error": {}}"#).unwrap();
        assert_eq!(parsed.status(), "UNKNOWN");
        assert_eq!(parsed.message(), "Upstream error without message");
    }
}
