//! Response bodies

use mythweaver_domain::common::none_if_blank;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /generate-myth`; the domain model is the
/// wire shape.
pub type GenerateMythResponse = mythweaver_domain::StoryResult;

/// Body of `GET /health`. Fields are informational and all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

/// Error body sent with non-2xx responses.
///
/// `detail` is usually a string but validation failures carry a structured
/// list, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, tolerating empty or non-JSON payloads
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// `detail` as display text
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => none_if_blank(s).map(str::to_string),
            other => Some(other.to_string()),
        }
    }

    /// `message`, unless blank
    pub fn message_text(&self) -> Option<String> {
        self.message
            .as_deref()
            .and_then(none_if_blank)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_tolerates_missing_and_extra_fields() {
        let health: HealthResponse =
            serde_json::from_value(json!({ "status": "healthy", "uptime": 12 })).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version, None);

        let full: HealthResponse = serde_json::from_value(json!({
            "status": "healthy",
            "version": "1.0.0",
            "timestamp": "2026-01-01T00:00:00Z",
            "environment": "production"
        }))
        .unwrap();
        assert_eq!(full.environment.as_deref(), Some("production"));
    }

    #[test]
    fn test_error_body_text_fields() {
        let body = ErrorBody::parse(r#"{"detail":"Scenario too vague","message":"x"}"#);
        assert_eq!(body.detail_text().as_deref(), Some("Scenario too vague"));
        assert_eq!(body.message_text().as_deref(), Some("x"));

        let body = ErrorBody::parse(r#"{"detail":"  ","message":"upstream down"}"#);
        assert_eq!(body.detail_text(), None);
        assert_eq!(body.message_text().as_deref(), Some("upstream down"));
    }

    #[test]
    fn test_error_body_structured_detail() {
        let body = ErrorBody::parse(r#"{"detail":[{"loc":["body","scenario"]}]}"#);
        assert!(body.detail_text().unwrap().contains("scenario"));
    }

    #[test]
    fn test_error_body_garbage() {
        let body = ErrorBody::parse("<html>Bad gateway</html>");
        assert_eq!(body, ErrorBody::default());
        assert_eq!(body.detail_text(), None);
        assert_eq!(body.message_text(), None);
    }
}
