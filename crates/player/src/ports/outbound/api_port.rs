//! API Port - typed HTTP boundary and its error taxonomy
//!
//! `ApiPort` is generic (not object-safe); the application layer implements it
//! on top of the object-safe [`RawApiPort`](super::RawApiPort).

use mythweaver_shared::ErrorBody;
use serde::{de::DeserializeOwned, Serialize};

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Failure of a single request to the myth service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (connect failure, timeout, aborted request)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Server error ({status})")]
    Server {
        status: u16,
        detail: Option<String>,
        message: Option<String>,
    },

    /// Anything else: body decoding, request serialization
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = ErrorBody::parse(body);
        ApiError::Server {
            status,
            detail: body.detail_text(),
            message: body.message_text(),
        }
    }

    /// Text shown to the user in an error toast
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Server {
                status: 400,
                detail,
                ..
            } => detail
                .clone()
                .unwrap_or_else(|| "Invalid request. Please check your input.".to_string()),
            ApiError::Server { status: 429, .. } => {
                "Rate limit exceeded. Please try again later.".to_string()
            }
            ApiError::Server { status: 500, .. } => {
                "Server error. Please try again in a moment.".to_string()
            }
            ApiError::Server {
                status,
                detail,
                message,
            } => format!(
                "Server error ({}): {}",
                status,
                detail
                    .as_deref()
                    .or(message.as_deref())
                    .unwrap_or("Server error occurred")
            ),
            ApiError::Unexpected(msg) if msg.trim().is_empty() => {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
            ApiError::Unexpected(msg) => msg.clone(),
        }
    }
}

/// Typed JSON API
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_has_fixed_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(
            err.user_message(),
            "Network error. Please check your connection and try again."
        );
    }

    #[test]
    fn bad_request_prefers_server_detail() {
        let err = ApiError::from_response(400, r#"{"detail":"Scenario is too vague"}"#);
        assert_eq!(err.user_message(), "Scenario is too vague");

        let err = ApiError::from_response(400, "");
        assert_eq!(err.user_message(), "Invalid request. Please check your input.");
    }

    #[test]
    fn rate_limit_and_internal_error_messages() {
        assert_eq!(
            ApiError::from_response(429, r#"{"detail":"slow down"}"#).user_message(),
            "Rate limit exceeded. Please try again later."
        );
        assert_eq!(
            ApiError::from_response(500, "boom").user_message(),
            "Server error. Please try again in a moment."
        );
    }

    #[test]
    fn other_statuses_include_code_and_detail() {
        assert_eq!(
            ApiError::from_response(503, r#"{"detail":"Service Unavailable"}"#).user_message(),
            "Server error (503): Service Unavailable"
        );
        assert_eq!(
            ApiError::from_response(502, r#"{"message":"upstream"}"#).user_message(),
            "Server error (502): upstream"
        );
        assert_eq!(
            ApiError::from_response(418, "<html/>").user_message(),
            "Server error (418): Server error occurred"
        );
    }

    #[test]
    fn unexpected_falls_back_when_empty() {
        assert_eq!(
            ApiError::Unexpected(String::new()).user_message(),
            "An unexpected error occurred."
        );
        assert_eq!(
            ApiError::Unexpected("missing field `title`".into()).user_message(),
            "missing field `title`"
        );
    }
}
