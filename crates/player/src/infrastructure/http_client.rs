//! HTTP adapter for the myth service
//!
//! `reqwest` on native targets, `gloo-net` on WASM. One attempt per call, no
//! retries; the configured timeout covers the whole exchange. Anything that
//! prevents a response from arriving is reported as [`ApiError::Network`].

use std::time::Duration;

use serde_json::Value;

use mythweaver_shared::routes;

use crate::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    timeout: Duration,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(config: &ClientConfig) -> Self {
        let timeout = config.request_timeout();

        // Every request also sets the timeout; see get_json/post_json.
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout,
            #[cfg(not(target_arch = "wasm32"))]
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        routes::join(&self.base_url, path)
    }
}

// =============================================================================
// Native transport
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl ApiAdapter {
    async fn execute(
        &self,
        method: &'static str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ApiError> {
        tracing::debug!(method, path, "API request");

        let response = request.send().await.map_err(|e| {
            let err = classify_reqwest_error(&e);
            tracing::warn!(method, path, error = %e, "API request failed");
            err
        })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), path, "API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), path, "API returned error status");
            return Err(err);
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!(path, error = %e, "Failed to decode API response");
            classify_reqwest_error(&e)
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn classify_reqwest_error(e: &reqwest::Error) -> ApiError {
    if e.is_decode() || e.is_builder() {
        ApiError::Unexpected(e.to_string())
    } else if e.is_timeout() {
        ApiError::Network(format!("request timed out: {}", e))
    } else {
        ApiError::Network(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.client.get(self.url(path)).timeout(self.timeout);
        self.execute("GET", path, request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self
            .client
            .post(self.url(path))
            .timeout(self.timeout)
            .json(body);
        self.execute("POST", path, request).await
    }
}

// =============================================================================
// WASM transport
// =============================================================================

#[cfg(target_arch = "wasm32")]
impl ApiAdapter {
    async fn execute(
        &self,
        method: &'static str,
        path: &str,
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<Value, ApiError> {
        use futures_util::future::{select, Either};
        use gloo_timers::future::TimeoutFuture;

        tracing::debug!(method, path, "API request");

        let request = request.map_err(|e| ApiError::Unexpected(e.to_string()))?;
        let timeout_ms = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);

        let sent = Box::pin(request.send());
        let response = match select(sent, TimeoutFuture::new(timeout_ms)).await {
            Either::Left((Ok(response), _)) => response,
            Either::Left((Err(e), _)) => {
                tracing::warn!(method, path, error = %e, "API request failed");
                return Err(ApiError::Network(e.to_string()));
            }
            Either::Right(_) => {
                tracing::warn!(method, path, timeout_ms, "API request timed out");
                return Err(ApiError::Network(format!(
                    "request timed out after {}ms",
                    timeout_ms
                )));
            }
        };

        let status = response.status();
        tracing::debug!(status, path, "API response");

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, path, "API returned error status");
            return Err(ApiError::from_response(status, &body));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!(path, error = %e, "Failed to decode API response");
            ApiError::Unexpected(e.to_string())
        })
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = gloo_net::http::Request::get(&self.url(path)).build();
        self.execute("GET", path, request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = gloo_net::http::Request::post(&self.url(path)).json(body);
        self.execute("POST", path, request).await
    }
}
