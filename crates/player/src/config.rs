//! Client configuration
//!
//! Resolved once at startup. Native builds read the process environment
//! (after `.env`); WASM builds bake values in at compile time.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use mythweaver_shared::DEFAULT_API_BASE_PATH;

pub const API_URL_ENV: &str = "MYTHWEAVER_API_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "MYTHWEAVER_REQUEST_TIMEOUT_MS";
pub const SHARE_BASE_URL_ENV: &str = "MYTHWEAVER_SHARE_BASE_URL";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_DESKTOP_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://mythweaver.fun";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is joined onto
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// Public origin used to build share links when the app is not served
    /// from a browser location (desktop)
    pub share_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url().to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_api_base_url() -> &'static str {
    DEFAULT_API_BASE_PATH
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base_url() -> &'static str {
    DEFAULT_DESKTOP_API_URL
}

impl ClientConfig {
    /// Build from a key lookup; blank or invalid values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let request_timeout_ms = match non_blank(REQUEST_TIMEOUT_ENV) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "Ignoring invalid {}, using {}ms",
                        REQUEST_TIMEOUT_ENV,
                        defaults.request_timeout_ms
                    );
                    defaults.request_timeout_ms
                }
            },
            None => defaults.request_timeout_ms,
        };

        Self {
            api_base_url: non_blank(API_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout_ms,
            share_base_url: non_blank(SHARE_BASE_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.share_base_url),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                API_URL_ENV => option_env!("MYTHWEAVER_API_URL"),
                REQUEST_TIMEOUT_ENV => option_env!("MYTHWEAVER_REQUEST_TIMEOUT_MS"),
                SHARE_BASE_URL_ENV => option_env!("MYTHWEAVER_SHARE_BASE_URL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
