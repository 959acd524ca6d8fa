//! Typed API wrapper over the object-safe raw port

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

/// Implements the generic [`ApiPort`] by (de)serializing around a
/// [`RawApiPort`]. Serde failures in either direction are `Unexpected`.
#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Unexpected(e.to_string()))
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Unexpected(e.to_string()))?;
        let value = self.raw.post_json(path, &body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Unexpected(e.to_string()))
    }
}
