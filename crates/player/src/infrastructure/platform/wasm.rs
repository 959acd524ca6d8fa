//! WASM platform implementations
//!
//! Backed by the browser: `Date.now()`, `setTimeout` via gloo-timers,
//! `window.sessionStorage` and `document.title`.

use std::{future::Future, pin::Pin};

use send_wrapper::SendWrapper;

use crate::ports::outbound::{DocumentProvider, SleepProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// sessionStorage-backed provider
///
/// `web_sys::Storage` is `!Send`; the wrapper is sound because WASM runs
/// on a single thread.
#[derive(Clone)]
pub struct WasmStorageProvider {
    storage: Option<SendWrapper<web_sys::Storage>>,
}

impl WasmStorageProvider {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .map(SendWrapper::new);
        if storage.is_none() {
            tracing::warn!("sessionStorage unavailable; stories will not survive navigation");
        }
        Self { storage }
    }
}

impl Default for WasmStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| "sessionStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("sessionStorage rejected write: {:?}", e))
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }
}

#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        })
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmStorageProvider::new(),
        WasmDocumentProvider,
    )
}
