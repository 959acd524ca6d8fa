//! Desktop platform implementations
//!
//! Storage is kept in memory for the lifetime of the process, which is the
//! desktop equivalent of a browser tab's sessionStorage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::{DocumentProvider, SleepProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Process-scoped key/value storage
#[derive(Clone, Default)]
pub struct DesktopSessionStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl DesktopSessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for DesktopSessionStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let mut guard = self
            .entries
            .write()
            .map_err(|e| format!("storage lock poisoned: {}", e))?;
        guard.insert(key.to_string(), value.to_string());
        tracing::trace!(key, bytes = value.len(), "Session storage write");
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }
}

/// Desktop document provider
///
/// The window title is fixed at launch; page titles are only logged.
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        tracing::debug!(title, "Page title");
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopSleepProvider,
        DesktopSessionStorage::new(),
        DesktopDocumentProvider,
    )
}
