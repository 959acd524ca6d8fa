//! In-memory platform for tests
//!
//! Fixed clock, instant sleeps and a shared map for storage. Storage can be
//! switched to reject writes to exercise quota failures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::{DocumentProvider, SleepProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

/// 2024-12-01T12:00:00Z
pub const MOCK_NOW_MILLIS: u64 = 1_733_054_400_000;

#[derive(Clone)]
pub struct MockTimeProvider {
    now: u64,
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self {
            now: MOCK_NOW_MILLIS,
        }
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.now
    }
}

#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

#[derive(Clone, Default)]
pub struct MockStorageProvider {
    entries: Arc<Mutex<HashMap<String, String>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MockStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err("quota exceeded".to_string());
        }
        self.entries
            .lock()
            .map_err(|e| e.to_string())?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    titles: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentProvider {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut titles) = self.titles.lock() {
            titles.push(title.to_string());
        }
    }
}

/// Platform plus a handle on its storage for assertions
pub struct MockPlatform {
    pub platform: Platform,
    pub storage: MockStorageProvider,
}

pub fn create_mock_platform() -> MockPlatform {
    let storage = MockStorageProvider::new();
    let platform = Platform::new(
        MockTimeProvider::default(),
        MockSleepProvider,
        storage.clone(),
        MockDocumentProvider::default(),
    );
    MockPlatform { platform, storage }
}
