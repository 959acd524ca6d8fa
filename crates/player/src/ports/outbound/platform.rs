//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`. Ports contain only trait definitions.

use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (reveal ticks, toast timers).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Tab-scoped key/value storage (sessionStorage in the browser)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key, returning a description of
    /// the failure when the backend rejects the write
    fn save(&self, key: &str, value: &str) -> Result<(), String>;

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (window title on desktop)
    fn set_page_title(&self, title: &str);
}

/// Storage key constants
///
/// The story page reads exactly what the input page writes.
pub mod storage_keys {
    /// Serialized story result of the last generation
    pub const MYTH_DATA: &str = "mythData";
    /// Trimmed scenario of the last generation
    pub const INPUT_SCENARIO: &str = "inputScenario";
}
