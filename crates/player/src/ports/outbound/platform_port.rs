//! PlatformPort - Unified platform services interface
//!
//! Abstracts the Platform DI container so the UI layer can take it from
//! context as `Arc<dyn PlatformPort>`.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Today's date in local time
    fn today(&self) -> chrono::NaiveDate;

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    fn storage_save(&self, key: &str, value: &str) -> Result<(), String>;

    fn storage_load(&self, key: &str) -> Option<String>;

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    fn set_page_title(&self, title: &str);
}
