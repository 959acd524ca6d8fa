//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the myth service, browser
//! and platform without depending on concrete implementations.

pub mod api_port;
pub mod browser_port;
pub mod platform;
pub mod platform_port;
pub mod raw_api_port;
pub mod render_port;

pub use api_port::{ApiError, ApiPort};
pub use browser_port::{BrowserError, BrowserPort, DownloadFile, DownloadPayload};
pub use platform::{
    storage_keys, DocumentProvider, SleepProvider, StorageProvider, TimeProvider,
};
pub use platform_port::PlatformPort;
pub use raw_api_port::RawApiPort;
pub use render_port::{RasterImage, RenderError, RenderTarget};

#[cfg(any(test, feature = "testing"))]
pub use browser_port::MockBrowserPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
