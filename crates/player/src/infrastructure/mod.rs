//! Infrastructure adapters
//!
//! Concrete implementations of the outbound ports: the HTTP transport,
//! platform services, browser actions and share-image render targets.

pub mod browser;
pub mod http_client;
pub mod platform;
pub mod render;

pub use browser::create_browser;
pub use http_client::ApiAdapter;
pub use platform::create_platform;
