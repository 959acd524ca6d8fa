//! Platform-specific implementations
//!
//! Implementations of the platform provider traits defined in
//! `ports/outbound/platform.rs`. The platform is selected at compile time
//! from the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmDocumentProvider, WasmSleepProvider, WasmStorageProvider,
    WasmTimeProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopDocumentProvider, DesktopSessionStorage, DesktopSleepProvider,
    DesktopTimeProvider,
};
