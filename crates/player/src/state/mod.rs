//! State containers for player-side dependency injection
//!
//! This module contains DI containers that aggregate platform adapters.

mod platform;

pub use platform::Platform;
