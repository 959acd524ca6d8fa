//! MythWeaver Player crate.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Browser and desktop builds are selected at compile time via `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, Route};
