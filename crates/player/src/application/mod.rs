//! Application layer - Use cases and orchestration

pub mod api;
pub mod error;
pub mod services;

pub use api::Api;
pub use error::{AppError, StoreError};
