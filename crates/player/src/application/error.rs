//! Application error type
//!
//! Aggregates the per-layer errors so controllers can use `?` and the UI can
//! turn any failure into toast text with [`AppError::user_message`].

use mythweaver_domain::ValidationError;

use crate::ports::outbound::api_port::UNEXPECTED_ERROR_MESSAGE;
use crate::ports::outbound::{ApiError, BrowserError, RenderError};

/// Session storage failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("No story data found")]
    Missing,

    #[error("Stored story data is unreadable: {0}")]
    Corrupt(String),

    #[error("Could not serialize story: {0}")]
    Serialize(String),

    #[error("Storage rejected the write: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("A myth is already being generated")]
    InFlight,
}

impl AppError {
    /// Toast text for this failure
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Api(e) => e.user_message(),
            AppError::Store(StoreError::Missing) => "No story data found".to_string(),
            AppError::Store(StoreError::Corrupt(_)) => "Failed to load story data".to_string(),
            AppError::Store(StoreError::Write(_)) => {
                "Failed to save your myth. Please try again.".to_string()
            }
            AppError::Store(StoreError::Serialize(_)) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            AppError::Render(_) => "Failed to create share card".to_string(),
            AppError::Browser(BrowserError::Clipboard(_)) => "Failed to copy link".to_string(),
            AppError::Browser(BrowserError::OpenUrl(_)) => "Failed to open share link".to_string(),
            AppError::Browser(BrowserError::Download(_)) => "Failed to download myth".to_string(),
            AppError::InFlight => self.to_string(),
        }
    }
}
