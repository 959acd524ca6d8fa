//! Browser Port - clipboard, external links and file downloads

use super::RenderTarget;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Could not open link: {0}")]
    OpenUrl(String),

    #[error("Download failed: {0}")]
    Download(String),
}

/// File contents handed to the browser for saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadPayload {
    Bytes(Vec<u8>),
    /// A `data:` URL (canvas exports)
    DataUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub mime_type: String,
    pub payload: DownloadPayload,
}

impl DownloadFile {
    pub fn text(filename: impl Into<String>, contents: String) -> Self {
        Self {
            filename: filename.into(),
            mime_type: "text/plain;charset=utf-8".to_string(),
            payload: DownloadPayload::Bytes(contents.into_bytes()),
        }
    }
}

/// UI-side browser capabilities
///
/// Futures are `!Send` on every target: both adapters drive JavaScript in
/// the page or webview and are only awaited from the UI runtime.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait(?Send)]
pub trait BrowserPort: Send + Sync {
    /// Write text to the system clipboard
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BrowserError>;

    /// Open `url` outside the app (new tab / system browser)
    fn open_in_new_tab(&self, url: &str) -> Result<(), BrowserError>;

    /// Save a file to the user's machine
    fn download(&self, file: DownloadFile) -> Result<(), BrowserError>;

    /// Absolute, shareable URL for an in-app route path
    fn page_url(&self, route_path: &str) -> String;

    /// Fresh off-screen target for share images
    fn share_card_target(&self) -> Box<dyn RenderTarget>;
}
