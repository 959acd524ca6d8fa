//! Browser action adapters: clipboard, external links, downloads

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::ports::outbound::BrowserPort;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopBrowser;
#[cfg(target_arch = "wasm32")]
pub use wasm::WebBrowser;

#[cfg(not(target_arch = "wasm32"))]
pub fn create_browser(config: &ClientConfig) -> Arc<dyn BrowserPort> {
    Arc::new(DesktopBrowser::new(
        config.share_base_url.clone(),
        DesktopBrowser::default_download_dir(),
    ))
}

#[cfg(target_arch = "wasm32")]
pub fn create_browser(_config: &ClientConfig) -> Arc<dyn BrowserPort> {
    Arc::new(WebBrowser)
}
