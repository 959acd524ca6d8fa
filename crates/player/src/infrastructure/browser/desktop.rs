//! Desktop browser adapter
//!
//! The clipboard goes through the webview with `document::eval`. External
//! links open in the system browser and downloads are written to the
//! user's Downloads folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use dioxus::document;

use crate::infrastructure::render::SvgTarget;
use crate::ports::outbound::{
    BrowserError, BrowserPort, DownloadFile, DownloadPayload, RenderTarget,
};

/// Hands a URL to the operating system
type UrlOpener = fn(&str) -> io::Result<()>;

#[derive(Debug, Clone)]
pub struct DesktopBrowser {
    share_base_url: String,
    download_dir: PathBuf,
    opener: UrlOpener,
}

impl DesktopBrowser {
    pub fn new(share_base_url: impl Into<String>, download_dir: PathBuf) -> Self {
        Self {
            share_base_url: share_base_url.into().trim_end_matches('/').to_string(),
            download_dir,
            opener: webbrowser::open,
        }
    }

    #[cfg(test)]
    fn with_opener(mut self, opener: UrlOpener) -> Self {
        self.opener = opener;
        self
    }

    /// `~/Downloads` when known, otherwise the working directory
    pub fn default_download_dir() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// First free path for `filename`, appending ` (n)` before the extension
    fn free_path(&self, filename: &str) -> PathBuf {
        let candidate = self.download_dir.join(filename);
        if !candidate.exists() {
            return candidate;
        }
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, format!(".{}", ext)),
            None => (filename, String::new()),
        };
        (1..)
            .map(|n| self.download_dir.join(format!("{} ({}){}", stem, n, ext)))
            .find(|path| !path.exists())
            .unwrap_or(candidate)
    }

    /// Write the file and return where it landed
    pub fn save(&self, file: &DownloadFile) -> Result<PathBuf, BrowserError> {
        let bytes = match &file.payload {
            DownloadPayload::Bytes(bytes) => bytes,
            DownloadPayload::DataUrl(_) => {
                return Err(BrowserError::Download(
                    "inline data URLs are not supported on desktop".into(),
                ))
            }
        };
        fs::create_dir_all(&self.download_dir)
            .map_err(|e| BrowserError::Download(e.to_string()))?;
        let path = self.free_path(&file.filename);
        fs::write(&path, bytes).map_err(|e| BrowserError::Download(e.to_string()))?;
        Ok(path)
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[async_trait::async_trait(?Send)]
impl BrowserPort for DesktopBrowser {
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BrowserError> {
        let script = format!(
            "await navigator.clipboard.writeText({}); return true;",
            js_string(text)
        );
        document::eval(&script)
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::Clipboard(e.to_string()))
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), BrowserError> {
        tracing::debug!(url, "Opening external link");
        (self.opener)(url).map_err(|e| BrowserError::OpenUrl(e.to_string()))
    }

    fn download(&self, file: DownloadFile) -> Result<(), BrowserError> {
        let path = self.save(&file)?;
        tracing::info!(path = %path.display(), mime = %file.mime_type, "Saved download");
        Ok(())
    }

    fn page_url(&self, route_path: &str) -> String {
        format!("{}{}", self.share_base_url, route_path)
    }

    fn share_card_target(&self) -> Box<dyn RenderTarget> {
        Box::new(SvgTarget::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_uses_share_origin() {
        let browser = DesktopBrowser::new("https://mythweaver.fun/", PathBuf::from("."));
        assert_eq!(
            browser.page_url("/story/abc"),
            "https://mythweaver.fun/story/abc"
        );
    }

    #[test]
    fn open_failure_is_reported() {
        fn no_browser(_: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser found"))
        }
        let browser =
            DesktopBrowser::new("https://mythweaver.fun", PathBuf::from(".")).with_opener(no_browser);

        assert_eq!(
            browser.open_in_new_tab("https://twitter.com/intent/tweet"),
            Err(BrowserError::OpenUrl("no browser found".into()))
        );
    }

    #[test]
    fn open_hands_url_to_the_system() {
        fn accept(url: &str) -> io::Result<()> {
            assert!(url.starts_with("https://www.facebook.com/"));
            Ok(())
        }
        let browser =
            DesktopBrowser::new("https://mythweaver.fun", PathBuf::from(".")).with_opener(accept);

        assert!(browser
            .open_in_new_tab("https://www.facebook.com/sharer/sharer.php?u=x")
            .is_ok());
    }

    #[test]
    fn downloads_do_not_overwrite_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let browser = DesktopBrowser::new("https://mythweaver.fun", dir.path().to_path_buf());

        let first = browser
            .save(&DownloadFile::text("Loaf_myth.txt", "one".into()))
            .unwrap();
        let second = browser
            .save(&DownloadFile::text("Loaf_myth.txt", "two".into()))
            .unwrap();

        assert_eq!(first, dir.path().join("Loaf_myth.txt"));
        assert_eq!(second, dir.path().join("Loaf_myth (1).txt"));
        assert_eq!(fs::read_to_string(first).unwrap(), "one");
        assert_eq!(fs::read_to_string(second).unwrap(), "two");
    }

    #[test]
    fn data_urls_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let browser = DesktopBrowser::new("https://mythweaver.fun", dir.path().to_path_buf());
        let file = DownloadFile {
            filename: "card.png".into(),
            mime_type: "image/png".into(),
            payload: DownloadPayload::DataUrl("data:image/png;base64,AAAA".into()),
        };
        assert!(matches!(browser.save(&file), Err(BrowserError::Download(_))));
    }
}
