//! Story page flow: load from the session, share, export

use std::sync::Arc;

use chrono::NaiveDate;

use mythweaver_domain::common::filename_stem;
use mythweaver_domain::{build_document, build_share_card, ShareAction, SharePlatform, StoryResult};

use crate::application::services::{render_share_image, SessionStore};
use crate::application::AppError;
use crate::ports::outbound::{BrowserPort, DownloadFile};

/// Everything the story page renders
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedStory {
    pub story: StoryResult,
    /// Scenario the story was generated from; empty when it was not stored
    pub scenario: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// An external share page was opened
    Opened,
    /// The share message was copied to the clipboard
    Copied,
}

#[derive(Clone)]
pub struct StoryController {
    session: SessionStore,
    browser: Arc<dyn BrowserPort>,
}

impl StoryController {
    pub fn new(session: SessionStore, browser: Arc<dyn BrowserPort>) -> Self {
        Self { session, browser }
    }

    /// Read the last generated story. The page must redirect on error.
    pub fn load(&self) -> Result<LoadedStory, AppError> {
        let story = self.session.load_story()?;
        let scenario = self.session.load_scenario().unwrap_or_default();
        Ok(LoadedStory { story, scenario })
    }

    /// Perform a share action for the page at `route_path`
    pub async fn share(
        &self,
        platform: SharePlatform,
        story: &StoryResult,
        route_path: &str,
    ) -> Result<ShareOutcome, AppError> {
        let page_url = self.browser.page_url(route_path);
        tracing::info!(%platform, url = %page_url, "Sharing story");

        match platform.action(&story.title, &page_url) {
            ShareAction::OpenUrl(url) => {
                self.browser.open_in_new_tab(&url)?;
                Ok(ShareOutcome::Opened)
            }
            ShareAction::CopyToClipboard(text) => {
                self.browser.copy_to_clipboard(&text).await?;
                Ok(ShareOutcome::Copied)
            }
        }
    }

    /// Export the paginated document; returns the filename
    pub fn download(&self, loaded: &LoadedStory, today: NaiveDate) -> Result<String, AppError> {
        let document = build_document(&loaded.story, &loaded.scenario, today);
        let filename = format!("{}_myth.txt", filename_stem(&loaded.story.title));
        tracing::info!(%filename, pages = document.page_count(), "Downloading myth");

        self.browser
            .download(DownloadFile::text(filename.clone(), document.to_plain_text()))?;
        Ok(filename)
    }

    /// Render and download the share card image; returns the filename
    pub fn download_share_card(&self, story: &StoryResult) -> Result<String, AppError> {
        let card = build_share_card(story);
        let mut target = self.browser.share_card_target();
        let image = render_share_image(&card, target.as_mut())?;

        let filename = format!("{}_card.{}", filename_stem(&story.title), image.extension);
        tracing::info!(%filename, "Downloading share card");
        self.browser.download(DownloadFile {
            filename: filename.clone(),
            mime_type: image.mime_type.to_string(),
            payload: image.payload,
        })?;
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixtures::{bakery_story, BAKERY_SCENARIO};
    use crate::application::StoreError;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockPlatform};
    use crate::infrastructure::render::RecordingTarget;
    use crate::ports::outbound::{
        BrowserError, DownloadPayload, MockBrowserPort, RenderTarget, StorageProvider,
    };

    const PAGE: &str = "https://mythweaver.fun/story/abc";

    fn controller(mock: &MockPlatform, browser: MockBrowserPort) -> StoryController {
        StoryController::new(
            SessionStore::new(Arc::new(mock.platform.clone())),
            Arc::new(browser),
        )
    }

    fn seeded() -> MockPlatform {
        let mock = create_mock_platform();
        let session = SessionStore::new(Arc::new(mock.platform.clone()));
        session.save_story(&bakery_story()).unwrap();
        session.save_scenario(BAKERY_SCENARIO).unwrap();
        mock
    }

    fn browser_at_page() -> MockBrowserPort {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_page_url()
            .withf(|path| path == "/story/abc")
            .returning(|_| PAGE.to_string());
        browser
    }

    #[test]
    fn load_returns_story_and_scenario() {
        let mock = seeded();
        let loaded = controller(&mock, MockBrowserPort::new()).load().unwrap();

        assert_eq!(loaded.story, bakery_story());
        assert_eq!(loaded.scenario, BAKERY_SCENARIO);
    }

    #[test]
    fn missing_story_reports_no_story_data() {
        let mock = create_mock_platform();
        let err = controller(&mock, MockBrowserPort::new()).load().unwrap_err();

        assert_eq!(err, AppError::Store(StoreError::Missing));
        assert_eq!(err.user_message(), "No story data found");
    }

    #[test]
    fn corrupt_story_reports_load_failure() {
        let mock = create_mock_platform();
        mock.storage.save("mythData", "[1,2").unwrap();
        let err = controller(&mock, MockBrowserPort::new()).load().unwrap_err();

        assert_eq!(err.user_message(), "Failed to load story data");
    }

    #[tokio::test]
    async fn copy_link_copies_message_and_url() {
        let mut browser = browser_at_page();
        browser
            .expect_copy_to_clipboard()
            .withf(|text| {
                text == "Check out my personalized myth: \"The Baker's Last Loaf\" created with MythWeaver! https://mythweaver.fun/story/abc"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mock = seeded();

        let outcome = controller(&mock, browser)
            .share(SharePlatform::CopyLink, &bakery_story(), "/story/abc")
            .await
            .unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
    }

    #[tokio::test]
    async fn clipboard_failure_surfaces_copy_error() {
        let mut browser = browser_at_page();
        browser
            .expect_copy_to_clipboard()
            .returning(|_| Err(BrowserError::Clipboard("denied".into())));
        let mock = seeded();

        let err = controller(&mock, browser)
            .share(SharePlatform::CopyLink, &bakery_story(), "/story/abc")
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Failed to copy link");
    }

    #[tokio::test]
    async fn twitter_and_facebook_open_share_pages() {
        let mut browser = browser_at_page();
        browser
            .expect_open_in_new_tab()
            .withf(|url| url.starts_with("https://twitter.com/intent/tweet?text="))
            .times(1)
            .returning(|_| Ok(()));
        browser
            .expect_open_in_new_tab()
            .withf(|url| url.starts_with("https://www.facebook.com/sharer/sharer.php?u="))
            .times(1)
            .returning(|_| Ok(()));
        browser.expect_copy_to_clipboard().never();
        let mock = seeded();
        let story_page = controller(&mock, browser);

        for platform in [SharePlatform::Twitter, SharePlatform::Facebook] {
            let outcome = story_page
                .share(platform, &bakery_story(), "/story/abc")
                .await
                .unwrap();
            assert_eq!(outcome, ShareOutcome::Opened);
        }
    }

    #[test]
    fn download_writes_plain_text_document() {
        let mut browser = MockBrowserPort::new();
        browser
            .expect_download()
            .withf(|file| {
                let DownloadPayload::Bytes(bytes) = &file.payload else {
                    return false;
                };
                let text = String::from_utf8_lossy(bytes);
                file.filename == "TheBakersLastLoaf_myth.txt"
                    && file.mime_type.starts_with("text/plain")
                    && text.starts_with("The Baker's Last Loaf")
                    && text.contains("Your Modern Scenario")
                    && text.contains(BAKERY_SCENARIO)
                    && text.contains("Created: 12/1/2024")
            })
            .times(1)
            .returning(|_| Ok(()));
        let mock = seeded();
        let story_page = controller(&mock, browser);
        let loaded = story_page.load().unwrap();

        let filename = story_page
            .download(&loaded, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
            .unwrap();

        assert_eq!(filename, "TheBakersLastLoaf_myth.txt");
    }

    #[test]
    fn share_card_is_rendered_downloaded_and_torn_down() {
        let target = RecordingTarget::new();
        let recorded = target.clone();
        let mut browser = MockBrowserPort::new();
        browser
            .expect_share_card_target()
            .times(1)
            .return_once(move || Box::new(target) as Box<dyn RenderTarget>);
        browser
            .expect_download()
            .withf(|file| file.filename == "TheBakersLastLoaf_card.png" && file.mime_type == "image/png")
            .times(1)
            .returning(|_| Ok(()));
        let mock = seeded();

        let filename = controller(&mock, browser)
            .download_share_card(&bakery_story())
            .unwrap();

        assert_eq!(filename, "TheBakersLastLoaf_card.png");
        assert_eq!(recorded.recording().destroyed, 1);
    }

    #[test]
    fn share_card_render_failure_skips_download() {
        let target = RecordingTarget::failing_rasterize();
        let recorded = target.clone();
        let mut browser = MockBrowserPort::new();
        browser
            .expect_share_card_target()
            .return_once(move || Box::new(target) as Box<dyn RenderTarget>);
        browser.expect_download().never();
        let mock = seeded();

        let err = controller(&mock, browser)
            .download_share_card(&bakery_story())
            .unwrap_err();

        assert_eq!(err.user_message(), "Failed to create share card");
        assert_eq!(recorded.recording().destroyed, 1);
    }
}
