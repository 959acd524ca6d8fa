//! Share targets offered by the share dialog
//!
//! The set of platforms is closed; every handler is an exhaustive match so
//! adding a platform is a compile-time change.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER_URL: &str = "https://www.facebook.com/sharer/sharer.php";
const FALLBACK_TITLE: &str = "My Ancient Myth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharePlatform {
    Twitter,
    CopyLink,
    Facebook,
}

/// What the browser layer has to do for a share
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open an external share-intent page in a new tab
    OpenUrl(String),
    /// Write text to the clipboard
    CopyToClipboard(String),
}

impl SharePlatform {
    /// Dialog order
    pub fn all() -> &'static [SharePlatform] {
        &[
            SharePlatform::Twitter,
            SharePlatform::CopyLink,
            SharePlatform::Facebook,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::CopyLink => "Copy Link",
            SharePlatform::Facebook => "Facebook",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Tweet your myth",
            SharePlatform::CopyLink => "Copy to clipboard",
            SharePlatform::Facebook => "Share on Facebook",
        }
    }

    /// Icon glyph shown in the dialog
    pub fn icon(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "𝕏",
            SharePlatform::CopyLink => "⧉",
            SharePlatform::Facebook => "f",
        }
    }

    /// Stylesheet class for the icon badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "share-badge-twitter",
            SharePlatform::CopyLink => "share-badge-copy",
            SharePlatform::Facebook => "share-badge-facebook",
        }
    }

    /// Resolve the share for a story title and the current page URL
    pub fn action(&self, title: &str, page_url: &str) -> ShareAction {
        let message = share_message(title);
        match self {
            SharePlatform::Twitter => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("text", &message)
                    .append_pair("url", page_url)
                    .finish();
                ShareAction::OpenUrl(format!("{}?{}", TWITTER_INTENT_URL, query))
            }
            SharePlatform::CopyLink => {
                ShareAction::CopyToClipboard(format!("{} {}", message, page_url))
            }
            SharePlatform::Facebook => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("u", page_url)
                    .finish();
                ShareAction::OpenUrl(format!("{}?{}", FACEBOOK_SHARER_URL, query))
            }
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pre-filled share text for a story title
pub fn share_message(title: &str) -> String {
    let title = if title.trim().is_empty() {
        FALLBACK_TITLE
    } else {
        title
    };
    format!(
        "Check out my personalized myth: \"{}\" created with MythWeaver!",
        title
    )
}
