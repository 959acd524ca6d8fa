//! Routed pages

mod input_page;
mod legal;
mod story_page;

pub use input_page::{InputPage, SAMPLE_SCENARIOS};
pub use legal::{PrivacyPage, TermsPage};
pub use story_page::{mythology_books_url, StoryPage};
