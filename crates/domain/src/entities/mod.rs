//! Domain entities

mod generation_request;
mod story;

pub use generation_request::GenerationRequest;
pub use story::{Choice, StoryMeta, StoryResult, CHOICE_PREVIEW_CHARS};
