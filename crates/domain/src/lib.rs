//! Core model for MythWeaver: stories, scenario validation, and the pure
//! layout and playback logic the client builds its pages on.

extern crate self as mythweaver_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod export;
pub mod ids;
pub mod reveal;
pub mod selection;
pub mod share;
pub mod value_objects;

pub use entities::{Choice, GenerationRequest, StoryMeta, StoryResult, CHOICE_PREVIEW_CHARS};
pub use error::DomainError;
pub use export::{build_document, build_share_card, Document, ShareCard};
pub use ids::StoryId;
pub use reveal::{next_prefix_len, Reveal, RevealStep, REVEAL_TICK_MS, REVEAL_WINDOW_MS};
pub use selection::ChoiceSelection;
pub use share::{share_message, ShareAction, SharePlatform};
pub use value_objects::{
    character_count_label, is_near_limit, tradition_name, Culture, Scenario, Tone,
    ValidationError, SCENARIO_MAX_CHARS, SCENARIO_MIN_CHARS, SCENARIO_WARN_CHARS,
};
