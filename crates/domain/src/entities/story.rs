//! Generated myth returned by the generation service
//!
//! A `StoryResult` is immutable once received. The player keeps it in
//! tab-scoped storage and in the story page's memory only.

use serde::{Deserialize, Serialize};

use crate::common::truncate_with_ellipsis;
use crate::value_objects::tradition_name;

/// Characters of outcome text shown on an unselected choice card
pub const CHOICE_PREVIEW_CHARS: usize = 100;

/// One branching ending of the myth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Unique within its story
    pub id: String,
    pub label: String,
    pub outcome: String,
}

impl Choice {
    /// Outcome preview for the choice card
    pub fn preview(&self) -> String {
        truncate_with_ellipsis(&self.outcome, CHOICE_PREVIEW_CHARS)
    }
}

/// Generation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMeta {
    /// Tradition the service actually used (free text)
    pub culture: String,
    pub source_motif: String,
    /// Seconds spent generating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
}

impl StoryMeta {
    /// `Greek Tradition`, `Native American Tradition`, ...
    pub fn tradition_label(&self) -> String {
        format!("{} Tradition", tradition_name(&self.culture))
    }

    /// Generation time formatted to two decimals, e.g. `3.21s`
    pub fn generation_time_label(&self) -> Option<String> {
        self.generation_time.map(|secs| format!("{:.2}s", secs))
    }
}

/// The generated narrative artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResult {
    pub title: String,
    /// Paragraphs separated by newlines
    pub adapted_story: String,
    pub choices: Vec<Choice>,
    pub meta: StoryMeta,
}

impl StoryResult {
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bakery_json() -> serde_json::Value {
        json!({
            "title": "The Baker's Last Loaf",
            "adapted_story": "In the city of Corinth...\n\nThe oven grew cold.",
            "choices": [
                {"id": "c1", "label": "Feed the city", "outcome": "The loaf multiplies."},
                {"id": "c2", "label": "Close the doors", "outcome": "The bread turns to stone."},
                {"id": "c3", "label": "Teach an apprentice", "outcome": "The recipe lives on."}
            ],
            "meta": {"culture": "greek", "source_motif": "sacrifice"}
        })
    }

    #[test]
    fn test_deserializes_without_optional_meta() {
        let story: StoryResult = serde_json::from_value(bakery_json()).unwrap();
        assert_eq!(story.choices.len(), 3);
        assert_eq!(story.meta.generation_time, None);
        assert_eq!(story.meta.ai_model, None);
    }

    #[test]
    fn test_serialization_round_trip_is_verbatim() {
        let original = bakery_json();
        let story: StoryResult = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&story).unwrap(), original);
    }

    #[test]
    fn test_choice_lookup() {
        let story: StoryResult = serde_json::from_value(bakery_json()).unwrap();
        assert_eq!(story.choice("c2").map(|c| c.label.as_str()), Some("Close the doors"));
        assert!(story.choice("c9").is_none());
    }

    #[test]
    fn test_tradition_and_time_labels() {
        let meta = StoryMeta {
            culture: "norse".into(),
            source_motif: "ragnarok".into(),
            generation_time: Some(3.14159),
            ai_model: None,
        };
        assert_eq!(meta.tradition_label(), "Norse Tradition");
        assert_eq!(meta.generation_time_label().as_deref(), Some("3.14s"));
    }

    #[test]
    fn test_choice_preview_truncates_at_100_chars() {
        let choice = Choice {
            id: "c1".into(),
            label: "Long".into(),
            outcome: "z".repeat(150),
        };
        let preview = choice.preview();
        assert!(preview.starts_with(&"z".repeat(100)));
        assert!(preview.ends_with("..."));
    }
}
