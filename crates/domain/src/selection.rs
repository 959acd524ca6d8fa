//! Exclusive choice selection on the story page

use crate::entities::{Choice, StoryResult};

/// Zero or one selected choice, by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSelection {
    selected: Option<String>,
}

impl ChoiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, replacing any previous selection
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Resolve the selection against a story
    pub fn selected_choice<'a>(&self, story: &'a StoryResult) -> Option<&'a Choice> {
        self.selected.as_deref().and_then(|id| story.choice(id))
    }
}
