//! Application services
//!
//! - `MythService`: typed calls to the generation service
//! - `SessionStore`: the two tab-scoped keys shared by the input and story pages
//! - `InputController` / `StoryController`: page flows, UI-framework agnostic
//! - `render_share_image`: drives a render target through its lifecycle

mod input_controller;
mod myth_service;
mod session_store;
mod share_image;
mod story_controller;

pub use input_controller::InputController;
pub use myth_service::MythService;
pub use session_store::SessionStore;
pub use share_image::render_share_image;
pub use story_controller::{LoadedStory, ShareOutcome, StoryController};

#[cfg(test)]
pub(crate) mod fixtures {
    use mythweaver_domain::{Choice, StoryMeta, StoryResult};
    use serde_json::{json, Value};

    pub const BAKERY_SCENARIO: &str = "I run a small bakery that is about to close";

    pub fn bakery_json() -> Value {
        json!({
            "title": "The Baker's Last Loaf",
            "adapted_story": "In the city of Corinth there lived a baker.\nHer oven was the last warm hearth on the street.",
            "choices": [
                {"id": "c1", "label": "Feed the city", "outcome": "The loaf multiplies until every mouth is full."},
                {"id": "c2", "label": "Close the doors", "outcome": "The bread turns to stone and the street forgets her."},
                {"id": "c3", "label": "Teach an apprentice", "outcome": "The recipe outlives the bakery."}
            ],
            "meta": {"culture": "greek", "source_motif": "Demeter's gift", "generation_time": 3.217}
        })
    }

    pub fn bakery_story() -> StoryResult {
        StoryResult {
            title: "The Baker's Last Loaf".into(),
            adapted_story: "In the city of Corinth there lived a baker.\nHer oven was the last warm hearth on the street.".into(),
            choices: vec![
                Choice {
                    id: "c1".into(),
                    label: "Feed the city".into(),
                    outcome: "The loaf multiplies until every mouth is full.".into(),
                },
                Choice {
                    id: "c2".into(),
                    label: "Close the doors".into(),
                    outcome: "The bread turns to stone and the street forgets her.".into(),
                },
                Choice {
                    id: "c3".into(),
                    label: "Teach an apprentice".into(),
                    outcome: "The recipe outlives the bakery.".into(),
                },
            ],
            meta: StoryMeta {
                culture: "greek".into(),
                source_motif: "Demeter's gift".into(),
                generation_time: Some(3.217),
                ai_model: None,
            },
        }
    }
}
