//! Service providers for the presentation layer
//!
//! The composition root builds one [`Services`] bundle and hands it to the
//! launcher as context. Components reach the controllers through the
//! `use_*` hooks below and never touch infrastructure adapters directly.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{InputController, MythService, SessionStore, StoryController};
use crate::application::Api;
use crate::ports::outbound::{ApiPort, BrowserPort, PlatformPort};

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub myth: Arc<MythService<A>>,
    pub input: Arc<InputController<A>>,
    pub story: Arc<StoryController>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Wire the controllers over one shared session store
    pub fn new(api: A, platform: Arc<dyn PlatformPort>, browser: Arc<dyn BrowserPort>) -> Self {
        let session = SessionStore::new(platform);
        let myth = MythService::new(api);

        Self {
            input: Arc::new(InputController::new(myth.clone(), session.clone())),
            story: Arc::new(StoryController::new(session, browser)),
            myth: Arc::new(myth),
        }
    }
}

/// Hook to access the MythService from context
pub fn use_myth_service() -> Arc<MythService<Api>> {
    let services = use_context::<UiServices>();
    services.myth.clone()
}

/// Hook to access the InputController from context
pub fn use_input_controller() -> Arc<InputController<Api>> {
    let services = use_context::<UiServices>();
    services.input.clone()
}

/// Hook to access the StoryController from context
pub fn use_story_controller() -> Arc<StoryController> {
    let services = use_context::<UiServices>();
    services.story.clone()
}
