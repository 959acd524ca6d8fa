//! Session Store - the tab-scoped hand-off between the input and story pages
//!
//! Exactly two keys, overwritten on every successful generation. The story
//! is stored verbatim as the service returned it.

use std::sync::Arc;

use mythweaver_domain::StoryResult;

use crate::application::StoreError;
use crate::ports::outbound::{storage_keys, PlatformPort};

#[derive(Clone)]
pub struct SessionStore {
    platform: Arc<dyn PlatformPort>,
}

impl SessionStore {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }

    pub fn save_story(&self, story: &StoryResult) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(story).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.platform
            .storage_save(storage_keys::MYTH_DATA, &json)
            .map_err(StoreError::Write)
    }

    pub fn load_story(&self) -> Result<StoryResult, StoreError> {
        let json = self
            .platform
            .storage_load(storage_keys::MYTH_DATA)
            .ok_or(StoreError::Missing)?;
        serde_json::from_str(&json).map_err(|e| {
            tracing::warn!(error = %e, "Stored story failed to parse");
            StoreError::Corrupt(e.to_string())
        })
    }

    pub fn save_scenario(&self, scenario: &str) -> Result<(), StoreError> {
        self.platform
            .storage_save(storage_keys::INPUT_SCENARIO, scenario)
            .map_err(StoreError::Write)
    }

    pub fn load_scenario(&self) -> Option<String> {
        self.platform.storage_load(storage_keys::INPUT_SCENARIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixtures::{bakery_json, bakery_story};
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::ports::outbound::StorageProvider;

    #[test]
    fn story_round_trips_verbatim() {
        let mock = create_mock_platform();
        let store = SessionStore::new(Arc::new(mock.platform));

        store.save_story(&bakery_story()).unwrap();

        let raw = mock.storage.load("mythData").unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, bakery_json());
        assert_eq!(store.load_story().unwrap(), bakery_story());
    }

    #[test]
    fn missing_and_corrupt_are_distinct() {
        let mock = create_mock_platform();
        let store = SessionStore::new(Arc::new(mock.platform));

        assert_eq!(store.load_story(), Err(StoreError::Missing));

        mock.storage.save("mythData", "{not json").unwrap();
        assert!(matches!(store.load_story(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn rejected_writes_are_reported() {
        let mock = create_mock_platform();
        mock.storage.reject_writes(true);
        let store = SessionStore::new(Arc::new(mock.platform));

        assert!(matches!(
            store.save_scenario("anything"),
            Err(StoreError::Write(_))
        ));
    }
}
