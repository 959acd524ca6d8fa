use serde::{Deserialize, Serialize};

use crate::value_objects::{Culture, Scenario, Tone, ValidationError};

/// Input for one generation call. Built fresh per submission, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub scenario: Scenario,
    pub culture: Culture,
    pub tone: Tone,
}

impl GenerationRequest {
    /// Validate the form fields into a request
    pub fn from_form(
        raw_scenario: &str,
        culture: Culture,
        tone: Tone,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            scenario: Scenario::parse(raw_scenario)?,
            culture,
            tone,
        })
    }
}
