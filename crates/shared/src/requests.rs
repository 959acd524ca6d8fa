//! Request bodies

use mythweaver_domain::{Culture, GenerationRequest, Tone};
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-myth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMythRequest {
    pub scenario: String,
    #[serde(default)]
    pub culture: Culture,
    #[serde(default)]
    pub tone: Tone,
}

impl From<&GenerationRequest> for GenerateMythRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            scenario: request.scenario.as_str().to_string(),
            culture: request.culture,
            tone: request.tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let request = GenerationRequest::from_form(
            "  My bakery is closing after 30 years.  ",
            Culture::Greek,
            Tone::Serious,
        )
        .unwrap();

        let body = serde_json::to_value(GenerateMythRequest::from(&request)).unwrap();

        assert_eq!(
            body,
            json!({
                "scenario": "My bakery is closing after 30 years.",
                "culture": "greek",
                "tone": "serious"
            })
        );
    }

    #[test]
    fn test_defaults_when_missing() {
        let request: GenerateMythRequest =
            serde_json::from_value(json!({ "scenario": "a long enough scenario" })).unwrap();
        assert_eq!(request.culture, Culture::Auto);
        assert_eq!(request.tone, Tone::Balanced);
    }
}
