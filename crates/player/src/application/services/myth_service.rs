//! Myth Service - calls to the generation service

use mythweaver_domain::{GenerationRequest, StoryResult};
use mythweaver_shared::{
    GenerateMythRequest, GenerateMythResponse, HealthResponse, GENERATE_MYTH_PATH, HEALTH_PATH,
};

use crate::ports::outbound::{ApiError, ApiPort};

/// One attempt per call; retries are left to the user
#[derive(Clone)]
pub struct MythService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> MythService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Generate a myth for a validated request
    pub async fn generate(&self, request: &GenerationRequest) -> Result<StoryResult, ApiError> {
        let body = GenerateMythRequest::from(request);
        tracing::info!(
            culture = %request.culture,
            tone = %request.tone,
            scenario_chars = request.scenario.as_str().chars().count(),
            "Requesting myth"
        );

        let story: GenerateMythResponse = self
            .api
            .post(GENERATE_MYTH_PATH, &body)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Myth generation failed"))?;

        tracing::info!(
            title = %story.title,
            choices = story.choices.len(),
            "Myth received"
        );
        Ok(story)
    }

    /// Liveness check; the payload is informational only
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let health: HealthResponse = self.api.get(HEALTH_PATH).await?;
        tracing::debug!(status = %health.status, "Health check");
        Ok(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use mythweaver_domain::{Culture, Tone};
    use serde_json::json;

    use crate::application::services::fixtures::{bakery_json, bakery_story, BAKERY_SCENARIO};
    use crate::application::Api;
    use crate::ports::outbound::MockRawApiPort;

    fn service(raw: MockRawApiPort) -> MythService<Api> {
        MythService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn generate_posts_trimmed_request_and_returns_story() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == "/generate-myth"
                    && *body
                        == json!({
                            "scenario": BAKERY_SCENARIO,
                            "culture": "auto",
                            "tone": "balanced"
                        })
            })
            .times(1)
            .returning(|_, _| Ok(bakery_json()));

        let request = GenerationRequest::from_form(
            &format!("  {}  ", BAKERY_SCENARIO),
            Culture::Auto,
            Tone::Balanced,
        )
        .unwrap();
        let story = service(raw).generate(&request).await.unwrap();

        assert_eq!(story, bakery_story());
        assert_eq!(story.choices.len(), 3);
    }

    #[tokio::test]
    async fn generate_surfaces_server_errors() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::from_response(500, "{}")));

        let request =
            GenerationRequest::from_form(BAKERY_SCENARIO, Culture::Greek, Tone::Serious).unwrap();
        let err = service(raw).generate(&request).await.unwrap_err();

        assert_eq!(err.user_message(), "Server error. Please try again in a moment.");
    }

    #[tokio::test]
    async fn health_check_tolerates_partial_payload() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/health")
            .returning(|_| Ok(json!({ "status": "healthy", "extra": 1 })));

        let health = service(raw).health_check().await.unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.version, None);
    }
}
