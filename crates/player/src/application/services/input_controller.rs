//! Input page flow: validate, generate, persist, hand back a story id
//!
//! Only one submission may be in flight. The gate is released on every exit
//! path, including when the awaiting task is dropped mid-request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mythweaver_domain::{Culture, GenerationRequest, StoryId, Tone};

use crate::application::services::{MythService, SessionStore};
use crate::application::AppError;
use crate::ports::outbound::ApiPort;

pub struct InputController<A: ApiPort> {
    myth: MythService<A>,
    session: SessionStore,
    in_flight: Arc<AtomicBool>,
}

struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: ApiPort> InputController<A> {
    pub fn new(myth: MythService<A>, session: SessionStore) -> Self {
        Self {
            myth,
            session,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one submission. Validation failures never reach the network.
    pub async fn submit(
        &self,
        raw_scenario: &str,
        culture: Culture,
        tone: Tone,
    ) -> Result<StoryId, AppError> {
        let request = GenerationRequest::from_form(raw_scenario, culture, tone)?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(AppError::InFlight)?;

        let story = self.myth.generate(&request).await?;

        self.session.save_story(&story)?;
        self.session.save_scenario(request.scenario.as_str())?;

        let id = StoryId::new();
        tracing::info!(story_id = %id, title = %story.title, "Story stored");
        Ok(id)
    }
}
