use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    let platform = use_platform();
    let myth = presentation::services::use_myth_service();

    // Toasts outlive any single page so a redirect can still show one.
    use_context_provider(move || presentation::state::ToastState::new(platform));

    use_hook(move || {
        spawn(async move {
            match myth.health_check().await {
                Ok(health) if health.is_healthy() => {
                    let version = health.version.as_deref().unwrap_or("unknown");
                    tracing::info!(%version, "Story service is up")
                }
                Ok(health) => tracing::warn!(status = %health.status, "Story service degraded"),
                Err(e) => tracing::warn!(error = %e, "Story service unreachable"),
            }
        });
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/main.css"),
        }

        Router::<routes::Route> {}
    }
}
