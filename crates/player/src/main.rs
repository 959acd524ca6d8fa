//! MythWeaver Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mythweaver_player::application::Api;
use mythweaver_player::config::ClientConfig;
use mythweaver_player::infrastructure::{create_browser, create_platform, ApiAdapter};
use mythweaver_player::ports::outbound::{PlatformPort, RawApiPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mythweaver_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = ClientConfig::from_env();
    tracing::info!(
        api = %config.api_base_url,
        timeout_ms = config.request_timeout_ms,
        "Starting MythWeaver Player"
    );

    // Platform
    let platform: Arc<dyn PlatformPort> = Arc::new(create_platform());

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config));
    let api = Api::new(raw_api);

    // Clipboard, new tabs, downloads
    let browser = create_browser(&config);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("MythWeaver"));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform.clone())
        .with_context(mythweaver_player::presentation::Services::new(
            api, platform, browser,
        ))
        .launch(mythweaver_player::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    read_player_css().unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{:#}", e), "Running without stylesheet");
        FALLBACK_CSS.to_string()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_player_css() -> anyhow::Result<String> {
    use anyhow::Context;

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(&css_path)
        .with_context(|| format!("reading {}", css_path.display()))
}
