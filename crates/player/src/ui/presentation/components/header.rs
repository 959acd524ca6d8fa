use dioxus::prelude::*;

use crate::routes::Route;

pub const GITHUB_URL: &str = "https://github.com/mythweaver/mythweaver";

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "site-header",
            div {
                class: "container site-header-inner",
                Link {
                    to: Route::InputRoute {},
                    class: "brand",
                    div { class: "brand-mark", "📜" }
                    div {
                        h1 { class: "brand-name", "MythWeaver" }
                        p { class: "brand-tagline", "Weaving ancient myths into modern stories" }
                    }
                }
                nav {
                    class: "site-nav",
                    Link { to: Route::InputRoute {}, class: "nav-link", "Create" }
                    a {
                        href: GITHUB_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "nav-link",
                        "GitHub"
                    }
                }
            }
        }
    }
}
