//! Route definitions and the persistent app shell
//!
//! Every page is wrapped in an entrance transition. The header, footer and
//! toast host live in [`AppShell`] so they survive navigation.

use dioxus::prelude::*;

use crate::presentation::components::{Footer, Header, PageTransition, ToastHost, Transition};
use crate::presentation::views::{InputPage, PrivacyPage, StoryPage, TermsPage};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        InputRoute {},
        #[route("/story/:id")]
        StoryRoute { id: String },
        #[route("/privacy")]
        PrivacyRoute {},
        #[route("/terms")]
        TermsRoute {},
    #[end_layout]
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

#[component]
fn AppShell() -> Element {
    rsx! {
        div {
            class: "app-shell",
            Header {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
            ToastHost {}
        }
    }
}

#[component]
fn InputRoute() -> Element {
    rsx! {
        PageTransition { kind: Transition::Fade, InputPage {} }
    }
}

#[component]
fn StoryRoute(id: String) -> Element {
    rsx! {
        PageTransition { kind: Transition::FadeSlide, StoryPage { id } }
    }
}

#[component]
fn PrivacyRoute() -> Element {
    rsx! {
        PageTransition { kind: Transition::Fade, PrivacyPage {} }
    }
}

#[component]
fn TermsRoute() -> Element {
    rsx! {
        PageTransition { kind: Transition::Fade, TermsPage {} }
    }
}

/// Unknown paths go back to the input page
#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = segments.join("/");

    use_effect(move || {
        tracing::debug!(%path, "Unknown route, redirecting home");
        navigator.replace(Route::InputRoute {});
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_route_uses_path_parameter() {
        let route = Route::StoryRoute {
            id: "abc-123".to_string(),
        };
        assert_eq!(route.to_string(), "/story/abc-123");
    }

    #[test]
    fn known_paths_parse() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::InputRoute {}));
        assert_eq!("/privacy".parse::<Route>().ok(), Some(Route::PrivacyRoute {}));
        assert_eq!("/terms".parse::<Route>().ok(), Some(Route::TermsRoute {}));
        assert_eq!(
            "/story/xyz".parse::<Route>().ok(),
            Some(Route::StoryRoute {
                id: "xyz".to_string()
            })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_redirect() {
        let route = "/no/such/page".parse::<Route>().ok();
        assert!(matches!(route, Some(Route::NotFoundRoute { .. })));
    }
}
