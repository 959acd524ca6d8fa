//! Story page: the generated myth, its endings and the export actions
//!
//! The page reads the last generated story from session storage on mount.
//! A missing or unreadable story raises a toast and sends the user back to
//! the input page; nothing of the story layout renders in that case.

use dioxus::prelude::*;
use mythweaver_domain::{tradition_name, ChoiceSelection, SharePlatform, REVEAL_WINDOW_MS};

use crate::application::services::ShareOutcome;
use crate::presentation::components::{ChoiceCard, MythCard, ShareModal};
use crate::presentation::services::use_story_controller;
use crate::presentation::state::use_toast_state;
use crate::routes::Route;
use crate::use_platform;

const GUTENBERG_URL: &str = "https://www.gutenberg.org/";
const BOOK_SEARCH_URL: &str = "https://openlibrary.org/search";

/// Reading-list search for a tradition
pub fn mythology_books_url(culture: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &format!("{} mythology", culture))
        .finish();
    format!("{}?{}", BOOK_SEARCH_URL, query)
}

#[component]
pub fn StoryPage(id: String) -> Element {
    let controller = use_story_controller();
    let toast_state = use_toast_state();
    let navigator = use_navigator();
    let platform = use_platform();

    let loaded = use_hook({
        let controller = controller.clone();
        move || controller.load()
    });

    let mut revealing = use_signal(|| true);
    let mut selection = use_signal(ChoiceSelection::new);
    let mut share_open = use_signal(|| false);

    // Redirect on load failure, otherwise title the tab and bound the reveal.
    let load_failure = loaded.as_ref().err().cloned();
    let title_for_tab = loaded.as_ref().ok().map(|l| l.story.title.clone());
    let platform_for_effect = platform.clone();
    let toast_for_effect = toast_state.clone();
    use_effect(move || match &load_failure {
        Some(e) => {
            tracing::warn!(error = %e, "Story page has nothing to show");
            let mut toast_state = toast_for_effect.clone();
            toast_state.error(e.user_message());
            navigator.replace(Route::InputRoute {});
        }
        None => {
            if let Some(title) = &title_for_tab {
                platform_for_effect.set_page_title(&format!("{} - MythWeaver", title));
            }
            let window = platform_for_effect.sleep_ms(REVEAL_WINDOW_MS);
            spawn(async move {
                window.await;
                revealing.set(false);
            });
        }
    });

    let Ok(loaded) = loaded else {
        return rsx! {
            div {
                class: "page-loading",
                div { class: "spinner spinner-large" }
            }
        };
    };

    let story = loaded.story.clone();
    let meta = story.meta.clone();
    let culture_name = tradition_name(&meta.culture);
    let selected = selection.read().selected_choice(&story).cloned();

    let on_share = {
        let controller = controller.clone();
        let toast_state = toast_state.clone();
        let story = story.clone();
        let route_path = Route::StoryRoute { id: id.clone() }.to_string();
        move |target: SharePlatform| {
            let controller = controller.clone();
            let mut toast_state = toast_state.clone();
            let story = story.clone();
            let route_path = route_path.clone();
            spawn(async move {
                match controller.share(target, &story, &route_path).await {
                    Ok(ShareOutcome::Copied) => toast_state.success("Link copied to clipboard!"),
                    Ok(ShareOutcome::Opened) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, %target, "Share failed");
                        toast_state.error(e.user_message());
                    }
                }
                share_open.set(false);
            });
        }
    };

    let on_download = {
        let controller = controller.clone();
        let toast_state = toast_state.clone();
        let loaded = loaded.clone();
        move |_| {
            let mut toast_state = toast_state.clone();
            match controller.download(&loaded, platform.today()) {
                Ok(_) => toast_state.success("Myth downloaded!"),
                Err(e) => {
                    tracing::warn!(error = %e, "Download failed");
                    toast_state.error(e.user_message());
                }
            }
        }
    };

    let on_share_card = {
        let controller = controller.clone();
        let toast_state = toast_state.clone();
        let story = story.clone();
        move |_| {
            let mut toast_state = toast_state.clone();
            match controller.download_share_card(&story) {
                Ok(_) => toast_state.success("Share card downloaded!"),
                Err(e) => {
                    tracing::warn!(error = %e, "Share card failed");
                    toast_state.error(e.user_message());
                }
            }
        }
    };

    rsx! {
        div {
            class: "container page-narrow story-page",

            div {
                class: "story-toolbar",
                Link {
                    to: Route::InputRoute {},
                    class: "back-link",
                    "← Create Another Myth"
                }
                div {
                    class: "story-actions",
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| share_open.set(true),
                        "Share"
                    }
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: on_share_card,
                        "Share Card"
                    }
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: on_download,
                        "Download"
                    }
                }
            }

            div {
                class: "story-heading",
                h1 { class: "story-title", "{story.title}" }
                div { class: "divider" }
                p { class: "story-tradition", "{meta.tradition_label()}" }
            }

            MythCard {
                text: story.adapted_story.clone(),
                revealing: *revealing.read(),
                on_complete: move |_| revealing.set(false),
            }

            section {
                class: "story-choices",
                h2 { class: "section-title", "Choose Your Path" }
                div {
                    class: "choice-grid",
                    for (index, choice) in story.choices.iter().enumerate() {
                        ChoiceCard {
                            key: "{choice.id}",
                            choice: choice.clone(),
                            index,
                            selected: selection.read().is_selected(&choice.id),
                            on_select: move |choice_id: String| {
                                selection.write().select(choice_id);
                            },
                        }
                    }
                }
            }

            if let Some(choice) = selected {
                div {
                    class: "card outcome-panel animate-fade-in",
                    h3 { class: "outcome-title", "Path of {choice.label}" }
                    p { class: "outcome-text", "{choice.outcome}" }
                }
            }

            div {
                class: "card story-meta",
                h3 { class: "section-title", "About This Myth" }
                dl {
                    class: "meta-grid",
                    dt { "Cultural Tradition" }
                    dd { "{meta.tradition_label()}" }
                    dt { "Source Motif" }
                    dd { "{meta.source_motif}" }
                    if let Some(seconds) = meta.generation_time_label() {
                        dt { "Generation Time" }
                        dd { "{seconds}" }
                    }
                }
            }

            div {
                class: "card reading-list",
                h3 { class: "section-title", "Explore {culture_name} Mythology" }
                p {
                    class: "reading-list-intro",
                    "Discover more about this rich cultural tradition with these recommended books:"
                }
                div {
                    class: "reading-links",
                    a {
                        href: mythology_books_url(&meta.culture),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "reading-link",
                        "{culture_name} Mythology Books"
                    }
                    a {
                        href: GUTENBERG_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "reading-link",
                        "Free Public Domain Texts"
                    }
                }
            }

            div {
                class: "story-cta",
                Link {
                    to: Route::InputRoute {},
                    class: "btn-primary",
                    "Create Another Myth"
                }
            }

            ShareModal {
                is_open: *share_open.read(),
                title: story.title.clone(),
                on_close: move |_| share_open.set(false),
                on_share,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_list_search_is_encoded() {
        assert_eq!(
            mythology_books_url("native_american"),
            "https://openlibrary.org/search?q=native_american+mythology"
        );
        assert_eq!(
            mythology_books_url("greek"),
            "https://openlibrary.org/search?q=greek+mythology"
        );
    }
}
