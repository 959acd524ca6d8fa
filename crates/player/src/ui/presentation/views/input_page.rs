//! Input page: scenario form and generation trigger

use dioxus::prelude::*;
use mythweaver_domain::{character_count_label, is_near_limit, Culture, Tone, SCENARIO_MAX_CHARS};

use crate::presentation::services::use_input_controller;
use crate::presentation::state::use_toast_state;
use crate::routes::Route;
use crate::use_platform;

/// Prompts that fill the text area when clicked
pub const SAMPLE_SCENARIOS: [&str; 6] = [
    "I'm launching a sustainable energy startup that uses drones to install solar panels in remote areas.",
    "My grandmother's secret recipe brings people together, but a corporate chain wants to buy it.",
    "I discovered my neighbor has been secretly feeding stray cats for 20 years despite city regulations.",
    "Our community garden is being torn down for a parking lot, but we've grown more than just vegetables here.",
    "I found an old letter in my attic that reveals my great-grandfather was a master craftsman.",
    "My small bookstore is struggling against online retailers, but it's become a sanctuary for lonely people.",
];

#[component]
pub fn InputPage() -> Element {
    let input = use_input_controller();
    let toast_state = use_toast_state();
    let navigator = use_navigator();
    let platform = use_platform();

    let mut scenario = use_signal(String::new);
    let mut culture = use_signal(Culture::default);
    let mut tone = use_signal(Tone::default);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        platform.set_page_title("MythWeaver - Transform Your Story");
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }

        let raw = scenario.peek().clone();
        let culture = *culture.peek();
        let tone = *tone.peek();
        let input = input.clone();
        let mut toast_state = toast_state.clone();

        submitting.set(true);
        spawn(async move {
            match input.submit(&raw, culture, tone).await {
                Ok(id) => {
                    submitting.set(false);
                    navigator.push(Route::StoryRoute { id: id.to_string() });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Myth generation did not complete");
                    submitting.set(false);
                    toast_state.error(e.user_message());
                }
            }
        });
    };

    let is_submitting = *submitting.read();
    let text = scenario.read().clone();
    let counter = character_count_label(&text);
    let near_limit = is_near_limit(&text);
    let can_submit = !is_submitting && !text.trim().is_empty();
    let max_chars = SCENARIO_MAX_CHARS.to_string();

    rsx! {
        div {
            class: "container page-narrow",

            div {
                class: "hero",
                div { class: "hero-icon animate-spin-slow", "✦" }
                h1 { class: "hero-title", "Transform Your Story" }
                p { class: "hero-subtitle", "Into an Ancient Myth" }
                p {
                    class: "hero-text",
                    "Share your modern scenario and watch as AI transforms it into a timeless myth, complete with interactive endings and cultural wisdom from ancient traditions."
                }
            }

            div {
                class: "card",
                form {
                    class: "myth-form",
                    onsubmit: on_submit,

                    div {
                        label { class: "form-label", r#for: "scenario", "Describe Your Scenario" }
                        textarea {
                            id: "scenario",
                            class: "form-textarea",
                            rows: "5",
                            maxlength: "{max_chars}",
                            placeholder: "Describe your modern situation, challenge, or story. Be as detailed as you like - the more context you provide, the richer your myth will be...",
                            value: "{text}",
                            disabled: is_submitting,
                            oninput: move |e| scenario.set(e.value()),
                        }
                        div {
                            class: "form-counter",
                            span { "{counter}" }
                            if near_limit {
                                span { class: "form-counter-warning", "Approaching limit" }
                            }
                        }
                    }

                    div {
                        label { class: "form-label", "Need inspiration? Try these scenarios:" }
                        div {
                            class: "sample-grid",
                            for (index, sample) in SAMPLE_SCENARIOS.iter().copied().enumerate() {
                                button {
                                    key: "{index}",
                                    r#type: "button",
                                    class: "sample-button",
                                    disabled: is_submitting,
                                    onclick: move |_| scenario.set(sample.to_string()),
                                    "{sample}"
                                }
                            }
                        }
                    }

                    div {
                        class: "form-controls",
                        div {
                            label { class: "form-label", r#for: "culture", "Cultural Tradition" }
                            select {
                                id: "culture",
                                class: "form-select",
                                disabled: is_submitting,
                                onchange: move |e| {
                                    match e.value().parse::<Culture>() {
                                        Ok(parsed) => culture.set(parsed),
                                        Err(err) => tracing::warn!(error = %err, "Ignoring culture selection"),
                                    }
                                },
                                for option in Culture::all().iter().copied() {
                                    option {
                                        key: "{option.as_str()}",
                                        value: option.as_str(),
                                        selected: option == *culture.read(),
                                        "{option.display_name()}"
                                    }
                                }
                            }
                        }

                        div {
                            label { class: "form-label", r#for: "tone", "Story Tone" }
                            select {
                                id: "tone",
                                class: "form-select",
                                disabled: is_submitting,
                                onchange: move |e| {
                                    match e.value().parse::<Tone>() {
                                        Ok(parsed) => tone.set(parsed),
                                        Err(err) => tracing::warn!(error = %err, "Ignoring tone selection"),
                                    }
                                },
                                for option in Tone::all().iter().copied() {
                                    option {
                                        key: "{option.as_str()}",
                                        value: option.as_str(),
                                        selected: option == *tone.read(),
                                        "{option.display_name()}"
                                    }
                                }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary btn-block",
                        disabled: !can_submit,
                        if is_submitting {
                            span { class: "spinner" }
                            "Weaving Your Myth..."
                        } else {
                            span { class: "btn-icon", "✨" }
                            "Retell My Myth"
                        }
                    }
                }
            }

            if is_submitting {
                div {
                    class: "card generation-progress animate-fade-in",
                    div {
                        class: "progress-track",
                        div { class: "progress-bar animate-progress" }
                    }
                    p {
                        class: "progress-text",
                        "Consulting ancient wisdom... This may take a moment to craft your perfect myth."
                    }
                }
            }
        }
    }
}
