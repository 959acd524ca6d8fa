use dioxus::prelude::*;

use super::header::GITHUB_URL;
use crate::routes::Route;

const RESOURCES: [(&str, &str); 3] = [
    ("Project Gutenberg", "https://www.gutenberg.org/"),
    ("Sacred Texts", "https://sacred-texts.com/"),
    ("Open Source", GITHUB_URL),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer animate-fade-in",
            div {
                class: "container",
                div {
                    class: "footer-grid",
                    div {
                        class: "footer-brand",
                        Link {
                            to: Route::InputRoute {},
                            class: "brand",
                            div { class: "brand-mark brand-mark-small", "📜" }
                            h3 { class: "brand-name", "MythWeaver" }
                        }
                        p {
                            class: "footer-blurb",
                            "Transform your modern scenarios into timeless ancient myths. Experience the wisdom of ages through AI-powered storytelling that honors cultural traditions and public domain folklore."
                        }
                        div {
                            class: "footer-love",
                            span { "Made with" }
                            span { class: "footer-heart", "♥" }
                            span { "for storytellers worldwide" }
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Legal" }
                        ul {
                            class: "footer-links",
                            li { Link { to: Route::PrivacyRoute {}, "Privacy Policy" } }
                            li { Link { to: Route::TermsRoute {}, "Terms of Service" } }
                            li { a { href: "mailto:contact@mythweaver.fun", "Contact" } }
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Resources" }
                        ul {
                            class: "footer-links",
                            for (label, href) in RESOURCES {
                                li {
                                    key: "{label}",
                                    a {
                                        href,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "footer-bottom",
                    p { "© 2025 MythWeaver. All rights reserved. Built with respect for cultural heritage." }
                    p { "This site may contain affiliate links to books and cultural resources." }
                }
            }
        }
    }
}
