//! Privacy and terms pages: fixed text, no state

use dioxus::prelude::*;

use crate::use_platform;

pub const LAST_UPDATED: &str = "December 2024";

/// Titled bullet list rendered as one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalSection {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Bold lead-in followed by a sentence
type Clause = (&'static str, &'static str);

pub const PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        icon: "👁",
        title: "Information We Collect",
        items: &[
            "Scenarios you submit for myth generation",
            "Basic usage analytics (page views, generation counts)",
            "Technical information (IP address, browser type) for security",
            "No personal identifying information is stored",
        ],
    },
    LegalSection {
        icon: "🗄",
        title: "How We Use Your Data",
        items: &[
            "Generate personalized myths using OpenAI's API",
            "Improve our service through anonymized analytics",
            "Ensure platform security and prevent abuse",
            "Your scenarios are not stored permanently",
        ],
    },
    LegalSection {
        icon: "🛡",
        title: "Data Protection",
        items: &[
            "All data transmission is encrypted (HTTPS)",
            "We use industry-standard security practices",
            "Generated myths are temporarily cached for performance",
            "We comply with content moderation policies",
        ],
    },
    LegalSection {
        icon: "🍪",
        title: "Cookies & Tracking",
        items: &[
            "We use essential cookies for site functionality",
            "Optional analytics cookies (with your consent)",
            "No third-party advertising trackers",
            "You can disable cookies in your browser settings",
        ],
    },
];

const PRIVACY_RIGHTS: &[Clause] = &[
    ("Right to Access:", "You can request information about any data we may have about you."),
    ("Right to Deletion:", "You can request deletion of any data associated with your use."),
    ("Right to Portability:", "You can download your generated myths at any time."),
    ("Right to Object:", "You can opt out of analytics and non-essential data collection."),
];

pub const TERMS_SECTIONS: &[LegalSection] = &[
    LegalSection {
        icon: "📄",
        title: "Acceptance of Terms",
        items: &[
            "By using MythWeaver, you agree to these terms of service",
            "These terms may be updated periodically with notice",
            "Continued use constitutes acceptance of updated terms",
            "You must be 13 years or older to use this service",
        ],
    },
    LegalSection {
        icon: "👥",
        title: "User Responsibilities",
        items: &[
            "Provide appropriate, non-offensive content for myth generation",
            "Respect cultural traditions and avoid harmful stereotypes",
            "Do not submit copyrighted material or personal information",
            "Use the service for lawful purposes only",
        ],
    },
    LegalSection {
        icon: "⚠",
        title: "Content Guidelines",
        items: &[
            "No hate speech, harassment, or discriminatory content",
            "No explicit, violent, or inappropriate material",
            "No attempts to generate misleading or harmful information",
            "Content may be moderated using automated systems",
        ],
    },
    LegalSection {
        icon: "⚖",
        title: "Intellectual Property",
        items: &[
            "Generated myths are inspired by public domain sources",
            "You retain rights to your original scenario submissions",
            "MythWeaver retains rights to improve the service",
            "AI-generated content may have limited copyright protection",
        ],
    },
];

const SERVICE_AVAILABILITY: &[Clause] = &[
    ("Uptime:", "We strive for 99% uptime but cannot guarantee uninterrupted service. Maintenance windows will be announced when possible."),
    ("Rate Limits:", "To ensure fair access, we implement rate limiting. Free users may have usage restrictions during peak times."),
    ("Service Changes:", "We may modify or discontinue features with reasonable notice. Core myth generation will remain free."),
];

const LIABILITY_EXCLUSIONS: [&str; 4] = [
    "Accuracy or cultural appropriateness of generated content",
    "Any decisions made based on generated myths",
    "Service interruptions or data loss",
    "Third-party actions or content",
];

const CULTURAL_RESPECT: [&str; 4] = [
    "Our AI is trained to respect cultural contexts and avoid stereotypes",
    "We use only public domain sources and folkloric motifs",
    "Sacred or sensitive cultural elements are avoided",
    "We welcome feedback from cultural communities",
];

#[component]
fn LegalHeader(icon: &'static str, title: &'static str, intro: &'static str) -> Element {
    rsx! {
        div {
            class: "legal-header",
            div { class: "legal-icon", "{icon}" }
            h1 { class: "legal-title", "{title}" }
            p { class: "legal-intro", "{intro}" }
            p { class: "legal-updated", "Last updated: {LAST_UPDATED}" }
        }
    }
}

#[component]
fn SectionCards(sections: &'static [LegalSection]) -> Element {
    rsx! {
        div {
            class: "legal-sections",
            for section in sections.iter() {
                div {
                    key: "{section.title}",
                    class: "card legal-section",
                    div { class: "legal-section-icon", "{section.icon}" }
                    div {
                        class: "legal-section-body",
                        h2 { class: "section-title", "{section.title}" }
                        ul {
                            class: "legal-list",
                            for item in section.items.iter() {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ClauseCard(title: &'static str, clauses: &'static [Clause]) -> Element {
    rsx! {
        div {
            class: "card legal-section",
            h2 { class: "section-title", "{title}" }
            for (lead, text) in clauses.iter() {
                p {
                    key: "{lead}",
                    class: "legal-clause",
                    strong { "{lead}" }
                    " {text}"
                }
            }
        }
    }
}

#[component]
pub fn PrivacyPage() -> Element {
    let platform = use_platform();
    use_effect(move || platform.set_page_title("Privacy Policy - MythWeaver"));

    rsx! {
        div {
            class: "container page-narrow legal-page",
            LegalHeader {
                icon: "🛡",
                title: "Privacy Policy",
                intro: "Your privacy is sacred to us. Here's how we protect your data and respect your digital rights.",
            }
            SectionCards { sections: PRIVACY_SECTIONS }

            div {
                class: "card legal-section",
                h2 { class: "section-title", "Third-Party Services" }
                h3 { class: "legal-subtitle", "OpenAI" }
                p { "We use OpenAI's API to generate myths. Your scenarios are sent to OpenAI for processing but are not stored by them for training purposes. View OpenAI's privacy policy at openai.com/privacy." }
                h3 { class: "legal-subtitle", "Analytics" }
                p { "We may use privacy-focused analytics tools to understand how our service is used. No personal information is collected through analytics." }
            }

            ClauseCard { title: "Your Rights", clauses: PRIVACY_RIGHTS }

            div {
                class: "card legal-contact",
                h2 { class: "section-title", "Questions About Privacy?" }
                p { "We're committed to transparency and protecting your privacy. If you have any questions or concerns about how we handle your data, please don't hesitate to reach out." }
                a { href: "mailto:privacy@mythweaver.fun", class: "btn-primary", "Contact Privacy Team" }
            }
        }
    }
}

#[component]
pub fn TermsPage() -> Element {
    let platform = use_platform();
    use_effect(move || platform.set_page_title("Terms of Service - MythWeaver"));

    rsx! {
        div {
            class: "container page-narrow legal-page",
            LegalHeader {
                icon: "⚖",
                title: "Terms of Service",
                intro: "Fair and transparent terms that protect both creators and our community of storytellers.",
            }
            SectionCards { sections: TERMS_SECTIONS }

            ClauseCard { title: "Service Availability", clauses: SERVICE_AVAILABILITY }

            div {
                class: "card legal-section",
                h2 { class: "section-title", "Limitation of Liability" }
                p { "MythWeaver is provided \"as is\" without warranties. Generated content is for entertainment and educational purposes. We are not liable for:" }
                ul {
                    class: "legal-list",
                    for item in LIABILITY_EXCLUSIONS {
                        li { key: "{item}", "{item}" }
                    }
                }
            }

            div {
                class: "card legal-section",
                h2 { class: "section-title", "Cultural Respect Policy" }
                p { "We are committed to honoring cultural traditions and avoiding appropriation:" }
                ul {
                    class: "legal-list",
                    for item in CULTURAL_RESPECT {
                        li { key: "{item}", "{item}" }
                    }
                }
                p {
                    "If you believe our service has misrepresented your culture, please contact us immediately at "
                    a { href: "mailto:cultural@mythweaver.fun", "cultural@mythweaver.fun" }
                    "."
                }
            }

            div {
                class: "card legal-contact",
                h2 { class: "section-title", "Questions About These Terms?" }
                p { "We believe in clear, fair terms. If you have questions about any part of our terms of service, we're here to help explain them." }
                a { href: "mailto:legal@mythweaver.fun", class: "btn-primary", "Contact Legal Team" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_items() {
        for section in PRIVACY_SECTIONS.iter().chain(TERMS_SECTIONS.iter()) {
            assert!(!section.title.is_empty());
            assert_eq!(section.items.len(), 4, "{}", section.title);
        }
    }

    #[test]
    fn section_titles_are_unique_per_page() {
        let mut titles: Vec<_> = PRIVACY_SECTIONS.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PRIVACY_SECTIONS.len());
    }
}
