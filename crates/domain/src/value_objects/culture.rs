//! Cultural tradition and story tone vocabularies
//!
//! Both are closed sets sent verbatim (snake_case) to the generation service.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::capitalize_first;
use crate::error::DomainError;

/// Folklore tradition the generated myth should draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Culture {
    /// Let the service pick a tradition
    #[default]
    Auto,
    Greek,
    Norse,
    Indian,
    Japanese,
    Egyptian,
    Celtic,
    Chinese,
    African,
    NativeAmerican,
}

impl Culture {
    /// Get all cultures in selector order
    pub fn all() -> &'static [Culture] {
        &[
            Culture::Auto,
            Culture::Greek,
            Culture::Norse,
            Culture::Indian,
            Culture::Japanese,
            Culture::Egyptian,
            Culture::Celtic,
            Culture::Chinese,
            Culture::African,
            Culture::NativeAmerican,
        ]
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Culture::Auto => "auto",
            Culture::Greek => "greek",
            Culture::Norse => "norse",
            Culture::Indian => "indian",
            Culture::Japanese => "japanese",
            Culture::Egyptian => "egyptian",
            Culture::Celtic => "celtic",
            Culture::Chinese => "chinese",
            Culture::African => "african",
            Culture::NativeAmerican => "native_american",
        }
    }

    /// Label shown in the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Culture::Auto => "Auto-detect",
            Culture::Greek => "Greek",
            Culture::Norse => "Norse",
            Culture::Indian => "Indian",
            Culture::Japanese => "Japanese",
            Culture::Egyptian => "Egyptian",
            Culture::Celtic => "Celtic",
            Culture::Chinese => "Chinese",
            Culture::African => "African",
            Culture::NativeAmerican => "Native American",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Culture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Culture::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown culture: {}", s)))
    }
}

/// Human label for a culture value as reported by the service.
///
/// The service echoes free text in `meta.culture`, so known values get their
/// selector label and anything else is capitalized as-is.
pub fn tradition_name(culture: &str) -> String {
    match culture.parse::<Culture>() {
        Ok(Culture::Auto) | Err(_) => capitalize_first(culture),
        Ok(known) => known.display_name().to_string(),
    }
}

/// Narrative register of the generated myth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Playful,
    #[default]
    Balanced,
    Serious,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        &[Tone::Playful, Tone::Balanced, Tone::Serious]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Playful => "playful",
            Tone::Balanced => "balanced",
            Tone::Serious => "serious",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Playful => "Playful",
            Tone::Balanced => "Balanced",
            Tone::Serious => "Serious",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "playful" => Ok(Tone::Playful),
            "balanced" => Ok(Tone::Balanced),
            "serious" => Ok(Tone::Serious),
            _ => Err(DomainError::parse(format!("Unknown tone: {}", s))),
        }
    }
}
