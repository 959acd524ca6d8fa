//! Scenario text submitted for transformation
//!
//! Validation happens client-side so that rejected input never reaches
//! the network.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum scenario length in characters, after trimming
pub const SCENARIO_MIN_CHARS: usize = 10;

/// Maximum scenario length in characters
pub const SCENARIO_MAX_CHARS: usize = 2000;

/// Character count above which the counter warns about the limit
pub const SCENARIO_WARN_CHARS: usize = 1800;

/// Why a scenario was rejected. `Display` is the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please describe your scenario")]
    Empty,

    #[error("Please provide more details about your scenario")]
    TooShort { min: usize, actual: usize },

    #[error("Scenario must be {max} characters or fewer")]
    TooLong { max: usize, actual: usize },
}

/// A validated, trimmed scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario(String);

impl Scenario {
    /// Validate raw form input.
    ///
    /// Whitespace-only input is `Empty`; length bounds apply to the trimmed text.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let chars = trimmed.chars().count();
        if chars < SCENARIO_MIN_CHARS {
            return Err(ValidationError::TooShort {
                min: SCENARIO_MIN_CHARS,
                actual: chars,
            });
        }
        if chars > SCENARIO_MAX_CHARS {
            return Err(ValidationError::TooLong {
                max: SCENARIO_MAX_CHARS,
                actual: chars,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Counter text under the scenario input, e.g. `13/2000 characters`
pub fn character_count_label(raw: &str) -> String {
    format!("{}/{} characters", raw.chars().count(), SCENARIO_MAX_CHARS)
}

/// Whether the counter should flag the approaching limit
pub fn is_near_limit(raw: &str) -> bool {
    raw.chars().count() > SCENARIO_WARN_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(Scenario::parse(""), Err(ValidationError::Empty));
        assert_eq!(Scenario::parse("   \n\t "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_short_input_is_rejected_after_trim() {
        let err = Scenario::parse("   too short   ").unwrap_err();
        // "too short" is 9 chars once trimmed
        assert_eq!(err, ValidationError::TooShort { min: 10, actual: 9 });
        assert_eq!(
            err.to_string(),
            "Please provide more details about your scenario"
        );
    }

    #[test]
    fn test_exactly_min_length_is_accepted() {
        let scenario = Scenario::parse("  abcdefghij  ").unwrap();
        assert_eq!(scenario.as_str(), "abcdefghij");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 10 multi-byte characters
        assert!(Scenario::parse("éééééééééé").is_ok());
    }

    #[test]
    fn test_too_long_is_rejected() {
        let raw = "a".repeat(SCENARIO_MAX_CHARS + 1);
        assert!(matches!(
            Scenario::parse(&raw),
            Err(ValidationError::TooLong { max: 2000, .. })
        ));
        assert!(Scenario::parse(&"a".repeat(SCENARIO_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_character_count_label() {
        assert_eq!(character_count_label("Test scenario"), "13/2000 characters");
        assert_eq!(character_count_label(""), "0/2000 characters");
    }

    #[test]
    fn test_near_limit() {
        assert!(!is_near_limit(&"a".repeat(1800)));
        assert!(is_near_limit(&"a".repeat(1801)));
    }
}
