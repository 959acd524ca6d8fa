//! Value objects for the myth domain

mod culture;
mod scenario;

pub use culture::{tradition_name, Culture, Tone};
pub use scenario::{
    character_count_label, is_near_limit, Scenario, ValidationError, SCENARIO_MAX_CHARS,
    SCENARIO_MIN_CHARS, SCENARIO_WARN_CHARS,
};
