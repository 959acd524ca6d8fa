//! Common utility functions shared across the domain and the player.

mod string;

pub use string::{capitalize_first, filename_stem, none_if_blank, paragraphs, truncate_with_ellipsis};
