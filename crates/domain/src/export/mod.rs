//! Exporting a story: paginated document and share card layout
//!
//! Both are pure layout passes. Turning a [`Document`] into a file and a
//! [`ShareCard`] into pixels happens in the player crate.

mod document;
mod share_card;
mod wrap;

pub use document::{
    build_document, Document, Page, PageGeometry, PageItem, TextAlign, TextStyle,
    DOCUMENT_FOOTER_BRAND,
};
pub use share_card::{
    build_share_card, CardFont, Color, DrawCommand, Fill, ShareCard, SHARE_CARD_HEIGHT,
    SHARE_CARD_WIDTH, SHARE_EXCERPT_CHARS,
};
pub use wrap::{columns_for, wrap_text};
