//! Reusable UI components

mod choice_card;
mod footer;
mod header;
mod myth_card;
mod page_transition;
mod share_modal;
mod toast;

pub use choice_card::ChoiceCard;
pub use footer::Footer;
pub use header::Header;
pub use myth_card::MythCard;
pub use page_transition::{PageTransition, Transition};
pub use share_modal::ShareModal;
pub use toast::ToastHost;
