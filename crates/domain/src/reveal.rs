//! Incremental text reveal
//!
//! The story card plays the myth back one character at a time. The state
//! machine here is timer-free: a scheduler in the UI calls [`Reveal::tick`]
//! every [`REVEAL_TICK_MS`] and stops when it reports completion.

/// Interval between revealed characters
pub const REVEAL_TICK_MS: u64 = 20;

/// How long the story page lets the reveal play before forcing it to finish
pub const REVEAL_WINDOW_MS: u64 = 2000;

/// Pure transition driven by the scheduler: one more character, capped at
/// the full length.
pub fn next_prefix_len(prefix_len: usize, full_len: usize) -> usize {
    prefix_len.saturating_add(1).min(full_len)
}

/// Result of advancing or stopping a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// One more character is visible
    Advanced,
    /// The full text is visible; fire the completion callback
    Completed,
    /// Nothing to do (already complete)
    Idle,
}

/// Playback state for one text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    text: String,
    full_len: usize,
    prefix_len: usize,
    completed: bool,
}

impl Reveal {
    /// Start playback of `text`. With `active == false` the text is shown in
    /// full immediately and the reveal still owes one completion.
    pub fn new(text: impl Into<String>, active: bool) -> Self {
        let text = text.into();
        let full_len = text.chars().count();
        Self {
            prefix_len: if active { 0 } else { full_len },
            text,
            full_len,
            completed: false,
        }
    }

    /// Advance by one character
    pub fn tick(&mut self) -> RevealStep {
        if self.completed {
            return RevealStep::Idle;
        }

        self.prefix_len = next_prefix_len(self.prefix_len, self.full_len);
        if self.prefix_len == self.full_len {
            self.completed = true;
            RevealStep::Completed
        } else {
            RevealStep::Advanced
        }
    }

    /// Reveal turned off: show everything now
    pub fn finish(&mut self) -> RevealStep {
        self.prefix_len = self.full_len;
        if self.completed {
            RevealStep::Idle
        } else {
            self.completed = true;
            RevealStep::Completed
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn full_len(&self) -> usize {
        self.full_len
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// The currently visible prefix
    pub fn visible_text(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.prefix_len)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prefix_len_caps_at_full() {
        assert_eq!(next_prefix_len(0, 3), 1);
        assert_eq!(next_prefix_len(2, 3), 3);
        assert_eq!(next_prefix_len(3, 3), 3);
        assert_eq!(next_prefix_len(0, 0), 0);
    }

    #[test]
    fn test_prefix_is_non_decreasing_and_completes_at_full_length() {
        let text = "Once, in Corinth.";
        let mut reveal = Reveal::new(text, true);
        let mut last = reveal.prefix_len();
        let mut completions = 0;

        for _ in 0..100 {
            match reveal.tick() {
                RevealStep::Completed => completions += 1,
                RevealStep::Advanced | RevealStep::Idle => {}
            }
            assert!(reveal.prefix_len() >= last);
            last = reveal.prefix_len();
        }

        assert_eq!(completions, 1);
        assert_eq!(reveal.visible_text(), text);
        assert_eq!(reveal.prefix_len(), text.chars().count());
    }

    #[test]
    fn test_finish_mid_playback_shows_everything_and_completes_once() {
        let mut reveal = Reveal::new("The oven grew cold.", true);
        reveal.tick();
        reveal.tick();
        assert_eq!(reveal.visible_text(), "Th");

        assert_eq!(reveal.finish(), RevealStep::Completed);
        assert_eq!(reveal.visible_text(), "The oven grew cold.");
        assert_eq!(reveal.finish(), RevealStep::Idle);
        assert_eq!(reveal.tick(), RevealStep::Idle);
    }

    #[test]
    fn test_inactive_reveal_shows_full_text() {
        let mut reveal = Reveal::new("abc", false);
        assert_eq!(reveal.visible_text(), "abc");
        assert_eq!(reveal.finish(), RevealStep::Completed);
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut reveal = Reveal::new("Ásgarðr", true);
        reveal.tick();
        reveal.tick();
        assert_eq!(reveal.visible_text(), "Ás");
    }

    #[test]
    fn test_empty_text_completes_on_first_tick() {
        let mut reveal = Reveal::new("", true);
        assert_eq!(reveal.tick(), RevealStep::Completed);
    }
}
