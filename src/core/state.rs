//! Game state for one round.
//!
//! ## GameState
//!
//! Everything the host displays:
//! - Root word (the title of the round)
//! - Accepted words, most recent first
//! - Score, sentiment and the score indicator
//!
//! The validator never mutates a state in place. Each transition returns a
//! new value; `used_words` is an `im::Vector` so those copies are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

/// Coarse mood derived from the current score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Score is exactly zero.
    #[default]
    Neutral,
    /// Score in `1..=3`.
    Happy,
    /// Score above 3.
    Ecstatic,
    /// Score below zero.
    Bad,
}

impl Sentiment {
    /// Glyph shown next to the score.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Sentiment::Neutral => "😐",
            Sentiment::Happy => "😀",
            Sentiment::Ecstatic => "😊😱",
            Sentiment::Bad => "🤮🤮🤮",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Colour flag of the score display.
///
/// Positive after a new game or an accepted word, negative after a penalty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreIndicator {
    #[default]
    Positive,
    Negative,
}

/// State of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    root_word: String,

    /// Accepted words, most recent first. Never contains duplicates.
    used_words: Vector<String>,

    /// Running score. Can go negative after penalties.
    pub score: i64,

    /// Mood last computed from `score`.
    pub sentiment: Sentiment,

    /// Colour flag for the score.
    pub indicator: ScoreIndicator,
}

impl GameState {
    /// Fresh state for a round on `root_word`.
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        let root_word = root_word.into();
        debug_assert!(!root_word.is_empty(), "Root word must not be empty");

        Self {
            root_word,
            used_words: Vector::new(),
            score: 0,
            sentiment: Sentiment::Neutral,
            indicator: ScoreIndicator::Positive,
        }
    }

    /// The word whose letters bound every submission.
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &Vector<String> {
        &self.used_words
    }

    /// Has `word` already been accepted this round?
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Record an accepted word at the front of the list.
    ///
    /// Returns `false` and leaves the list alone if the word is already there.
    pub(crate) fn push_used(&mut self, word: String) -> bool {
        if self.is_used(&word) {
            return false;
        }
        self.used_words.push_front(word);
        true
    }
}
