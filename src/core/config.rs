//! Game configuration.
//!
//! Hosts configure the validator at startup with a `GameConfig`:
//! - the root word used when the word list is empty
//! - the language passed to the dictionary oracle
//! - the range penalties are drawn from
//!
//! Fields are only reachable through the builder or deserialization, and
//! both reject a blank fallback word and an empty penalty range.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Result, WordScrambleError};

/// Root word used when no candidate list is available.
pub const DEFAULT_ROOT_WORD: &str = "cauliflower";

/// Dictionary language queried for every submission.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Penalties are drawn uniformly from `0..6`.
pub const DEFAULT_PENALTY_RANGE: Range<i64> = 0..6;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Root word for a game started from an empty word list. Never blank.
    fallback_root_word: String,

    /// Language code handed to the `DictionaryOracle`.
    language: String,

    /// Half-open range a rejection penalty is drawn from. Never empty.
    penalty_range: Range<i64>,
}

/// Unchecked shape of a serialized `GameConfig`.
#[derive(Deserialize)]
struct RawGameConfig {
    fallback_root_word: String,
    language: String,
    penalty_range: Range<i64>,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = WordScrambleError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Ok(Self {
            fallback_root_word: check_root_word(&raw.fallback_root_word)?,
            language: raw.language,
            penalty_range: check_penalty_range(raw.penalty_range)?,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fallback_root_word: DEFAULT_ROOT_WORD.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            penalty_range: DEFAULT_PENALTY_RANGE,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback root word.
    ///
    /// The word is normalized the same way submissions are.
    /// Panics if it is blank.
    #[must_use]
    pub fn with_fallback_root_word(mut self, word: impl Into<String>) -> Self {
        match check_root_word(&word.into()) {
            Ok(word) => self.fallback_root_word = word,
            Err(e) => panic!("{e}"),
        }
        self
    }

    /// Set the dictionary language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the penalty range. Panics if it is empty.
    #[must_use]
    pub fn with_penalty_range(mut self, range: Range<i64>) -> Self {
        match check_penalty_range(range) {
            Ok(range) => self.penalty_range = range,
            Err(e) => panic!("{e}"),
        }
        self
    }

    pub fn fallback_root_word(&self) -> &str {
        &self.fallback_root_word
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn penalty_range(&self) -> Range<i64> {
        self.penalty_range.clone()
    }
}

fn check_root_word(word: &str) -> Result<String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(WordScrambleError::InvalidConfig(
            "Fallback root word must not be blank".to_string(),
        ));
    }
    Ok(word)
}

fn check_penalty_range(range: Range<i64>) -> Result<Range<i64>> {
    if range.is_empty() {
        return Err(WordScrambleError::InvalidConfig(format!(
            "Penalty range must not be empty, got {}..{}",
            range.start, range.end
        )));
    }
    Ok(range)
}
