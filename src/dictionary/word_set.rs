//! In-memory dictionary for a single language.

use std::path::Path;

use rustc_hash::FxHashSet;

use super::DictionaryOracle;
use crate::error::{Result, WordScrambleError};

/// A dictionary backed by a word list.
///
/// Lookups are case-insensitive. Queries for another language always miss.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Load a dictionary from string content.
    ///
    /// Each line should contain one word. Empty lines and lines starting
    /// with '#' are ignored.
    pub fn parse(language: impl Into<String>, content: &str) -> Self {
        Self::from_words(language, content.lines().filter(|l| !l.starts_with('#')))
    }

    /// Load a dictionary from a file path.
    pub fn from_file(language: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| WordScrambleError::io(path, e))?;
        let set = Self::parse(language, &content);
        log::info!(
            "Loaded {} {} words from {}",
            set.len(),
            set.language,
            path.display()
        );
        Ok(set)
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.into(),
            words,
        }
    }

    /// Language this dictionary answers for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Does a request for `language` hit this dictionary?
    ///
    /// Only the primary subtag is compared, so an `en_US` list answers `en`.
    pub fn speaks(&self, language: &str) -> bool {
        primary_subtag(&self.language).eq_ignore_ascii_case(primary_subtag(language))
    }

    /// Return the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordSet {
    fn is_real(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.contains(word)
    }
}

fn primary_subtag(language: &str) -> &str {
    language.split(['-', '_']).next().unwrap_or(language)
}
