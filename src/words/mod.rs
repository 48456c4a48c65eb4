//! Candidate root words.
//!
//! A word list is newline-delimited UTF-8 text with one candidate per line.
//! The validator takes the parsed list as a plain slice; reading the
//! resource is the loader's job.
//!
//! # Loading Modes
//!
//! - **Embedded**: the list compiled into the crate with [`WordList::embedded()`]
//! - **File-based**: load from a path with [`WordList::from_file()`]
//! - **String**: parse content already in memory with [`WordList::parse()`]

use std::path::Path;

use crate::error::{Result, WordScrambleError};

/// Ordered list of candidate root words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The start-word list shipped with the crate.
    pub fn embedded() -> Self {
        Self::parse(include_str!("../../data/start.txt"))
    }

    /// Load a word list from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| WordScrambleError::io(path, e))?;
        let list = Self::parse(&content);
        log::info!("Loaded {} root words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Parse newline-delimited content.
    ///
    /// Lines are trimmed (so `\r\n` endings are fine) and lowercased.
    /// Blank lines are dropped. Order is preserved.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { words }
    }

    /// The words, in file order.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl AsRef<[String]> for WordList {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}
