//! Dictionary oracle for "is this a real word".
//!
//! The validator never spell-checks on its own. Hosts inject a
//! [`DictionaryOracle`], backed by whatever facility they have:
//! - [`WordSet`]: an in-memory word list for one language
//! - any `Fn(&str, &str) -> bool` closure (handy for stubs in tests)

mod word_set;

pub use word_set::WordSet;

/// Yes/no authority for whether a word exists in a language.
///
/// Words reach the oracle already lowercased and trimmed.
pub trait DictionaryOracle {
    /// Is `word` a real word in `language` (e.g. `"en"`)?
    fn is_real(&self, word: &str, language: &str) -> bool;
}

impl<F> DictionaryOracle for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}
