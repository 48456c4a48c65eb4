//! Outcome of a single submission.

use serde::{Deserialize, Serialize};

/// Why a word was accepted or rejected.
///
/// Rejections are ordinary outcomes, not errors. The host shows the
/// [`alert`](SubmissionResult::alert) and usually follows with a penalty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionResult {
    /// Word was added. `length_bonus` is what the score went up by.
    Accepted { word: String, length_bonus: i64 },
    /// The word is the root word itself.
    RejectedSameAsRoot,
    /// The word was already accepted this round.
    RejectedDuplicate,
    /// The root word doesn't have the letters.
    RejectedImpossibleLetters,
    /// The dictionary doesn't know the word.
    RejectedNotAWord,
}

/// Title and message the host displays for a rejection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl SubmissionResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted { .. })
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Score change caused by this submission alone.
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        match self {
            SubmissionResult::Accepted { length_bonus, .. } => *length_bonus,
            _ => 0,
        }
    }

    /// Alert for a rejection. `None` when the word was accepted.
    #[must_use]
    pub fn alert(&self, root_word: &str) -> Option<Alert> {
        let (title, message) = match self {
            SubmissionResult::Accepted { .. } => return None,
            SubmissionResult::RejectedSameAsRoot => (
                "Come on, man!",
                "Don't just put the same word in, that's lame!".to_string(),
            ),
            SubmissionResult::RejectedDuplicate => {
                ("Word used already", "Be more original, darn it!".to_string())
            }
            SubmissionResult::RejectedImpossibleLetters => (
                "Word not possible",
                format!(
                    "Check the word again. You must only use the letters in the original word. \
                     The original word was {root_word}."
                ),
            ),
            SubmissionResult::RejectedNotAWord => (
                "Not a real word",
                "Your word does not appear in the English dictionary. Try again.".to_string(),
            ),
        };
        Some(Alert { title, message })
    }
}
