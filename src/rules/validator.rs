//! The word validator: every game-state transition goes through here.
//!
//! ## Submission pipeline
//!
//! A submission is normalized (lowercase, trimmed) and then checked in a
//! fixed order. The first failing check decides the result:
//!
//! 1. not the root word itself
//! 2. not already used this round
//! 3. formable from the root word's letters
//! 4. known to the dictionary
//!
//! Blank submissions are ignored without producing a result.

use smallvec::SmallVec;

use crate::core::{GameConfig, GameRng, GameState, RngCheckpoint, ScoreIndicator, Sentiment};
use crate::dictionary::DictionaryOracle;

use super::outcome::SubmissionResult;

const ROOT_WORD_STREAM: &str = "root_word";
const PENALTY_STREAM: &str = "penalty";

/// Normalize raw input the way every submission is compared.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Can `word` be spelled using each letter of `root` at most once?
///
/// Letters are consumed left to right from a copy of the root's letters.
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut pool: SmallVec<[char; 16]> = root.chars().collect();

    for letter in word.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(pos) => {
                pool.remove(pos);
            }
            None => return false,
        }
    }
    true
}

/// Mood for a score.
#[must_use]
pub fn sentiment_analysis(score: i64) -> Sentiment {
    if score == 0 {
        Sentiment::Neutral
    } else if score > 0 && score <= 3 {
        Sentiment::Happy
    } else if score > 3 {
        Sentiment::Ecstatic
    } else {
        Sentiment::Bad
    }
}

/// Validates submissions and scores a round.
///
/// Holds only the injected dictionary, the config and the RNG streams.
/// Game state is passed in and handed back by value.
pub struct WordValidator<D> {
    dictionary: D,
    config: GameConfig,
    root_rng: GameRng,
    penalty_rng: GameRng,
}

impl<D: DictionaryOracle> WordValidator<D> {
    /// Create a validator with the default config.
    #[must_use]
    pub fn new(dictionary: D, seed: u64) -> Self {
        Self::with_config(dictionary, GameConfig::default(), seed)
    }

    /// Create a validator with a custom config.
    #[must_use]
    pub fn with_config(dictionary: D, config: GameConfig, seed: u64) -> Self {
        Self {
            dictionary,
            config,
            root_rng: GameRng::stream(seed, ROOT_WORD_STREAM),
            penalty_rng: GameRng::stream(seed, PENALTY_STREAM),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Start a fresh round.
    ///
    /// Picks a root word uniformly from the non-blank entries of `words`,
    /// or the configured fallback when there are none.
    pub fn start_game<S: AsRef<str>>(&mut self, words: &[S]) -> GameState {
        let candidates: Vec<&str> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();

        let root_word = match self.root_rng.pick(&candidates) {
            Some(word) => word.to_lowercase(),
            None => {
                log::warn!(
                    "Word list is empty, falling back to {:?}",
                    self.config.fallback_root_word()
                );
                self.config.fallback_root_word().to_string()
            }
        };

        log::info!(
            "Starting game with root word {:?} ({} candidates)",
            root_word,
            candidates.len()
        );
        GameState::new(root_word)
    }

    /// Check a submission against `state`.
    ///
    /// Returns `None` for a blank submission. Otherwise returns the next
    /// state and the result; rejected submissions return `state` unchanged.
    #[must_use]
    pub fn submit_word(&self, state: &GameState, raw: &str) -> Option<(GameState, SubmissionResult)> {
        let word = normalize(raw);
        if word.is_empty() {
            return None;
        }

        let result = self.check(state, &word);
        log::debug!("Submission {:?} on {:?}: {:?}", word, state.root_word(), result);

        let mut next = state.clone();
        if let SubmissionResult::Accepted { word, length_bonus } = &result {
            next.push_used(word.clone());
            next.score += length_bonus;
            next.sentiment = sentiment_analysis(next.score);
            next.indicator = ScoreIndicator::Positive;
        }
        Some((next, result))
    }

    /// Subtract a random penalty from the score.
    ///
    /// Sets the indicator to negative. Sentiment is left as it was.
    #[must_use]
    pub fn apply_penalty(&mut self, state: &GameState) -> GameState {
        let (next, _) = self.apply_penalty_with_amount(state);
        next
    }

    /// Same as [`apply_penalty`](Self::apply_penalty), also returning the amount taken.
    pub fn apply_penalty_with_amount(&mut self, state: &GameState) -> (GameState, i64) {
        let amount = self.penalty_rng.draw(self.config.penalty_range());
        log::trace!("Penalty of {} on score {}", amount, state.score);

        let mut next = state.clone();
        next.score -= amount;
        next.indicator = ScoreIndicator::Negative;
        (next, amount)
    }

    /// Positions of the root-word and penalty streams.
    #[must_use]
    pub fn rng_state(&self) -> (RngCheckpoint, RngCheckpoint) {
        (self.root_rng.checkpoint(), self.penalty_rng.checkpoint())
    }

    /// Resume both streams from positions captured by [`rng_state`](Self::rng_state).
    pub fn restore_rng(&mut self, root: &RngCheckpoint, penalty: &RngCheckpoint) {
        self.root_rng = GameRng::resume(root);
        self.penalty_rng = GameRng::resume(penalty);
    }

    fn check(&self, state: &GameState, word: &str) -> SubmissionResult {
        if word == state.root_word() {
            return SubmissionResult::RejectedSameAsRoot;
        }
        if state.is_used(word) {
            return SubmissionResult::RejectedDuplicate;
        }
        if !is_possible(word, state.root_word()) {
            return SubmissionResult::RejectedImpossibleLetters;
        }
        if !self.dictionary.is_real(word, self.config.language()) {
            return SubmissionResult::RejectedNotAWord;
        }

        SubmissionResult::Accepted {
            word: word.to_string(),
            length_bonus: word.chars().count() as i64,
        }
    }
}
