//! Game session implementation.

use crate::core::{GameConfig, GameState};
use crate::dictionary::DictionaryOracle;
use crate::rules::{Alert, SubmissionResult, WordValidator};
use crate::words::WordList;

/// Builder for creating a GameSession.
pub struct GameSessionBuilder {
    config: GameConfig,
    words: WordList,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            words: WordList::embedded(),
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn words(mut self, words: WordList) -> Self {
        self.words = words;
        self
    }

    /// Build the session and start the first round.
    pub fn build<D: DictionaryOracle>(self, dictionary: D, seed: u64) -> GameSession<D> {
        let mut validator = WordValidator::with_config(dictionary, self.config, seed);
        let state = validator.start_game(self.words.as_slice());

        GameSession {
            validator,
            words: self.words,
            state,
            pending: None,
        }
    }
}

/// One player's game: validator, root-word list and current round.
pub struct GameSession<D> {
    validator: WordValidator<D>,
    words: WordList,
    state: GameState,
    /// Rejection whose alert has not been dismissed yet.
    pending: Option<SubmissionResult>,
}

impl<D: DictionaryOracle> GameSession<D> {
    /// Current round.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }

    /// Alert for the rejection awaiting dismissal, if any.
    pub fn pending_alert(&self) -> Option<Alert> {
        self.pending
            .as_ref()
            .and_then(|result| result.alert(self.state.root_word()))
    }

    /// Submit the player's input.
    ///
    /// Returns `None` and changes nothing for blank input, or while a
    /// rejection is still pending: the alert is modal, so input is refused
    /// until [`dismiss_rejection`](Self::dismiss_rejection).
    pub fn submit(&mut self, raw: &str) -> Option<SubmissionResult> {
        if self.pending.is_some() {
            log::debug!("Ignoring {:?} while a rejection is pending", raw);
            return None;
        }
        let (next, result) = self.validator.submit_word(&self.state, raw)?;
        self.state = next;
        if result.is_rejected() {
            self.pending = Some(result.clone());
        }
        Some(result)
    }

    /// Dismiss the pending rejection alert and apply the penalty.
    ///
    /// Returns the amount subtracted, or `None` if nothing was pending.
    pub fn dismiss_rejection(&mut self) -> Option<i64> {
        self.pending.take()?;
        let (next, amount) = self.validator.apply_penalty_with_amount(&self.state);
        self.state = next;
        Some(amount)
    }

    /// Start a new round from the session's word list.
    pub fn restart(&mut self) -> &GameState {
        self.pending = None;
        self.state = self.validator.start_game(self.words.as_slice());
        &self.state
    }
}
