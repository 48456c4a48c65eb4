//! # word-scramble
//!
//! Core of a word game: a root word is shown, the player submits words made
//! only from its letters, and every valid, real, unused word scores its
//! length.
//!
//! ## Design Principles
//!
//! 1. **State as a value**: `GameState` is handed into each transition and a
//!    new one comes back. The host owns the only mutable binding.
//!
//! 2. **Injected collaborators**: the dictionary is a `DictionaryOracle`
//!    and the root-word list is plain data. Nothing touches a platform
//!    spell checker or bundle.
//!
//! 3. **Seedable randomness**: root-word picks and penalties come from
//!    ChaCha8 streams, so a seed replays a whole game.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, game state
//! - `dictionary`: `DictionaryOracle` and the in-memory `WordSet`
//! - `words`: root-word lists
//! - `rules`: `WordValidator`, submission results, scoring rules
//! - `session`: optional owner of one running game

pub mod core;
pub mod dictionary;
pub mod error;
pub mod rules;
pub mod session;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, RngCheckpoint, ScoreIndicator, Sentiment};

pub use crate::dictionary::{DictionaryOracle, WordSet};

pub use crate::error::{Result, WordScrambleError};

pub use crate::rules::{
    is_possible, normalize, sentiment_analysis, Alert, SubmissionResult, WordValidator,
};

pub use crate::session::{GameSession, GameSessionBuilder};

pub use crate::words::WordList;
