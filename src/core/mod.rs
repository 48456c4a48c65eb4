//! Core types: RNG, configuration, game state.
//!
//! These carry no rules of their own. The validator in `rules` is the only
//! code that moves a `GameState` from one value to the next.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_LANGUAGE, DEFAULT_PENALTY_RANGE, DEFAULT_ROOT_WORD};
pub use rng::{GameRng, RngCheckpoint};
pub use state::{GameState, ScoreIndicator, Sentiment};
