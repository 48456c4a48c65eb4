//! A ready-made owner for the single mutable game binding.
//!
//! Hosts that would rather not thread `GameState` themselves hold one
//! `GameSession`. It follows the flow of a one-screen word game:
//! - the round starts as soon as the session is built
//! - a rejected submission waits for the player to dismiss its alert,
//!   and dismissing it costs a penalty
//! - "start new game" replaces the round wholesale

mod game;

pub use game::{GameSession, GameSessionBuilder};
