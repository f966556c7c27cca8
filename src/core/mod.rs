//! Core engine types: players, state, actions, RNG, configuration.
//!
//! This module holds the data the rules operate on. Rules live in
//! `rules`, the client-facing projection in `view`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Hand, Player, Seat, UserId};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use state::{GameState, GameStatus};
