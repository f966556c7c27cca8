//! Rules: guard checks, the `RulesEngine` trait and the shedding game.
//!
//! `SheddingGame` implements `RulesEngine` and owns the state machine.
//! The checks in `checks` are pure and run before any mutation.

pub mod checks;
pub mod engine;
pub mod shedding;

pub use engine::{GameResult, RulesEngine};
pub use shedding::SheddingGame;
