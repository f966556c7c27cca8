//! # shedding-engine
//!
//! Authoritative rules engine for a turn-based shedding card game in the
//! Crazy Eights / Uno family. Players join a lobby, a shuffled 36-card
//! deck is dealt, and players take turns playing a card that matches the
//! top of the pile by color or number, or drawing. The first player to
//! empty their hand wins.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `GameState` per game, passed `&mut` into each
//!    operation. The host serializes access; the engine holds no locks.
//!
//! 2. **All-or-Nothing**: Every guard runs before any mutation. A rejected
//!    request leaves the state exactly as it was.
//!
//! 3. **Deterministic**: Shuffling and the first turn come from a seeded
//!    `GameRng` stored in the state, so seed + history replays a game.
//!
//! 4. **Hidden Information**: Clients only ever receive a `PlayerView`.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration
//! - `cards`: Card values and the deck manager
//! - `rules`: Guard checks, `RulesEngine` trait, `SheddingGame`
//! - `view`: Per-player projection
//! - `error`: Rejection, invariant, config and snapshot errors

pub mod core;
pub mod cards;
pub mod rules;
pub mod view;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameRngState, GameState, GameStatus, Hand, Player, Seat,
    UserId,
};

pub use crate::cards::{Card, Color, DECK_SIZE};

pub use crate::rules::{GameResult, RulesEngine, SheddingGame};

pub use crate::view::{project, PlayerView};

pub use crate::error::{ConfigError, GameError, InvariantViolation, Response, SnapshotError};
