//! Rules engine trait.
//!
//! Games implement `RulesEngine` to define their rules:
//! - How a game is set up from a seed
//! - What actions are legal
//! - How actions modify state
//! - When the game is won

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, GameState, UserId};
use crate::error::Response;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The player who emptied their hand.
    pub winner: UserId,
}

impl GameResult {
    /// Check if a user won.
    #[must_use]
    pub fn is_winner(&self, user: &UserId) -> bool {
        &self.winner == user
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: Every guard must run before any mutation. A rejected
///   action leaves the state untouched.
/// - `apply_action`: Must be deterministic given the state (the RNG lives
///   in the state), so replaying the history reproduces the game.
/// - `legal_actions`: Exactly the actions `apply_action` would accept.
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Create a fresh lobby state, shuffling with `seed`.
    fn initialize(&self, seed: u64) -> GameState;

    /// Apply a request from `user` to the game state.
    fn apply_action(&self, state: &mut GameState, user: &UserId, action: &Action) -> Response;

    /// Actions `user` could successfully submit right now.
    fn legal_actions(&self, state: &GameState, user: &UserId) -> Vec<Action>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Would `apply_action` accept this action?
    fn is_legal(&self, state: &GameState, user: &UserId, action: &Action) -> bool {
        self.legal_actions(state, user).contains(action)
    }

    /// Apply a sequence of `(user, action)` requests, stopping at the first
    /// rejection.
    fn replay<'a>(
        &self,
        state: &mut GameState,
        actions: impl IntoIterator<Item = (&'a UserId, &'a Action)>,
    ) -> Response {
        for (user, action) in actions {
            self.apply_action(state, user, action)?;
        }
        Ok(())
    }
}
