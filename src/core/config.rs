//! Game configuration.
//!
//! Hosts configure a game once, before `initialize`, by providing a
//! `GameConfig`. The defaults reproduce the standard ruleset:
//! - 4-card starting hands
//! - at least 2 players to start
//! - drawing is restricted to the turn holder

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::error::ConfigError;

/// Configuration for a shedding game.
///
/// ## Example
///
/// ```
/// use shedding_engine::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_starting_hand_size(5)
///     .with_min_players(3);
///
/// assert_eq!(config.starting_hand_size, 5);
/// assert_eq!(config.max_players(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player on start.
    pub starting_hand_size: usize,

    /// Minimum number of joined players required to start.
    pub min_players: usize,

    /// Whether `draw` is rejected for anyone but the turn holder.
    ///
    /// When false, any caller may trigger a draw and the card goes to
    /// the turn holder's hand.
    pub draw_requires_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 4,
            min_players: 2,
            draw_requires_turn: true,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        self.min_players = count;
        self
    }

    #[must_use]
    pub fn with_draw_requires_turn(mut self, required: bool) -> Self {
        self.draw_requires_turn = required;
        self
    }

    /// Cards that must be in the deck to start with `player_count` players:
    /// one hand per player plus the opening discard.
    #[must_use]
    pub fn cards_needed(&self, player_count: usize) -> usize {
        player_count * self.starting_hand_size + 1
    }

    /// Largest player count a full deck can deal to.
    #[must_use]
    pub fn max_players(&self) -> usize {
        if self.starting_hand_size == 0 {
            return u8::MAX as usize;
        }
        ((DECK_SIZE - 1) / self.starting_hand_size).min(u8::MAX as usize)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_hand_size == 0 {
            return Err(ConfigError::EmptyStartingHand);
        }
        if self.min_players < 2 {
            return Err(ConfigError::MinPlayersTooLow(self.min_players));
        }
        if self.min_players > self.max_players() {
            return Err(ConfigError::DeckTooSmall {
                hand_size: self.starting_hand_size,
                players: self.min_players,
                deck_size: DECK_SIZE,
            });
        }
        Ok(())
    }
}
