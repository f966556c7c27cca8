//! Player identification, hands and turn seats.
//!
//! ## UserId
//!
//! Opaque identifier assigned and authenticated by the host.
//!
//! ## Seat
//!
//! Index into the join-ordered player list. The turn is a `Seat`, and
//! advancing the turn is strictly round-robin in join order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Host-assigned user identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player's hand. Hands stay small, so most never touch the heap.
pub type Hand = SmallVec<[Card; 8]>;

/// A joined player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: UserId,
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            hand: SmallVec::new(),
        }
    }

    /// Does the hand hold a card equal to `card`?
    #[must_use]
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Remove one card equal to `card` from the hand.
    ///
    /// Duplicates are interchangeable, so whichever equal card comes first
    /// is removed. Returns true if a card was removed.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}

/// Seat index supporting up to 255 players.
///
/// Seats are 0-based in join order: the first player to join is `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(pub u8);

impl Seat {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    ///
    /// ```
    /// use shedding_engine::core::Seat;
    ///
    /// assert_eq!(Seat::new(0).next(3), Seat::new(1));
    /// assert_eq!(Seat::new(2).next(3), Seat::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0 && player_count <= 256);
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}
