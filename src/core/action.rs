//! Requests and action history.
//!
//! An `Action` is one request a user can submit to a game. Successful
//! actions are appended to the game's history as `ActionRecord`s, which
//! is enough to replay a game from its seed.

use serde::{Deserialize, Serialize};

use super::player::UserId;
use crate::cards::Card;

/// A request a user can submit.
///
/// ## Example
///
/// ```
/// use shedding_engine::cards::{Card, Color};
/// use shedding_engine::core::Action;
///
/// let play = Action::Play { card: Card::new(Color::Red, 7) };
/// assert!(play.is_play());
/// assert!(!Action::Draw.is_play());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Join the lobby.
    Join,
    /// Deal and begin the game.
    Start,
    /// Play a card from hand onto the pile.
    Play { card: Card },
    /// Draw the top card of the deck.
    Draw,
}

impl Action {
    /// Is this a card play?
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::Play { .. })
    }

    /// The played card, if this is a play.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Play { card } => Some(*card),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Join => write!(f, "join"),
            Action::Start => write!(f, "start"),
            Action::Play { card } => write!(f, "play {card}"),
            Action::Draw => write!(f, "draw"),
        }
    }
}

/// A successful action with metadata, for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Audit of who did what in which order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The user who submitted this action.
    pub user: UserId,

    /// The action taken.
    pub action: Action,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(user: UserId, action: Action, sequence: u32) -> Self {
        Self {
            user,
            action,
            sequence,
        }
    }
}
