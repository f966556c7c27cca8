//! Error types.
//!
//! - `GameError`: a rejected request. The state is left unchanged and the
//!   `Display` text is the message shown to the user.
//! - `InvariantViolation`: reported by `GameState::check_invariants`.
//!   Seeing one means the engine has a bug.
//! - `ConfigError`: an unplayable `GameConfig`.
//! - `SnapshotError`: a snapshot could not be encoded or decoded.

use thiserror::Error;

use crate::cards::Card;
use crate::core::GameStatus;

/// A request rejected by the rules.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Already joined the game!")]
    AlreadyJoined,

    #[error("Game has already started!")]
    AlreadyStarted,

    #[error("Not enough players to start game!")]
    NotEnoughPlayers,

    #[error("Game is already in progress!")]
    AlreadyInProgress,

    #[error("Game is over! Create a new lobby")]
    LobbyClosed,

    #[error("Too many players!")]
    TooManyPlayers,

    #[error("Game has not started yet!")]
    NotStarted,

    #[error("Game Over!")]
    GameOver,

    #[error("Not your turn!")]
    NotYourTurn,

    #[error("You don't have this card!")]
    CardNotInHand(Card),

    #[error("Card doesn't match the last card on the pile!")]
    CardMismatch { card: Card, top: Card },

    #[error("Deck is empty!")]
    DeckEmpty,
}

/// Result of a state-transition request. Success carries no payload.
pub type Response = Result<(), GameError>;

/// A broken state invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("expected {expected} cards across hands, deck and pile, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card {card} appears {found} times, expected {expected}")]
    CardMultiplicity { card: Card, expected: usize, found: usize },

    #[error("turn index {turn} is out of range for {player_count} players")]
    TurnOutOfRange { turn: usize, player_count: usize },

    #[error("turn must be set exactly while the game is past the lobby (status {0:?})")]
    TurnStatusMismatch(GameStatus),

    #[error("winner must be set exactly when the game is over (status {0:?})")]
    WinnerStatusMismatch(GameStatus),

    #[error("winner {0} is not a player in this game")]
    UnknownWinner(String),

    #[error("user {0} has more than one player record")]
    DuplicatePlayer(String),
}

/// An unplayable configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("starting hand size must be at least 1")]
    EmptyStartingHand,

    #[error("at least 2 players are required, configured minimum is {0}")]
    MinPlayersTooLow(usize),

    #[error("cannot deal {hand_size} cards to {players} players from a {deck_size}-card deck")]
    DeckTooSmall {
        hand_size: usize,
        players: usize,
        deck_size: usize,
    },
}

/// Failure to encode or decode a state snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot holds an invalid state: {0}")]
    Invalid(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(GameError::NotYourTurn.to_string(), "Not your turn!");
        assert_eq!(GameError::DeckEmpty.to_string(), "Deck is empty!");
        assert_eq!(
            GameError::CardNotInHand(Card::new(Color::Red, 3)).to_string(),
            "You don't have this card!"
        );
        assert_eq!(
            GameError::CardMismatch {
                card: Card::new(Color::Red, 3),
                top: Card::new(Color::Blue, 4),
            }
            .to_string(),
            "Card doesn't match the last card on the pile!"
        );
    }

    #[test]
    fn test_invariant_messages() {
        let err = InvariantViolation::CardCount { expected: 36, found: 35 };
        assert_eq!(
            err.to_string(),
            "expected 36 cards across hands, deck and pile, found 35"
        );

        let err = InvariantViolation::CardMultiplicity {
            card: Card::new(Color::Green, 9),
            expected: 1,
            found: 2,
        };
        assert_eq!(err.to_string(), "card G9 appears 2 times, expected 1");
    }
}
