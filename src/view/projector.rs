//! Per-player view of a game.
//!
//! `project` is the only way game state reaches a client. A view carries
//! the requester's own hand, the top card of the pile and the deck size.
//! Other hands, deck order and the rest of the pile never leave the engine.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameState, UserId};

/// What one user is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// All player ids in join order.
    pub players: Vec<UserId>,

    /// The requester's own hand; `None` for non-participants.
    pub hand: Option<Vec<Card>>,

    /// The active card, once the game has started.
    pub top_of_pile: Option<Card>,

    /// User holding the turn.
    pub turn: Option<UserId>,

    /// Winner, once the game is over.
    pub winner: Option<UserId>,

    /// Cards left in the deck.
    pub num_cards_in_deck: usize,
}

/// Build `user`'s view of `state`.
///
/// ```
/// use shedding_engine::core::UserId;
/// use shedding_engine::rules::SheddingGame;
/// use shedding_engine::view::project;
///
/// let game = SheddingGame::default();
/// let mut state = game.initialize(1);
/// let alice = UserId::from("alice");
/// game.join(&mut state, &alice).unwrap();
///
/// let view = project(&state, &alice);
/// assert_eq!(view.players, vec![alice.clone()]);
/// assert_eq!(view.hand, Some(vec![]));
/// assert_eq!(view.num_cards_in_deck, 36);
///
/// assert_eq!(project(&state, &UserId::from("eve")).hand, None);
/// ```
#[must_use]
pub fn project(state: &GameState, user: &UserId) -> PlayerView {
    PlayerView {
        players: state.players().iter().map(|p| p.id.clone()).collect(),
        hand: state.player(user).map(|p| p.hand.to_vec()),
        top_of_pile: state.top_of_pile().copied(),
        turn: state.turn_holder().map(|p| p.id.clone()),
        winner: state.winner().cloned(),
        num_cards_in_deck: state.deck().len(),
    }
}
