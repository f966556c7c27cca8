//! Game state.
//!
//! ## GameState
//!
//! Complete, authoritative state of one game:
//! - Status, join-ordered players and their hands
//! - Deck (draw pile) and pile (discard pile), head at the front
//! - Turn seat and winner
//! - RNG and action history
//!
//! Clients never see this directly; they get a `PlayerView` from
//! `view::project`. The host owns the value and passes it `&mut` into
//! each operation, serializing access per game.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::player::{Player, Seat, UserId};
use super::rng::GameRng;
use crate::cards::{card_counts, full_deck, Card, DECK_SIZE};
use crate::error::{InvariantViolation, SnapshotError};

/// Lifecycle of a game. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Lobby: players may join.
    Initialized,
    /// Cards dealt, turns running.
    InProgress,
    /// Someone emptied their hand. Terminal.
    Over,
}

/// Full game state including private information.
///
/// Uses `im` vectors for the deck, pile and history so clones are cheap
/// for hosts that snapshot state between requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) status: GameStatus,

    /// Players in join order (= turn order).
    pub(crate) players: Vec<Player>,

    /// Draw pile. Front is the next card drawn.
    pub(crate) deck: Vector<Card>,

    /// Discard pile. Front is the active card.
    pub(crate) pile: Vector<Card>,

    pub(crate) turn: Option<Seat>,

    pub(crate) winner: Option<UserId>,

    /// Deterministic RNG for shuffling and picking the first turn.
    pub(crate) rng: GameRng,

    /// Successful actions in order.
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a lobby state around an already-shuffled deck.
    #[must_use]
    pub(crate) fn new(deck: Vector<Card>, rng: GameRng) -> Self {
        Self {
            status: GameStatus::Initialized,
            players: Vec::new(),
            deck,
            pile: Vector::new(),
            turn: None,
            winner: None,
            rng,
            history: Vector::new(),
        }
    }

    // === Status ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[must_use]
    pub fn winner(&self) -> Option<&UserId> {
        self.winner.as_ref()
    }

    // === Players ===

    /// Players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Find a player by user id.
    #[must_use]
    pub fn player(&self, user: &UserId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == user)
    }

    /// Seat of a user, if they joined.
    #[must_use]
    pub fn seat_of(&self, user: &UserId) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| &p.id == user)
            .map(|i| Seat::new(i as u8))
    }

    // === Turn ===

    /// Seat holding the turn. `None` before the game starts.
    #[must_use]
    pub fn turn(&self) -> Option<Seat> {
        self.turn
    }

    /// Player holding the turn.
    #[must_use]
    pub fn turn_holder(&self) -> Option<&Player> {
        self.turn.and_then(|seat| self.players.get(seat.index()))
    }

    /// Pass the turn to the next seat in join order.
    pub(crate) fn advance_turn(&mut self) {
        if let Some(seat) = self.turn {
            self.turn = Some(seat.next(self.players.len()));
        }
    }

    // === Cards ===

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn pile(&self) -> &Vector<Card> {
        &self.pile
    }

    /// The active card new plays must match.
    #[must_use]
    pub fn top_of_pile(&self) -> Option<&Card> {
        self.pile.front()
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Invariants ===

    /// Check every state invariant.
    ///
    /// - Hands, deck and pile together hold exactly one full deck
    /// - No user has two player records
    /// - `turn` is set and in range exactly when the game has started
    /// - `winner` is set exactly when the game is over, and is a player
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let all_cards = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter())
            .chain(self.deck.iter())
            .chain(self.pile.iter());
        let found = card_counts(all_cards);
        let total: usize = found.values().sum();
        if total != DECK_SIZE {
            return Err(InvariantViolation::CardCount {
                expected: DECK_SIZE,
                found: total,
            });
        }

        let expected = card_counts(&full_deck());
        for (card, &count) in &found {
            let want = expected.get(card).copied().unwrap_or(0);
            if count != want {
                return Err(InvariantViolation::CardMultiplicity {
                    card: *card,
                    expected: want,
                    found: count,
                });
            }
        }

        let mut seen = FxHashSet::default();
        for player in &self.players {
            if !seen.insert(&player.id) {
                return Err(InvariantViolation::DuplicatePlayer(player.id.to_string()));
            }
        }

        match (self.status, self.turn) {
            (GameStatus::Initialized, None) => {}
            (GameStatus::InProgress | GameStatus::Over, Some(seat)) => {
                if seat.index() >= self.players.len() {
                    return Err(InvariantViolation::TurnOutOfRange {
                        turn: seat.index(),
                        player_count: self.players.len(),
                    });
                }
            }
            (status, _) => return Err(InvariantViolation::TurnStatusMismatch(status)),
        }

        match (&self.winner, self.status) {
            (Some(winner), GameStatus::Over) => {
                if self.player(winner).is_none() {
                    return Err(InvariantViolation::UnknownWinner(winner.to_string()));
                }
            }
            (None, GameStatus::Initialized | GameStatus::InProgress) => {}
            (_, status) => return Err(InvariantViolation::WinnerStatusMismatch(status)),
        }

        Ok(())
    }

    // === Snapshots ===

    /// Encode the full state, RNG position included.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot made by `to_snapshot`, rejecting invalid states.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.check_invariants()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{shuffled_deck, Color};

    fn lobby(seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);
        let deck = shuffled_deck(&mut rng);
        GameState::new(deck, rng)
    }

    fn started(seed: u64, names: &[&str]) -> GameState {
        let mut state = lobby(seed);
        for name in names {
            state.players.push(Player::new(UserId::from(*name)));
        }
        for player in &mut state.players {
            for _ in 0..4 {
                let card = state.deck.pop_front().unwrap();
                player.hand.push(card);
            }
        }
        let opening = state.deck.pop_front().unwrap();
        state.pile.push_front(opening);
        state.turn = Some(Seat::new(0));
        state.status = GameStatus::InProgress;
        state
    }

    #[test]
    fn test_new_state() {
        let state = lobby(42);

        assert_eq!(state.status(), GameStatus::Initialized);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.deck().len(), DECK_SIZE);
        assert!(state.pile().is_empty());
        assert_eq!(state.turn(), None);
        assert_eq!(state.winner(), None);
        assert_eq!(state.seed(), 42);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_player_lookup() {
        let state = started(1, &["a", "b", "c"]);

        assert_eq!(state.seat_of(&UserId::from("c")), Some(Seat::new(2)));
        assert_eq!(state.seat_of(&UserId::from("z")), None);
        assert_eq!(state.player(&UserId::from("b")).map(|p| p.hand.len()), Some(4));
        assert_eq!(state.turn_holder().map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = started(1, &["a", "b", "c"]);

        state.advance_turn();
        assert_eq!(state.turn(), Some(Seat::new(1)));
        state.advance_turn();
        state.advance_turn();
        assert_eq!(state.turn(), Some(Seat::new(0)));
    }

    #[test]
    fn test_invariants_hold_after_deal() {
        let state = started(5, &["a", "b"]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_invariants_detect_lost_card() {
        let mut state = started(5, &["a", "b"]);
        state.deck.pop_front();

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::CardCount { expected: 36, found: 35 })
        );
    }

    #[test]
    fn test_invariants_detect_duplicated_card() {
        let mut state = started(5, &["a", "b"]);
        let lost = state.deck.pop_front().unwrap();
        let top = *state.top_of_pile().unwrap();
        state.pile.push_front(top);

        assert_ne!(lost, top);
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::CardMultiplicity { card: top, expected: 1, found: 2 })
        );
    }

    #[test]
    fn test_invariants_detect_foreign_card() {
        let mut state = started(5, &["a", "b"]);
        state.deck.pop_front();
        state.deck.push_back(Card::new(Color::Red, 0));

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::CardMultiplicity {
                card: Card::new(Color::Red, 0),
                expected: 0,
                found: 1,
            })
        );
    }

    #[test]
    fn test_invariants_detect_turn_problems() {
        let mut state = started(5, &["a", "b"]);
        state.turn = Some(Seat::new(2));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::TurnOutOfRange { turn: 2, player_count: 2 })
        );

        state.turn = None;
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::TurnStatusMismatch(GameStatus::InProgress))
        );
    }

    #[test]
    fn test_invariants_detect_winner_problems() {
        let mut state = started(5, &["a", "b"]);
        state.winner = Some(UserId::from("a"));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::WinnerStatusMismatch(GameStatus::InProgress))
        );

        state.status = GameStatus::Over;
        assert!(state.check_invariants().is_ok());

        state.winner = Some(UserId::from("nobody"));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::UnknownWinner("nobody".to_string()))
        );
    }

    #[test]
    fn test_invariants_detect_duplicate_player() {
        let mut state = lobby(5);
        state.players.push(Player::new(UserId::from("a")));
        state.players.push(Player::new(UserId::from("a")));

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::DuplicatePlayer("a".to_string()))
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = started(11, &["a", "b", "c"]);
        state.rng.gen_range_usize(0..10);

        let bytes = state.to_snapshot().unwrap();
        let mut restored = GameState::from_snapshot(&bytes).unwrap();

        assert_eq!(restored.players(), state.players());
        assert_eq!(restored.deck(), state.deck());
        assert_eq!(restored.pile(), state.pile());
        assert_eq!(restored.turn(), state.turn());
        assert_eq!(restored.status(), state.status());
        assert_eq!(
            restored.rng.gen_range_usize(0..1_000_000),
            state.rng.gen_range_usize(0..1_000_000)
        );
    }

    #[test]
    fn test_snapshot_rejects_invalid_state() {
        let mut state = started(11, &["a", "b"]);
        state.deck.pop_front();
        let bytes = state.to_snapshot().unwrap();

        assert!(matches!(
            GameState::from_snapshot(&bytes),
            Err(SnapshotError::Invalid(InvariantViolation::CardCount { .. }))
        ));
        assert!(matches!(
            GameState::from_snapshot(&bytes[..4]),
            Err(SnapshotError::Codec(_))
        ));
    }
}
