//! The shedding game: join, start, play, draw.
//!
//! State machine: `Initialized -> InProgress -> Over`.
//!
//! - **join**: lobby only; appends a player with an empty hand
//! - **start**: deals hands and the opening discard, picks a random
//!   first seat
//! - **play**: turn holder puts a matching card on the pile; an empty
//!   hand wins, otherwise the turn passes
//! - **draw**: the deck head goes to the turn holder and the turn passes
//!
//! Every operation checks its guards (see `checks`) before mutating.

use tracing::{debug, info, instrument};

use super::checks::{check_draw, check_join, check_play, check_start};
use super::engine::{GameResult, RulesEngine};
use crate::cards::{deal, draw_one, shuffled_deck, Card};
use crate::core::{Action, ActionRecord, GameConfig, GameRng, GameState, GameStatus, Hand, Player, Seat, UserId};
use crate::error::{ConfigError, GameError, Response};

/// Rules for the shedding game.
///
/// ## Example
///
/// ```
/// use shedding_engine::core::{GameStatus, UserId};
/// use shedding_engine::rules::SheddingGame;
///
/// let game = SheddingGame::default();
/// let mut state = game.initialize(42);
///
/// let alice = UserId::from("alice");
/// let bob = UserId::from("bob");
/// game.join(&mut state, &alice).unwrap();
/// game.join(&mut state, &bob).unwrap();
/// game.start(&mut state, &alice).unwrap();
///
/// assert_eq!(state.status(), GameStatus::InProgress);
/// assert_eq!(state.players()[0].hand.len(), 4);
/// assert_eq!(state.pile().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SheddingGame {
    config: GameConfig,
}

impl SheddingGame {
    /// Create a game with a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a fresh lobby: full deck shuffled with `seed`, no players.
    #[instrument(skip(self))]
    pub fn initialize(&self, seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);
        let deck = shuffled_deck(&mut rng);
        debug!(cards = deck.len(), "initialized lobby");
        GameState::new(deck, rng)
    }

    /// Add `user` to the lobby. Join order is turn order.
    #[instrument(skip_all, fields(user = %user))]
    pub fn join(&self, state: &mut GameState, user: &UserId) -> Response {
        check_join(state, user).inspect_err(|err| debug!(%err, "join rejected"))?;

        state.players.push(Player::new(user.clone()));
        record(state, user, Action::Join);
        debug!(players = state.player_count(), "player joined");
        Ok(())
    }

    /// Deal hands and the opening discard, then pick the first seat.
    #[instrument(skip_all, fields(user = %user))]
    pub fn start(&self, state: &mut GameState, user: &UserId) -> Response {
        check_start(&self.config, state).inspect_err(|err| debug!(%err, "start rejected"))?;

        let player_count = state.player_count();
        let mut hands: Vec<&mut Hand> = state.players.iter_mut().map(|p| &mut p.hand).collect();
        if !deal(&mut state.deck, &mut state.pile, &mut hands, self.config.starting_hand_size) {
            return Err(GameError::TooManyPlayers);
        }

        let first = Seat::new(state.rng.gen_range_usize(0..player_count) as u8);
        state.turn = Some(first);
        state.status = GameStatus::InProgress;
        record(state, user, Action::Start);

        info!(
            players = player_count,
            first = %first,
            top = ?state.top_of_pile(),
            "game started"
        );
        Ok(())
    }

    /// Play `card` from the turn holder's hand onto the pile.
    #[instrument(skip_all, fields(user = %user, card = %card))]
    pub fn play(&self, state: &mut GameState, user: &UserId, card: Card) -> Response {
        let seat = check_play(state, user, &card).inspect_err(|err| debug!(%err, "play rejected"))?;

        let player = &mut state.players[seat.index()];
        player.remove_card(&card);
        let hand_empty = player.hand.is_empty();
        state.pile.push_front(card);
        record(state, user, Action::Play { card });

        if hand_empty {
            state.winner = Some(user.clone());
            state.status = GameStatus::Over;
            info!("game over");
        } else {
            state.advance_turn();
        }
        Ok(())
    }

    /// Move the deck head into the turn holder's hand.
    #[instrument(skip_all, fields(user = %user))]
    pub fn draw(&self, state: &mut GameState, user: &UserId) -> Response {
        let seat = check_draw(&self.config, state, user).inspect_err(|err| debug!(%err, "draw rejected"))?;

        let card = draw_one(&mut state.deck).ok_or(GameError::DeckEmpty)?;
        state.players[seat.index()].hand.push(card);
        record(state, user, Action::Draw);
        state.advance_turn();

        debug!(remaining = state.deck().len(), "card drawn");
        Ok(())
    }
}

/// Append a successful action to the history.
fn record(state: &mut GameState, user: &UserId, action: Action) {
    let sequence = state.history.len() as u32;
    state
        .history
        .push_back(ActionRecord::new(user.clone(), action, sequence));
}

impl RulesEngine for SheddingGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initialize(&self, seed: u64) -> GameState {
        SheddingGame::initialize(self, seed)
    }

    fn apply_action(&self, state: &mut GameState, user: &UserId, action: &Action) -> Response {
        match *action {
            Action::Join => self.join(state, user),
            Action::Start => self.start(state, user),
            Action::Play { card } => self.play(state, user, card),
            Action::Draw => self.draw(state, user),
        }
    }

    fn legal_actions(&self, state: &GameState, user: &UserId) -> Vec<Action> {
        let mut actions = Vec::new();

        if check_join(state, user).is_ok() {
            actions.push(Action::Join);
        }
        if check_start(&self.config, state).is_ok() {
            actions.push(Action::Start);
        }

        if let Some(player) = state.player(user) {
            let mut cards: Vec<Card> = player.hand.iter().copied().collect();
            cards.sort();
            cards.dedup();
            actions.extend(
                cards
                    .into_iter()
                    .filter(|card| check_play(state, user, card).is_ok())
                    .map(|card| Action::Play { card }),
            );
        }

        if check_draw(&self.config, state, user).is_ok() {
            actions.push(Action::Draw);
        }

        actions
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match (state.status(), state.winner()) {
            (GameStatus::Over, Some(winner)) => Some(GameResult {
                winner: winner.clone(),
            }),
            _ => None,
        }
    }
}
