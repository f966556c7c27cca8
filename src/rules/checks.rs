//! Guard checks for each request.
//!
//! Each check is a pure function of the state. Operations run their check
//! first and only mutate once it passes, so a rejected request never
//! changes anything. Guards run in a fixed order and the first failure
//! wins.

use crate::cards::Card;
use crate::core::{GameConfig, GameState, GameStatus, Seat, UserId};
use crate::error::GameError;

/// Can `user` join the lobby?
pub fn check_join(state: &GameState, user: &UserId) -> Result<(), GameError> {
    if state.player(user).is_some() {
        return Err(GameError::AlreadyJoined);
    }
    if state.status() != GameStatus::Initialized {
        return Err(GameError::AlreadyStarted);
    }
    Ok(())
}

/// Can the game be started?
pub fn check_start(config: &GameConfig, state: &GameState) -> Result<(), GameError> {
    let player_count = state.player_count();

    if player_count < config.min_players {
        return Err(GameError::NotEnoughPlayers);
    }
    match state.status() {
        GameStatus::InProgress => return Err(GameError::AlreadyInProgress),
        GameStatus::Over => return Err(GameError::LobbyClosed),
        GameStatus::Initialized => {}
    }
    if config.cards_needed(player_count) > state.deck().len() || player_count > u8::MAX as usize {
        return Err(GameError::TooManyPlayers);
    }
    Ok(())
}

/// Is the game running? Shared by `play` and `draw`.
fn check_in_progress(state: &GameState) -> Result<Seat, GameError> {
    match state.status() {
        GameStatus::Initialized => Err(GameError::NotStarted),
        GameStatus::Over => Err(GameError::GameOver),
        GameStatus::InProgress => state.turn().ok_or(GameError::NotStarted),
    }
}

fn check_turn(state: &GameState, seat: Seat, user: &UserId) -> Result<(), GameError> {
    match state.players().get(seat.index()) {
        Some(holder) if &holder.id == user => Ok(()),
        _ => Err(GameError::NotYourTurn),
    }
}

/// Can `user` play `card`? Returns the acting seat.
pub fn check_play(state: &GameState, user: &UserId, card: &Card) -> Result<Seat, GameError> {
    let seat = check_in_progress(state)?;
    check_turn(state, seat, user)?;

    let holds = state
        .players()
        .get(seat.index())
        .is_some_and(|player| player.holds(card));
    if !holds {
        return Err(GameError::CardNotInHand(*card));
    }

    if let Some(top) = state.top_of_pile() {
        if !card.matches(top) {
            return Err(GameError::CardMismatch {
                card: *card,
                top: *top,
            });
        }
    }
    Ok(seat)
}

/// Can `user` draw? Returns the seat that receives the card.
///
/// Deck exhaustion is checked before turn ownership, so an empty deck is
/// reported to everyone the same way.
pub fn check_draw(config: &GameConfig, state: &GameState, user: &UserId) -> Result<Seat, GameError> {
    let seat = check_in_progress(state)?;

    if state.deck().is_empty() {
        return Err(GameError::DeckEmpty);
    }
    if config.draw_requires_turn {
        check_turn(state, seat, user)?;
    }
    Ok(seat)
}
