//! Card system: card values and the deck manager.
//!
//! ## Key Types
//!
//! - `Color`: One of four card colors
//! - `Card`: Immutable color + number value
//! - `deck`: Full-deck construction, dealing, drawing, multiset counts

pub mod card;
pub mod deck;

pub use card::{Card, Color, MAX_NUMBER, MIN_NUMBER};
pub use deck::{card_counts, deal, draw_one, full_deck, shuffled_deck, DECK_SIZE};
