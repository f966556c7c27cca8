//! Card values.
//!
//! A `Card` is a plain value: a color and a number from 1 to 9. Cards
//! carry no identity beyond that, so two Red 7s are interchangeable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in deck order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Single-letter code used by `Card`'s text form.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }
}

/// Lowest card number.
pub const MIN_NUMBER: u8 = 1;
/// Highest card number.
pub const MAX_NUMBER: u8 = 9;

/// A playing card.
///
/// Equality is structural: both color and number must be equal.
/// Use [`Card::matches`] for the looser stacking rule.
///
/// ## Example
///
/// ```
/// use shedding_engine::cards::{Card, Color};
///
/// let red_seven = Card::new(Color::Red, 7);
/// let blue_seven: Card = "B7".parse().unwrap();
///
/// assert_ne!(red_seven, blue_seven);
/// assert!(red_seven.matches(&blue_seven));
/// assert_eq!(red_seven.to_string(), "R7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub number: u8,
}

impl Card {
    /// Create a card.
    ///
    /// `number` is expected to be in `1..=9`. Cards outside that range are
    /// never in the deck, so plays with them are rejected as not in hand.
    #[must_use]
    pub const fn new(color: Color, number: u8) -> Self {
        Self { color, number }
    }

    /// Can this card be played on top of `top`? Color or number must match.
    #[must_use]
    pub fn matches(&self, top: &Card) -> bool {
        self.color == top.color || self.number == top.number
    }

    /// Is this card one that exists in the deck?
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&self.number)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.code(), self.number)
    }
}

/// Parse the `R7` / `b3` text form.
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(color_ch), Some(number_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(format!("Card must be a color letter and a digit, got {s:?}"));
        };

        let color = Color::from_code(color_ch).ok_or_else(|| format!("Invalid color: {color_ch}"))?;
        let number = number_ch
            .to_digit(10)
            .map(|d| d as u8)
            .filter(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n))
            .ok_or_else(|| format!("Invalid number: {number_ch}"))?;

        Ok(Card::new(color, number))
    }
}
