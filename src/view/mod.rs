//! Client-facing projection of game state.
//!
//! - `PlayerView`: the restricted subset of state one user may see
//! - `project`: build a view for a user (pure, repeatable)

pub mod projector;

pub use projector::{project, PlayerView};
