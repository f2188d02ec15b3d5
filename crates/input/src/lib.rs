//! Terminal input for the game.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides a
//! DAS/ARR input handler that also works on terminals without key-release
//! events.

pub mod handler;
pub mod map;

pub use tetrad_types as types;

pub use handler::{InputHandler, RepeatActions};
pub use map::{handle_key_event, should_quit};
