//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and [`TerminalRenderer`] flushes the framebuffer to the
//! terminal, writing only the cells that changed.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: the play screen (well, pieces, side panel, overlays)
//! - [`screens`]: menu, controls, score tables and initials entry
//! - [`renderer`]: diffing terminal output

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use tetrad_core as core;
pub use tetrad_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::ScoreLine;
