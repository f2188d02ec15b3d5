//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on rendering, input or I/O, making it:
//!
//! - **Deterministic**: the same seed and call sequence produce the same game
//! - **Testable**: every rule is covered by unit tests next to the code
//! - **Fast**: fixed arrays on the hot paths, no allocation per tick
//!
//! # Module Structure
//!
//! - [`catalog`]: shape tables and wall kick offsets
//! - [`rng`]: 7-bag random piece generation
//! - [`piece`]: active piece geometry
//! - [`board`]: 10x20 grid with collision detection and line clearing
//! - [`scoring`]: line clear points, drop points, levels and gravity speed
//! - [`engine`]: spawn/fall/lock/hold lifecycle
//! - [`snapshot`]: copyable per-frame view for frontends
//!
//! # Example
//!
//! ```
//! use tetrad_core::Engine;
//! use tetrad_types::GameAction;
//!
//! let mut game = Engine::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! [`Engine::tick`] takes elapsed seconds. Gravity starts at 0.55 s per row
//! and speeds up 0.05 s per level down to 0.10 s.

pub mod board;
pub mod catalog;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetrad_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{kicks, offsets};
pub use engine::{Engine, LockEvent};
pub use piece::{Piece, PieceCells};
pub use rng::{RandomBag, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
