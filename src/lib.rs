//! Tetrad: a falling-block puzzle game for the terminal.
//!
//! This package is the application layer. The engine, input handling and
//! rendering live in dedicated crates under `crates/` and are re-exported here
//! so tests and tools can use a single `tetrad::{core,input,term,types}` path.

pub mod app;
pub mod config;
pub mod journal;
pub mod scores;

pub use tetrad_core as core;
pub use tetrad_input as input;
pub use tetrad_term as term;
pub use tetrad_types as types;
