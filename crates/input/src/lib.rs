//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Key repeat is
//! left to the terminal: every press or repeat event yields one command, and
//! release events are ignored.

pub mod map;

pub use arcade_tetris_types as types;

pub use map::{handle_key_event, should_quit};
