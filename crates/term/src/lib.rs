//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. Snapshots are drawn into a plain
//! framebuffer (no widget toolkit), which is then diffed against the previous
//! frame and flushed to the terminal.
//!
//! Board cells are drawn 2 columns wide by default to compensate for the
//! aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use arcade_tetris_core as core;
pub use arcade_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
