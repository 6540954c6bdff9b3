//! Arcade Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benches share one import path. Best-score
//! persistence lives here because only the host binary touches the filesystem.

pub mod best_score;

pub use arcade_tetris_core as core;
pub use arcade_tetris_input as input;
pub use arcade_tetris_term as term;
pub use arcade_tetris_types as types;
