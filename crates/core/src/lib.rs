//! Core game logic - pure, deterministic, and testable
//!
//! Everything the falling-block game needs to decide what happens next lives
//! here: the board, the piece catalog, collision, the drop/lock/clear state
//! machine, scoring and the randomizer. There is no I/O and no clock in this
//! crate; a host drives it with gravity ticks and commands and reads back
//! [`GameSnapshot`]s.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven tetrominoes with their base shapes and colors
//! - [`shape`]: rectangular occupancy grids and clockwise rotation
//! - [`board`]: the grid of locked cells, merging and full-row clearing
//! - [`collision`]: placement validity of a shape at an anchor
//! - [`piece`]: the active piece and its move / rotate / drop attempts
//! - [`rng`]: seeded piece generation (uniform or 7-bag)
//! - [`scoring`]: line-clear points and the running best
//! - [`clock`]: host-side helper that turns elapsed time into ticks
//! - [`config`]: engine configuration and its validation
//! - [`game_state`]: the state machine tying it all together
//! - [`snapshot`]: owned render-sink view of a game
//!
//! # Example
//!
//! ```
//! use arcade_tetris_core::{EngineConfig, GameState};
//! use arcade_tetris_core::types::Command;
//!
//! let mut game = GameState::new(EngineConfig::default().with_seed(12345), 0).unwrap();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.tick();
//!
//! let snap = game.snapshot();
//! assert!(!snap.game_over);
//! assert_eq!(snap.drop_interval_ms, Some(1000));
//! ```
//!
//! # Timing
//!
//! [`GameState::drop_interval_ms`] tells the host how often to call
//! [`GameState::tick`]; `None` means gravity is suspended (paused or game over).
//! [`DropClock`] does the bookkeeping for hosts that run a frame loop.

pub mod board;
pub mod catalog;
pub mod clock;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use arcade_tetris_types as types;

pub use board::Board;
pub use catalog::{tetromino, Tetromino};
pub use clock::DropClock;
pub use collision::is_valid_placement;
pub use config::{ConfigError, EngineConfig};
pub use game_state::{DropOutcome, GameState, LockEvent, Phase};
pub use piece::ActivePiece;
pub use rng::{PieceGenerator, Randomizer, SimpleRng};
pub use scoring::{line_clear_points, Score};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
