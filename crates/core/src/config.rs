//! Engine configuration and its validation
//!
//! A bad configuration is a programming or setup error, so it is rejected once,
//! up front, when the game is constructed. Nothing at play time can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::base_shape;
use crate::piece::spawn_anchor;
use crate::rng::Randomizer;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DROP_MS};

/// Largest accepted board edge; anchors are stored as `i8`.
pub const MAX_BOARD_EDGE: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },
    #[error("board dimensions must not exceed {max}x{max}, got {width}x{height}")]
    BoardTooLarge { width: u8, height: u8, max: u8 },
    #[error("piece {kind:?} does not fit at the spawn position of a {width}x{height} board")]
    PieceDoesNotFit { kind: PieceKind, width: u8, height: u8 },
    #[error("initial drop interval must be positive")]
    ZeroDropInterval,
    #[error("piece catalog is empty")]
    EmptyCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    /// Gravity interval at start and after every reset
    pub initial_drop_ms: u32,
    pub randomizer: Randomizer,
    pub seed: u32,
    /// Kinds the randomizer may spawn
    pub pieces: Vec<PieceKind>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_drop_ms: INITIAL_DROP_MS,
            randomizer: Randomizer::Uniform,
            seed: 1,
            pieces: PieceKind::ALL.to_vec(),
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    pub fn with_pieces(mut self, pieces: &[PieceKind]) -> Self {
        self.pieces = pieces.to_vec();
        self
    }

    pub fn with_initial_drop_ms(mut self, ms: u32) -> Self {
        self.initial_drop_ms = ms;
        self
    }

    /// Check every precondition the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if width > MAX_BOARD_EDGE || height > MAX_BOARD_EDGE {
            return Err(ConfigError::BoardTooLarge {
                width,
                height,
                max: MAX_BOARD_EDGE,
            });
        }
        if self.initial_drop_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.pieces.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let (spawn_x, _) = spawn_anchor(width);
        for &kind in &self.pieces {
            let shape = base_shape(kind);
            let fits = spawn_x >= 0
                && spawn_x as i16 + shape.cols() as i16 <= width as i16
                && shape.rows() <= height;
            if !fits {
                return Err(ConfigError::PieceDoesNotFit {
                    kind,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}
