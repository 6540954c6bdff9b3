//! Render-sink snapshot of the game
//!
//! A snapshot is an owned copy of everything a renderer needs. It never aliases
//! engine state, so a host can hold on to the last frame while the engine keeps
//! mutating. `GameState::snapshot_into` refills an existing snapshot and reuses
//! its buffers.

use serde::Serialize;

use crate::shape::ShapeCells;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute (x, y) of every occupied cell, including any above the board
    pub cells: ShapeCells,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells only, row-major
    pub board: Vec<Cell>,
    /// Locked cells with the active piece drawn over them, row-major
    pub display: Vec<Cell>,
    /// `None` once the game is over
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub best_score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
    /// Interval the host should tick at; `None` while gravity is suspended
    pub drop_interval_ms: Option<u32>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        Some(y * self.width as usize + x)
    }

    /// Locked cell at (x, y); `None` if out of bounds
    pub fn board_cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.board.get(i).copied())
    }

    /// Cell as it should be drawn (active piece included); `None` if out of bounds
    pub fn display_cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.display.get(i).copied())
    }

    /// Display rows as text, `.` for empty, piece letters otherwise
    pub fn display_ascii(&self) -> Vec<String> {
        self.display
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|c| c.map_or('.', |k| k.letter())).collect())
            .collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            display: Vec::new(),
            active: None,
            score: 0,
            best_score: 0,
            lines: 0,
            paused: false,
            game_over: false,
            drop_interval_ms: None,
        }
    }
}
