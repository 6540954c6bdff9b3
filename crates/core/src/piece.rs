//! Piece controller - the active falling piece
//!
//! Owns the current shape and anchor of one piece for its whole life. Every
//! request goes through the collision oracle first and is committed only when
//! the proposed placement is legal; otherwise the piece is left untouched. The
//! controller reads the board but never writes to it.

use crate::board::Board;
use crate::catalog::{self, base_shape};
use crate::collision::is_valid_placement;
use crate::shape::{Shape, ShapeCells};
use crate::types::{PieceColor, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's top-left corner
    pub x: i8,
    /// Row of the shape's top-left corner; may be negative above the board
    pub y: i8,
}

/// Spawn anchor for a board of the given width: (`width / 2 - 1`, 0)
pub fn spawn_anchor(board_width: u8) -> (i8, i8) {
    ((board_width / 2) as i8 - 1, 0)
}

impl ActivePiece {
    /// Create a piece with its base shape at the spawn anchor
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let (x, y) = spawn_anchor(board_width);
        Self::at(kind, x, y)
    }

    /// Create a piece with its base shape at an explicit anchor
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x,
            y,
        }
    }

    pub fn color(&self) -> PieceColor {
        catalog::color(self.kind)
    }

    /// Check if the current placement is legal
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid_placement(board, &self.shape, self.x, self.y)
    }

    /// Absolute board coordinates of every occupied cell (may include y < 0)
    pub fn cells(&self) -> ShapeCells {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Try to shift one column left (`dx = -1`) or right (`dx = 1`)
    ///
    /// Returns `false` and leaves the piece alone when blocked.
    pub fn move_horizontal(&mut self, board: &Board, dx: i8) -> bool {
        self.try_place(board, self.shape, self.x.saturating_add(dx), self.y)
    }

    /// Try to rotate 90° clockwise in place
    ///
    /// The rotated shape keeps the same anchor. If it does not fit there the
    /// rotation is discarded; no alternative offsets are tried.
    pub fn rotate(&mut self, board: &Board) -> bool {
        self.try_place(board, self.shape.rotated_cw(), self.x, self.y)
    }

    /// Try to fall one row
    ///
    /// `false` means the piece cannot descend and should be locked.
    pub fn soft_drop(&mut self, board: &Board) -> bool {
        self.try_place(board, self.shape, self.x, self.y.saturating_add(1))
    }

    fn try_place(&mut self, board: &Board, shape: Shape, x: i8, y: i8) -> bool {
        if !is_valid_placement(board, &shape, x, y) {
            return false;
        }
        self.shape = shape;
        self.x = x;
        self.y = y;
        true
    }
}
