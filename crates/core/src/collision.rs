//! Collision oracle - pure placement checks against the board
//!
//! A placement is legal when every occupied shape cell lands inside the side
//! walls, above the floor, and (when on the board) on an empty cell. Cells
//! above the top edge only have to respect the side walls, which lets a piece
//! spawn partially above the visible board.

use crate::board::Board;
use crate::shape::Shape;

/// Check whether `shape` anchored at (`x`, `y`) is a legal placement on `board`
///
/// An empty shape is trivially valid.
pub fn is_valid_placement(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.cells().iter().all(|&(dx, dy)| {
        let px = x as i16 + dx as i16;
        let py = y as i16 + dy as i16;
        if !board.contains_column(px) || py >= board.height() as i16 {
            return false;
        }
        py < 0 || board.is_empty_at(px, py)
    })
}
