//! Tetromino catalog - the seven piece definitions
//!
//! Process-wide constant data: every kind has a base (spawn) shape and a display
//! color. Nothing in here is ever mutated.

use crate::shape::Shape;
use crate::types::{PieceColor, PieceKind};

/// Immutable definition of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
}

const EMPTY_ROW: [u8; 4] = [0; 4];

/// All definitions, in [`PieceKind::ALL`] order.
pub const CATALOG: [Tetromino; 7] = [
    // ####
    Tetromino {
        kind: PieceKind::I,
        shape: Shape::from_grid(1, 4, [[1, 1, 1, 1], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0x00, 0xf0, 0xf0),
    },
    // #..
    // ###
    Tetromino {
        kind: PieceKind::J,
        shape: Shape::from_grid(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0x00, 0x00, 0xf0),
    },
    // ..#
    // ###
    Tetromino {
        kind: PieceKind::L,
        shape: Shape::from_grid(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0xf0, 0xa0, 0x00),
    },
    // ##
    // ##
    Tetromino {
        kind: PieceKind::O,
        shape: Shape::from_grid(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0xf0, 0xf0, 0x00),
    },
    // .##
    // ##.
    Tetromino {
        kind: PieceKind::S,
        shape: Shape::from_grid(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0x00, 0xf0, 0x00),
    },
    // .#.
    // ###
    Tetromino {
        kind: PieceKind::T,
        shape: Shape::from_grid(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0xa0, 0x00, 0xf0),
    },
    // ##.
    // .##
    Tetromino {
        kind: PieceKind::Z,
        shape: Shape::from_grid(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::new(0xf0, 0x00, 0x00),
    },
];

/// Look up the definition of a kind
pub fn tetromino(kind: PieceKind) -> &'static Tetromino {
    let idx = match kind {
        PieceKind::I => 0,
        PieceKind::J => 1,
        PieceKind::L => 2,
        PieceKind::O => 3,
        PieceKind::S => 4,
        PieceKind::T => 5,
        PieceKind::Z => 6,
    };
    &CATALOG[idx]
}

/// Spawn shape for a kind
pub fn base_shape(kind: PieceKind) -> Shape {
    tetromino(kind).shape
}

pub fn color(kind: PieceKind) -> PieceColor {
    tetromino(kind).color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_piece_kind_all() {
        for (def, kind) in CATALOG.iter().zip(PieceKind::ALL) {
            assert_eq!(def.kind, kind);
            assert_eq!(tetromino(kind).kind, kind);
        }
    }

    #[test]
    fn every_piece_has_four_cells() {
        for def in &CATALOG {
            assert_eq!(def.shape.occupied_count(), 4, "{:?}", def.kind);
        }
    }

    #[test]
    fn bar_is_horizontal_and_square_is_square() {
        let i = base_shape(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));
        let o = base_shape(PieceKind::O);
        assert_eq!((o.rows(), o.cols()), (2, 2));
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn colors_match_classic_palette() {
        assert_eq!(color(PieceKind::I).hex(), "#00f0f0");
        assert_eq!(color(PieceKind::T).hex(), "#a000f0");
        assert_eq!(color(PieceKind::Z).hex(), "#f00000");
    }
}
