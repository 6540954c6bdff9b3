//! Board tests - storage, merging and row clearing

use arcade_tetris::core::catalog::base_shape;
use arcade_tetris::core::Board;
use arcade_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(6, 4);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(6, 0), None);
    assert_eq!(board.get(0, 4), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(board.is_empty_at(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i16, Some(PieceKind::T)));
}

#[test]
fn test_merge_skips_rows_above_the_board() {
    let mut board = Board::default();
    // Bottom row of an O at y = -1 lands on row 0; the top row is dropped.
    let merged = board.merge(&base_shape(PieceKind::O), 4, -1, PieceKind::O);
    assert_eq!(merged, 2);
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_single_line_shifts_rows_down() {
    let mut board = Board::from_ascii(
        4,
        4,
        &[
            "....", //
            "..T.", //
            "Z...", //
            "IIII", //
        ],
    );
    assert_eq!(board.full_row_count(), 1);
    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.to_ascii(), vec!["....", "....", "..T.", "Z..."]);
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let mut board = Board::from_ascii(
        4,
        5,
        &[
            "J...", //
            "OOOO", //
            ".S..", //
            "LLLL", //
            "..Z.", //
        ],
    );
    let before = board.occupied_count();
    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.occupied_count(), before - 2 * 4);
    assert_eq!(board.to_ascii(), vec!["....", "....", "J...", ".S..", "..Z."]);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::default();
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::I));
        }
    }
    board.set(3, 15, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_nothing_is_a_no_op() {
    let mut board = Board::from_ascii(3, 2, &["I.I", ".I."]);
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_ascii_round_trip_keeps_kinds() {
    let rows = ["IJLOSTZ...", "..........", "Z........T"];
    let board = Board::from_ascii(10, 3, &rows);
    assert_eq!(board.to_ascii(), rows);
}
