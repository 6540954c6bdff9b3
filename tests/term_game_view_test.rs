use arcade_tetris::core::{ActivePiece, Board, EngineConfig, GameState};
use arcade_tetris::term::{encode_diff_into, AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use arcade_tetris::types::PieceKind;

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::default().snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // cell_w=2, cell_h=1: 20x20 playfield plus border => 22x22, no room for the panel.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::default();
    board.set(0, 19, Some(PieceKind::Z));
    let state = GameState::from_position(
        EngineConfig::default(),
        board,
        Some(ActivePiece::at(PieceKind::O, 4, 0)),
        0,
    )
    .unwrap();
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border the origin is (1, 1); each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(0xf0, 0x00, 0x00));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut state = GameState::default();
    state.toggle_pause();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&state.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));

    let over = GameState::from_position(
        EngineConfig::default(),
        Board::from_ascii(10, 20, &["IIIIIIIIII"]),
        None,
        0,
    )
    .unwrap();
    let fb = view.render(&over.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("Enter: restart"));
}

#[test]
fn moving_the_piece_redraws_only_a_few_runs() {
    let mut state = GameState::default();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let mut before = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), vp, &mut before);
    state.move_left();
    let mut after = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), vp, &mut after);

    let mut out = Vec::new();
    encode_diff_into(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());

    let mut same = Vec::new();
    encode_diff_into(&after, &after.clone(), &mut same).unwrap();
    assert!(same.is_empty());
}
