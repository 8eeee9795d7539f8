use tetrad::core::{GameState, Piece};
use tetrad::term::{GameView, Viewport};
use tetrad::types::{GameStatus, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 12 cells * 2 columns + border = 26 wide, 18 rows + border = 20 high.
    // The panel does not fit, so the well starts at the left edge.
    let fb = view.render(&snap, Viewport::new(26, 20));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 19).unwrap().ch, '└');
    assert_eq!(fb.get(25, 19).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_landed_cell_two_columns_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[17][0] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, Viewport::new(26, 20));

    // Inside the border the origin is (1, 1).
    assert_eq!(fb.get(1, 18).unwrap().ch, '█');
    assert_eq!(fb.get(2, 18).unwrap().ch, '█');
    assert_eq!(fb.get(3, 18).unwrap().ch, '·');
}

#[test]
fn term_view_cell_width_is_configurable() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[17][1] = Some(PieceKind::O);

    let fb = GameView::new(3).render(&snap, Viewport::new(38, 20));

    assert_eq!(fb.get(37, 0).unwrap().ch, '┐');
    for x in 4..7 {
        assert_eq!(fb.get(x, 18).unwrap().ch, '█');
    }
    assert_eq!(fb.get(7, 18).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.next = Piece::new(PieceKind::T);

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    for text in ["NEXT", "SCORE", "1234", "LEVEL", "LINES", "10", "new game", "quit"] {
        assert!(fb.contains_text(text), "missing {:?}", text);
    }
}

#[test]
fn term_view_shows_game_over() {
    let mut snap = GameState::new(1).snapshot();
    assert!(!GameView::default().render(&snap, Viewport::new(80, 24)).contains_text("GAME OVER"));

    snap.status = GameStatus::GameOver;
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(fb.contains_text("GAME OVER"));
}
