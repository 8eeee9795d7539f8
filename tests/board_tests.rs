//! Board tests - grid access, collision and line clearing

use tetrad::core::{Board, Piece};
use tetrad::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (12, 18));

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(board.is_out_of_bounds(12, 17));
    assert!(!board.is_out_of_bounds(11, 17));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 1);

    assert!(board.set(5, 10, None));
    assert!(board.is_empty());
}

#[test]
fn test_collision_against_walls() {
    let board = Board::new();
    // O occupies local columns 1..=2 and rows 1..=2.
    assert!(!board.collides(PieceKind::O, -1, 0, 0));
    assert!(board.collides(PieceKind::O, -2, 0, 0));
    assert!(!board.collides(PieceKind::O, 9, 0, 0));
    assert!(board.collides(PieceKind::O, 10, 0, 0));
    assert!(!board.collides(PieceKind::O, 4, 15, 0));
    assert!(board.collides(PieceKind::O, 4, 16, 0));
}

#[test]
fn test_collision_above_board() {
    let board = Board::new();
    // Row 0 of the O box is empty, so anchor row -1 is still legal.
    assert!(!board.collides(PieceKind::O, 4, -1, 0));
    assert!(board.collides(PieceKind::O, 4, -2, 0));
    assert!(board.collides(PieceKind::T, 4, -3, 0));
}

#[test]
fn test_collision_with_pile() {
    let mut board = Board::new();
    board.set(5, 9, Some(PieceKind::L));
    // T rotation 0 covers local (1,0) (0,1) (1,1) (2,1).
    assert!(board.collides(PieceKind::T, 4, 9, 0));
    assert!(board.collides(PieceKind::T, 4, 8, 0));
    assert!(!board.collides(PieceKind::T, 4, 7, 0));
    assert!(!board.collides(PieceKind::T, 6, 8, 0));
}

#[test]
fn test_clear_single_line() {
    let mut board = Board::new();
    board.fill_row_except(17, PieceKind::I, &[]);
    board.set(3, 16, Some(PieceKind::T));

    let cleared = board.clear_filled_rows();

    assert_eq!(cleared.len(), 1);
    assert_eq!(board.get(3, 17), Some(Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_tetris() {
    let mut board = Board::new();
    for y in 14..18 {
        board.fill_row_except(y, PieceKind::I, &[]);
    }
    board.fill_row_except(13, PieceKind::S, &[6]);

    let cleared = board.clear_filled_rows();

    assert_eq!(cleared.len(), 4);
    assert_eq!(board.occupied_count(), 11);
    assert_eq!(board.get(6, 17), Some(None));
    assert_eq!(board.get(0, 17), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_top_row() {
    let mut board = Board::new();
    board.fill_row_except(0, PieceKind::J, &[]);
    let cleared = board.clear_filled_rows();
    assert_eq!(cleared.as_slice(), &[0]);
    assert!(board.is_empty());
}

#[test]
fn test_no_full_rows() {
    let mut board = Board::new();
    board.fill_row_except(17, PieceKind::I, &[11]);
    assert!(board.clear_filled_rows().is_empty());
    assert_eq!(board.occupied_count(), 11);
}

#[test]
fn test_lock_piece_writes_kind() {
    let mut board = Board::new();
    let piece = Piece::with_anchor(PieceKind::S, 0, 15);
    assert_eq!(board.lock_piece(&piece), 4);
    for (x, y) in [(1, 15), (1, 16), (2, 16), (2, 17)] {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::S)));
    }
}

#[test]
fn test_write_grid_and_rows() {
    let mut board = Board::new();
    board.set(2, 3, Some(PieceKind::Z));
    let mut grid = [[None; 12]; 18];
    board.write_grid(&mut grid);
    assert_eq!(grid[3][2], Some(PieceKind::Z));
    assert_eq!(board.row(3).map(|r| r[2]), Some(Some(PieceKind::Z)));
    assert!(board.row(18).is_none());
    assert_eq!(board.cells().len(), 216);

    board.clear();
    assert!(board.is_empty());
}
