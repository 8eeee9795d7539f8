use crate::pieces::Piece;
use crate::types::{Cell, GameStatus, PieceKind, BASE_TICK_INTERVAL_NS, BOARD_HEIGHT, BOARD_WIDTH, MIN_LEVEL};

/// Copy of everything a renderer needs from one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Piece,
    pub next: Piece,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub tick_interval_ns: u64,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Cell as painted: the current piece drawn over the landed pile.
    ///
    /// Returns `None` for coordinates outside the board.
    pub fn painted_cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        let landed = self.board[y as usize][x as usize];
        let piece = self
            .current
            .cell_at(x - self.current.x(), y - self.current.y());
        Some(piece.or(landed))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: Piece::new(PieceKind::I),
            next: Piece::new(PieceKind::I),
            score: 0,
            level: MIN_LEVEL,
            lines: 0,
            tick_interval_ns: BASE_TICK_INTERVAL_NS,
            status: GameStatus::Running,
        }
    }
}
