//! Game state module - one play session
//!
//! Ties together the landed pile, the current and queued pieces, the piece
//! generator and the score/level bookkeeping. The driver calls
//! [`GameState::tick`] at the cadence given by [`GameState::tick_interval`]
//! and [`GameState::apply_command`] once per input event. Both must be
//! serialized by the caller; nothing here is internally synchronized.

use std::time::Duration;

use log::{debug, info};

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::{draw_kind, PieceRng, SimpleRng};
use crate::scoring::{level_for_score, line_clear_points, tick_interval_ns};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What the most recent tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvent {
    /// The current piece was written into the pile.
    pub locked: bool,
    /// Rows removed at the start of the tick.
    pub lines_cleared: u32,
    /// Points awarded for those rows.
    pub points: u32,
    /// The level went up.
    pub level_changed: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    current: Piece,
    next: Piece,
    status: GameStatus,
    score: u32,
    level: u32,
    /// Rows cleared this game.
    lines: u32,
    tick_interval_ns: u64,
    /// Ticks processed this game.
    ticks: u64,
    last_event: Option<TickEvent>,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a running game on a seeded generator
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: PieceRng> GameState<R> {
    /// Create a running game drawing pieces from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let current = Piece::new(draw_kind(&mut rng));
        let next = Piece::new(draw_kind(&mut rng));
        Self::from_parts(Board::new(), current, next, rng)
    }

    /// Create a running game from an arbitrary position.
    ///
    /// Score and level start from zero regardless of the board contents.
    pub fn from_parts(board: Board, current: Piece, next: Piece, rng: R) -> Self {
        Self {
            board,
            current,
            next,
            status: GameStatus::Running,
            score: 0,
            level: MIN_LEVEL,
            lines: 0,
            tick_interval_ns: BASE_TICK_INTERVAL_NS,
            ticks: 0,
            last_event: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> u8 {
        self.board.height()
    }

    pub fn columns(&self) -> u8 {
        self.board.width()
    }

    /// Landed cell at (x, y); `None` outside the board.
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        self.board.get(x, y)
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_interval_ns(&self) -> u64 {
        self.tick_interval_ns
    }

    /// How long the driver should wait between ticks at the current level.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(self.tick_interval_ns)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn last_event(&self) -> Option<TickEvent> {
        self.last_event
    }

    /// Take and clear the last tick event.
    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.last_event.take()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Whether the current piece would collide at anchor (x, y) and `rotation`.
    ///
    /// This is the only legality check: movement commands and lock detection
    /// both go through it.
    pub fn collision(&self, x: i8, y: i8, rotation: u8) -> bool {
        self.board.collides(self.current.kind(), x, y, rotation)
    }

    /// Advance the game by one step. Does nothing once the game is over.
    ///
    /// Order within a tick: clear filled rows and score them, then lock the
    /// current piece if it cannot descend (ending the game when it locks near
    /// the top, otherwise promoting the queued piece), then move the current
    /// piece down one row. A freshly promoted piece therefore gets one row of
    /// descent before it is tested again.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.ticks += 1;

        let mut event = TickEvent::default();
        self.clear_lines(&mut event);

        let next_y = self.current.y().saturating_add(1);
        if next_y >= 0 && self.collision(self.current.x(), next_y, self.current.rotation()) {
            self.lock_current();
            event.locked = true;

            if self.current.y() <= GAME_OVER_ROW {
                self.status = GameStatus::GameOver;
                self.last_event = Some(event);
                info!(
                    "game over after {} ticks: score {}, level {}, lines {}",
                    self.ticks, self.score, self.level, self.lines
                );
                return;
            }

            self.spawn_next();
        }

        self.current.advance();
        self.last_event = Some(event);
    }

    /// Apply one player command against the current position.
    ///
    /// Returns whether the piece moved. Colliding commands, and any command
    /// after game over, are ignored.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.is_game_over() {
            return false;
        }

        let (x, y, rotation) = (self.current.x(), self.current.y(), self.current.rotation());
        let (x, y, rotation) = match command {
            Command::MoveLeft => (x - 1, y, rotation),
            Command::MoveRight => (x + 1, y, rotation),
            Command::Rotate => (x, y, rotation.wrapping_add(1)),
            Command::SoftDrop => (x, y + 1, rotation),
        };
        if self.collision(x, y, rotation) {
            return false;
        }

        match command {
            Command::MoveLeft => self.current.move_left(),
            Command::MoveRight => self.current.move_right(),
            Command::Rotate => self.current.rotate(),
            Command::SoftDrop => self.current.advance(),
        }
        true
    }

    /// Reset to a fresh running game with two new pieces.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.current = Piece::new(draw_kind(&mut self.rng));
        self.next = Piece::new(draw_kind(&mut self.rng));
        self.status = GameStatus::Running;
        self.score = 0;
        self.level = MIN_LEVEL;
        self.lines = 0;
        self.tick_interval_ns = BASE_TICK_INTERVAL_NS;
        self.ticks = 0;
        self.last_event = None;
        debug!(
            "new game: current {}, next {}",
            self.current.kind().letter(),
            self.next.kind().letter()
        );
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.current = self.current;
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.tick_interval_ns = self.tick_interval_ns;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Clear filled rows, then award points and recompute level and interval.
    fn clear_lines(&mut self, event: &mut TickEvent) {
        let cleared = self.board.clear_filled_rows().len();
        if cleared > 0 {
            let points = line_clear_points(cleared);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared as u32);
            event.lines_cleared = cleared as u32;
            event.points = points;
            info!("cleared {} line(s) for {} points, score {}", cleared, points, self.score);
        }

        let level = level_for_score(self.score).max(self.level);
        if level != self.level {
            info!("level {} reached at score {}", level, self.score);
            event.level_changed = true;
        }
        self.level = level;
        self.tick_interval_ns = tick_interval_ns(level);
    }

    /// Write the current piece into the pile. A piece whose anchor is still
    /// above the board is not written at all.
    fn lock_current(&mut self) {
        let written = if self.current.y() >= 0 {
            self.board.lock_piece(&self.current)
        } else {
            0
        };
        debug!(
            "locked {} at ({}, {}) rotation {}: {} cell(s) written",
            self.current.kind().letter(),
            self.current.x(),
            self.current.y(),
            self.current.rotation() % 4,
            written
        );
    }

    /// Promote the queued piece to the spawn point and queue a new one.
    fn spawn_next(&mut self) {
        self.current = Piece::new(self.next.kind());
        self.next = Piece::new(draw_kind(&mut self.rng));
    }
}
