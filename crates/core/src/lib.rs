//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the landed pile,
//! the seven tetrominoes and their rotations, piece selection, scoring and
//! the per-tick state machine. It has no dependencies on terminals or I/O;
//! the only side channel is the `log` facade.
//!
//! # Module Structure
//!
//! - [`board`]: 12x18 pile with collision testing and line clearing
//! - [`game_state`]: one play session (current and queued piece, score, level, status)
//! - [`pieces`]: tetromino bitmaps and the index-remapping rotation
//! - [`rng`]: injectable uniform piece selection
//! - [`scoring`]: line-clear points, level thresholds and tick intervals
//! - [`snapshot`]: a copyable view of a session for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn with their 4x4 box anchored at column 4, three rows above the board.
//! - Every tick clears filled rows, then locks the piece if it cannot descend,
//!   then moves the current piece down one row.
//! - Rotation is a fixed index remapping of the piece's 4x4 box with no wall kicks.
//! - Locking while the piece anchor is on row 1 or above ends the game.
//! - 1/2/3/4 rows cleared in one tick score 100/300/500/800.
//! - Levels 2..5 start at 1500/3000/4500/6000 points, each shortening the tick
//!   interval by 100ms from 500ms.
//!
//! # Example
//!
//! ```
//! use tetrad_core::types::{Command, PieceKind};
//! use tetrad_core::{GameState, ScriptedRng};
//!
//! let mut game = GameState::with_rng(ScriptedRng::from_kinds(&[PieceKind::T, PieceKind::O]));
//!
//! // Three ticks bring the piece onto the board.
//! for _ in 0..3 {
//!     game.tick();
//! }
//! assert!(game.apply_command(Command::MoveRight));
//! assert_eq!(game.current().x(), 5);
//! assert_eq!(game.next().kind(), PieceKind::O);
//! ```
//!
//! # Timing
//!
//! The engine does not read the clock. The driver calls
//! [`GameState::tick`](game_state::GameState::tick) whenever
//! [`GameState::tick_interval`](game_state::GameState::tick_interval) has
//! elapsed since the previous tick.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetrad_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, TickEvent};
pub use pieces::{is_filled, shape_mask, Piece};
pub use rng::{draw_kind, PieceRng, ScriptedRng, SimpleRng};
pub use scoring::{level_for_score, line_clear_points, tick_interval, tick_interval_ns};
pub use snapshot::GameSnapshot;
