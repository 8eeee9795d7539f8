//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 18 rows (indexed 0-17, row 0 at the top)
//! - **Spawn anchor**: (4, -3), the top-left corner of a piece's 4x4 box,
//!   three rows above the visible board
//!
//! # Levels and Tick Intervals
//!
//! The level is a pure function of the score. Each level maps to the interval
//! (in nanoseconds) the driver should wait between two ticks:
//!
//! | Level | Score from | Interval |
//! |-------|------------|----------|
//! | 1 | 0 | 5×10⁸ ns |
//! | 2 | 1500 | 4×10⁸ ns |
//! | 3 | 3000 | 3×10⁸ ns |
//! | 4 | 4500 | 2×10⁸ ns |
//! | 5 | 6000 | 1×10⁸ ns |
//!
//! # Examples
//!
//! ```
//! use tetrad_types::{Color, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Selectors follow the I, S, O, J, Z, L, T order.
//! let kind = PieceKind::from_index(6).unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), Color::Magenta);
//!
//! // Out-of-range selectors are rejected.
//! assert!(PieceKind::from_index(7).is_err());
//!
//! assert_eq!(Command::Rotate.as_str(), "rotate");
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (12, 18));
//! ```

use std::fmt;

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (18 rows)
pub const BOARD_HEIGHT: u8 = 18;

/// Side length of a piece's local bounding box
pub const PIECE_BOX: i8 = 4;

/// Spawn anchor column (horizontally centered on a 12-wide board)
pub const SPAWN_X: i8 = 4;

/// Spawn anchor row (above the visible board)
pub const SPAWN_Y: i8 = -3;

/// A piece locking with its anchor on or above this row ends the game.
pub const GAME_OVER_ROW: i8 = 1;

/// Points awarded per tick, indexed by the number of rows cleared in that tick.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Minimum score for levels 2, 3, 4 and 5.
pub const LEVEL_THRESHOLDS: [u32; 4] = [1500, 3000, 4500, 6000];

/// First level of every game.
pub const MIN_LEVEL: u32 = 1;

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 5;

/// Tick interval per level in nanoseconds (index 0 = level 1).
pub const TICK_INTERVALS_NS: [u64; 5] = [500_000_000, 400_000_000, 300_000_000, 200_000_000, 100_000_000];

/// Tick interval at level 1.
pub const BASE_TICK_INTERVAL_NS: u64 = TICK_INTERVALS_NS[0];

/// The seven tetromino kinds.
///
/// The declaration order is the selector order used by the random generator:
/// I=0, S=1, O=2, J=3, Z=4, L=5, T=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    S,
    O,
    J,
    Z,
    L,
    T,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 7;

    /// All kinds in selector order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::S,
        PieceKind::O,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Select a kind by its index in [0, 7).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrad_types::{InvalidPieceKind, PieceKind};
    ///
    /// assert_eq!(PieceKind::from_index(0), Ok(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(2), Ok(PieceKind::O));
    /// assert_eq!(PieceKind::from_index(9), Err(InvalidPieceKind { selector: 9 }));
    /// ```
    pub fn from_index(selector: u32) -> Result<Self, InvalidPieceKind> {
        Self::ALL
            .get(selector as usize)
            .copied()
            .ok_or(InvalidPieceKind { selector })
    }

    /// Selector index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display color, fixed for the lifetime of every piece of this kind.
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::S => Color::Green,
            PieceKind::O => Color::Yellow,
            PieceKind::J => Color::Blue,
            PieceKind::Z => Color::Red,
            PieceKind::L => Color::Orange,
            PieceKind::T => Color::Magenta,
        }
    }

    /// Single uppercase letter, used in logs.
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::S => 'S',
            PieceKind::O => 'O',
            PieceKind::J => 'J',
            PieceKind::Z => 'Z',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
        }
    }
}

/// Display colors, one per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Blue,
    Red,
    Orange,
    Magenta,
}

/// A cell of the landed pile
///
/// - `None`: empty
/// - `Some(PieceKind)`: locked by a piece of that kind (its color follows from the kind)
pub type Cell = Option<PieceKind>;

/// Discrete player commands.
///
/// Every command is checked against the collision rules first and silently
/// ignored when it would collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Rotate the piece a quarter turn
    Rotate,
    /// Move the piece one row down on demand
    SoftDrop,
}

impl Command {
    /// Parse a command name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" => Some(Command::SoftDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
        }
    }
}

/// Session lifecycle. `GameOver` is only left through a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// A piece selector outside [0, 7).
///
/// Only reachable through misuse: the engine's own generator never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPieceKind {
    pub selector: u32,
}

impl fmt::Display for InvalidPieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tetromino kind {} (expected 0..{})",
            self.selector,
            PieceKind::COUNT
        )
    }
}

impl std::error::Error for InvalidPieceKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_order_matches_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i as u32), Ok(*kind));
        }
    }

    #[test]
    fn out_of_range_selector_is_rejected() {
        let err = PieceKind::from_index(7).unwrap_err();
        assert_eq!(err.selector, 7);
        assert!(err.to_string().contains("invalid tetromino kind 7"));
        assert!(PieceKind::from_index(u32::MAX).is_err());
    }

    #[test]
    fn every_kind_has_its_own_color() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            assert!(!seen.contains(&kind.color()), "{:?} reuses a color", kind);
            seen.push(kind.color());
        }
    }

    #[test]
    fn level_tables_line_up() {
        assert_eq!(LEVEL_THRESHOLDS.len() as u32, MAX_LEVEL - MIN_LEVEL);
        assert_eq!(TICK_INTERVALS_NS.len() as u32, MAX_LEVEL);
        assert!(TICK_INTERVALS_NS.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(BASE_TICK_INTERVAL_NS, 500_000_000);
    }

    #[test]
    fn command_names_round_trip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::Rotate,
            Command::SoftDrop,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("hardDrop"), None);
    }
}
