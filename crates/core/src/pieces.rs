//! Pieces module - tetromino shape table and the falling piece
//!
//! Every kind has one canonical 16-cell bitmap over a 4x4 box, addressed by
//! local coordinates `(px, py)` with the bit index `px + 4 * py`. The other
//! three orientations are not stored as separate art: a quarter turn is a
//! closed-form remap of `(px, py)` into the canonical bitmap. The remapped
//! masks for all `(kind, rotation)` pairs are folded into [`SHAPE_MASKS`] at
//! compile time.

use crate::types::{
    Cell, Color, InvalidPieceKind, PieceKind, PIECE_BOX, SPAWN_X, SPAWN_Y,
};

/// Canonical (rotation 0) bitmaps in selector order, one char per local cell.
const CANONICAL_ART: [&str; 7] = [
    "0100010001000100", // I
    "0100011000100000", // S
    "0000011001100000", // O
    "0110010001000000", // J
    "0010011001000000", // Z
    "0110001000100000", // L
    "0100111000000000", // T
];

/// Occupancy mask per kind (selector order) and rotation (0..4).
///
/// Bit `px + 4 * py` is set when local cell `(px, py)` is occupied.
pub const SHAPE_MASKS: [[u16; 4]; 7] = build_shape_masks();

const fn parse_art(art: &str) -> u16 {
    let bytes = art.as_bytes();
    let mut mask = 0u16;
    let mut i = 0;
    while i < 16 {
        if bytes[i] == b'1' {
            mask |= 1 << i;
        }
        i += 1;
    }
    mask
}

/// Index into the canonical bitmap of local cell `(px, py)` seen at `rotation`.
///
/// `rotation` is taken mod 4; `px` and `py` must be in 0..4.
pub const fn canonical_index(px: usize, py: usize, rotation: u8) -> usize {
    match rotation % 4 {
        1 => 12 - 4 * px + py,
        2 => 15 - px - 4 * py,
        3 => 3 + 4 * px - py,
        _ => px + 4 * py,
    }
}

const fn rotate_mask(canonical: u16, rotation: u8) -> u16 {
    let mut mask = 0u16;
    let mut py = 0;
    while py < 4 {
        let mut px = 0;
        while px < 4 {
            if canonical & (1 << canonical_index(px, py, rotation)) != 0 {
                mask |= 1 << (px + 4 * py);
            }
            px += 1;
        }
        py += 1;
    }
    mask
}

const fn build_shape_masks() -> [[u16; 4]; 7] {
    let mut table = [[0u16; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let canonical = parse_art(CANONICAL_ART[kind]);
        let mut rotation = 0;
        while rotation < 4 {
            table[kind][rotation] = rotate_mask(canonical, rotation as u8);
            rotation += 1;
        }
        kind += 1;
    }
    table
}

/// Occupancy mask for a kind at a rotation (taken mod 4).
#[inline]
pub fn shape_mask(kind: PieceKind, rotation: u8) -> u16 {
    SHAPE_MASKS[kind.index()][(rotation % 4) as usize]
}

/// Whether local cell `(px, py)` of `kind` is occupied at `rotation`.
///
/// Coordinates outside the 4x4 box are never occupied.
#[inline]
pub fn is_filled(kind: PieceKind, rotation: u8, px: i8, py: i8) -> bool {
    if px < 0 || px >= PIECE_BOX || py < 0 || py >= PIECE_BOX {
        return false;
    }
    shape_mask(kind, rotation) & (1 << (px + PIECE_BOX * py)) != 0
}

/// Iterate the occupied local cells `(px, py)` of a mask, row by row.
pub fn mask_cells(mask: u16) -> impl Iterator<Item = (i8, i8)> {
    (0..16i8)
        .filter(move |&bit| mask & (1 << bit) != 0)
        .map(|bit| (bit % PIECE_BOX, bit / PIECE_BOX))
}

/// The falling piece: a fixed kind plus mutable rotation and anchor.
///
/// The anchor is the top-left corner of the 4x4 local box in board
/// coordinates; `y` is negative while part of the box is above the board.
/// Movement methods never check bounds or collisions; the board decides
/// legality before calling them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    /// Quarter turns applied since spawn; read mod 4.
    rotation: u8,
    x: i8,
    y: i8,
}

impl Piece {
    /// Create a piece of `kind` at the spawn anchor, unrotated.
    pub fn new(kind: PieceKind) -> Self {
        Self::with_anchor(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece from a selector in [0, 7).
    pub fn from_index(selector: u32) -> Result<Self, InvalidPieceKind> {
        PieceKind::from_index(selector).map(Self::new)
    }

    /// Create an unrotated piece at an arbitrary anchor.
    pub fn with_anchor(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Raw rotation counter (not reduced mod 4).
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Occupancy mask at the current rotation.
    pub fn mask(&self) -> u16 {
        shape_mask(self.kind, self.rotation)
    }

    /// Identity tag of local cell `(px, py)` at the current rotation.
    pub fn cell_at(&self, px: i8, py: i8) -> Cell {
        self.cell_at_rotation(px, py, self.rotation)
    }

    /// Identity tag of local cell `(px, py)` at an arbitrary rotation.
    pub fn cell_at_rotation(&self, px: i8, py: i8, rotation: u8) -> Cell {
        is_filled(self.kind, rotation, px, py).then_some(self.kind)
    }

    /// Color of local cell `(px, py)` at the current rotation, `None` if empty.
    pub fn color_at(&self, px: i8, py: i8) -> Option<Color> {
        self.color_at_rotation(px, py, self.rotation)
    }

    pub fn color_at_rotation(&self, px: i8, py: i8, rotation: u8) -> Option<Color> {
        self.cell_at_rotation(px, py, rotation).map(PieceKind::color)
    }

    /// Occupied local cells at `rotation`.
    pub fn local_cells(&self, rotation: u8) -> impl Iterator<Item = (i8, i8)> {
        mask_cells(shape_mask(self.kind, rotation))
    }

    /// Occupied board cells `(column, row)` at the current anchor and rotation.
    ///
    /// Rows may be negative while the piece is entering the board.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.local_cells(self.rotation)
            .map(move |(px, py)| (x + px, y + py))
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    /// Move one row down.
    pub fn advance(&mut self) {
        self.y += 1;
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.wrapping_add(1);
    }
}
