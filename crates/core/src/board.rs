//! Board module - the landed pile
//!
//! The board is a 12x18 grid where each cell is empty or holds the kind of
//! the piece that locked there. Storage is a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..17
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::{mask_cells, shape_mask, Piece};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one clear pass, in the order they were found.
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// The landed pile - 12 columns x 18 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index of (x, y); widened so piece offsets cannot overflow.
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x.into(), y.into()).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x.into(), y.into()) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x.into(), y.into()).is_none()
    }

    /// Whether a piece of `kind` at anchor (x, y) and `rotation` would overlap
    /// a wall, the floor, the area above the board, or a landed cell.
    ///
    /// Only occupied local cells are tested, so empty margins of the 4x4 box
    /// may hang outside the board.
    pub fn collides(&self, kind: PieceKind, x: i8, y: i8, rotation: u8) -> bool {
        mask_cells(shape_mask(kind, rotation)).any(|(px, py)| {
            let col = i16::from(x) + i16::from(px);
            let row = i16::from(y) + i16::from(py);
            match Self::index(col, row) {
                Some(idx) => self.cells[idx].is_some(),
                None => true,
            }
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty row 0.
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }

        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }

        self.cells[..WIDTH].fill(None);
    }

    /// Clear every filled row, scanning from the bottom up.
    ///
    /// After a clear the same row index is examined again, since the row
    /// above has just shifted into it. The returned indices are the rows as
    /// seen at the moment each was cleared, so a cascade of adjacent rows
    /// reports the same index repeatedly.
    pub fn clear_filled_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared.push((y - 1) as u8);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Write the occupied cells of `piece` into the pile.
    ///
    /// Cells outside the board are skipped. Returns how many cells were written.
    pub fn lock_piece(&mut self, piece: &Piece) -> usize {
        let kind = piece.kind();
        let mut written = 0;
        for (x, y) in piece.board_cells() {
            if self.set(x, y, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of the board, left to right.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < HEIGHT).then(|| &self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    /// Copy the board into a row-major 2D grid.
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    /// Fill row `y` with `kind`, leaving the listed columns empty.
    pub fn fill_row_except(&mut self, y: usize, kind: PieceKind, holes: &[usize]) {
        if y >= HEIGHT {
            return;
        }
        for x in 0..WIDTH {
            self.cells[y * WIDTH + x] = if holes.contains(&x) { None } else { Some(kind) };
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
