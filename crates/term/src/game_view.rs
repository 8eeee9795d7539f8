//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(25, 25, 35);
const GRID_FG: Rgb = Rgb::new(70, 70, 85);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb::new(190, 190, 190), Rgb::BLACK);
const HINT: Style = Style::new(Rgb::new(120, 120, 130), Rgb::BLACK);
const OVERLAY: Style = Style::new(Rgb::WHITE, Rgb::new(120, 0, 0)).bold();

/// Key help shown under the side panel.
const CONTROLS: [&str; 5] = [
    "←/→  move",
    "↑    rotate",
    "↓    drop",
    "n    new game",
    "q    quit",
];

/// Paints the well, the side panel and the game-over overlay.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the cells in most fonts.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    /// Outer size of the bordered well in terminal cells.
    pub fn well_size(&self) -> (u16, u16) {
        (
            u16::from(BOARD_WIDTH) * self.cell_w + 2,
            u16::from(BOARD_HEIGHT) + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer, resizing it to `viewport`.
    ///
    /// The well is centered vertically; the side panel sits to its right and
    /// is skipped when the viewport is too narrow.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (well_w, well_h) = self.well_size();
        let panel_w = 16;
        let origin_x = viewport.width.saturating_sub(well_w + panel_w) / 2;
        let origin_y = viewport.height.saturating_sub(well_h) / 2;

        draw_frame(fb, origin_x, origin_y, well_w, well_h);
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let cell = snap.painted_cell(x, y).flatten();
                self.draw_cell(fb, origin_x + 1, origin_y + 1, x as u16, y as u16, cell);
            }
        }

        self.draw_side_panel(fb, snap, origin_x + well_w + 2, origin_y);

        if snap.game_over() {
            draw_centered(fb, origin_x, origin_y + well_h / 2 - 1, well_w, " GAME OVER ", OVERLAY);
            draw_centered(fb, origin_x, origin_y + well_h / 2 + 1, well_w, " n: new game ", OVERLAY);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, left: u16, top: u16, x: u16, y: u16, cell: Cell) {
        let glyph = match cell {
            Some(kind) => block_glyph(kind),
            None => Style::new(GRID_FG, WELL_BG).glyph('·'),
        };
        fb.fill_rect(left + x * self.cell_w, top + y, self.cell_w, 1, glyph);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }
        let mut y = top;

        fb.put_str(x, y, "NEXT", LABEL);
        y += 1;
        for py in 0..PIECE_BOX {
            for px in 0..PIECE_BOX {
                let glyph = match snap.next.cell_at_rotation(px, py, 0) {
                    Some(kind) => block_glyph(kind),
                    None => Glyph::default(),
                };
                fb.fill_rect(x + px as u16 * self.cell_w, y, self.cell_w, 1, glyph);
            }
            y += 1;
        }
        y += 1;

        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }

        for line in CONTROLS {
            fb.put_str(x, y, line, HINT);
            y += 1;
        }
    }
}

fn block_glyph(kind: PieceKind) -> Glyph {
    Style::new(Rgb::from(kind.color()), WELL_BG).bold().glyph('█')
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.set(x, y, BORDER.glyph('┌'));
    fb.set(right, y, BORDER.glyph('┐'));
    fb.set(x, bottom, BORDER.glyph('└'));
    fb.set(right, bottom, BORDER.glyph('┘'));
    fb.fill_rect(x + 1, y, w - 2, 1, BORDER.glyph('─'));
    fb.fill_rect(x + 1, bottom, w - 2, 1, BORDER.glyph('─'));
    fb.fill_rect(x, y + 1, 1, h - 2, BORDER.glyph('│'));
    fb.fill_rect(right, y + 1, 1, h - 2, BORDER.glyph('│'));
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str, style: Style) {
    let len = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(len) / 2, y, text, style);
}
