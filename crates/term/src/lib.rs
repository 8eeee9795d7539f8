//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the [`GameView`] paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`] of
//! styled glyphs, and the [`TerminalRenderer`] flushes that buffer to the
//! terminal through crossterm.
//!
//! Board cells are drawn `cell_w` columns wide (2 by default) so they look
//! roughly square in common terminal fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrad_core as core;
pub use tetrad_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
