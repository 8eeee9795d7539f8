//! Terminal input module.
//!
//! Maps `crossterm` key events onto engine [`crate::types::Command`]s and the
//! two session-level keys (new game, quit). Nothing here touches the engine;
//! the driver decides what to do with the mapped value.

pub mod map;

pub use tetrad_types as types;

pub use map::{handle_key_event, is_new_game, should_quit};
