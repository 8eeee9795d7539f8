//! Driver configuration read from the environment.
//!
//! Every variable is optional and a malformed value falls back to the
//! default, so a bad setting never keeps the game from starting.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed for the piece generator.
pub const SEED_VAR: &str = "TETRIS_SEED";
/// File to append log records to; logging is off when unset or blank.
pub const LOG_PATH_VAR: &str = "TETRIS_LOG_PATH";
/// Terminal columns per board cell.
pub const CELL_WIDTH_VAR: &str = "TETRIS_CELL_WIDTH";

pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MAX_CELL_WIDTH: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// `None` means derive a seed from the clock at startup.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let cell_width = lookup(CELL_WIDTH_VAR)
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|w| (1..=MAX_CELL_WIDTH).contains(w))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }

    /// The configured seed, or one taken from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so seeds differ across runs started in the same second.
    (nanos ^ (nanos >> 32)) as u32
}
