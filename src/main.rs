//! Terminal runner (default binary).
//!
//! Owns the only clock in the program: the engine is ticked whenever its
//! current tick interval has elapsed, and key events are applied between
//! ticks on the same thread.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{debug, info, LevelFilter};

use tetrad::config::DriverConfig;
use tetrad::core::{GameSnapshot, GameState};
use tetrad::input::{handle_key_event, is_new_game, should_quit};
use tetrad::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = DriverConfig::from_env();
    init_logging(&config)?;

    let seed = config.resolve_seed();
    info!("starting with seed {} and cell width {}", seed, config.cell_width);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the configured file; without one, logging stays off.
fn init_logging(config: &DriverConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .format_module_path(false)
        .try_init()
        .context("installing logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &DriverConfig, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::new(config.cell_width);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_tick = Instant::now() + game.tick_interval();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if is_new_game(key) {
                        info!("new game requested at score {}", game.score());
                        game.new_game();
                        next_tick = Instant::now() + game.tick_interval();
                    } else if let Some(command) = handle_key_event(key) {
                        let moved = game.apply_command(command);
                        debug!("{} -> {}", command.as_str(), if moved { "moved" } else { "blocked" });
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        if now >= next_tick {
            game.tick();
            next_tick = now + game.tick_interval().max(Duration::from_millis(1));
        }
    }
}
