//! Terminal runner (default binary).
//!
//! One single-threaded loop: wait for a key until the next tick is due,
//! forward it to the session, fire the tick, redraw.
//!
//! Environment:
//! - `BLOCKFALL_WIDTH` / `BLOCKFALL_HEIGHT` / `BLOCKFALL_TICK_MS` /
//!   `BLOCKFALL_SCORE_PER_LINE`: engine configuration
//! - `BLOCKFALL_SEED`: seed for a reproducible piece sequence
//! - `BLOCKFALL_LOG_PATH`: write `tracing` output to this file (`RUST_LOG`
//!   filters, default `info`)

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{EngineConfig, GameSnapshot, GameState, RandomSource, TickEvent};
use blockfall::engine::Session;
use blockfall::input::{handle_key_event, Command};
use blockfall::term::{FrameBuffer, GameView, HudStatus, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

/// Poll timeout while the ticker is stopped (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env().context("invalid BLOCKFALL_* configuration")?;
    let source = match std::env::var("BLOCKFALL_SEED") {
        Ok(raw) => RandomSource::seeded(
            raw.trim()
                .parse()
                .with_context(|| format!("invalid BLOCKFALL_SEED {raw:?}"))?,
        ),
        Err(_) => RandomSource::from_entropy(),
    };
    let game = GameState::with_config(config, source)?;
    info!(
        width = config.width,
        height = config.height,
        tick_ms = config.tick_interval.as_millis() as u64,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::new(game, Instant::now()));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("BLOCKFALL_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session<RandomSource>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut hud = HudStatus::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        hud.paused = session.paused();
        session.snapshot_into(&mut snap);
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = session
            .time_until_tick(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(Command::Quit) => break,
                    Some(Command::TogglePause) => {
                        session.toggle_pause(Instant::now());
                    }
                    Some(Command::Game(action)) => {
                        if action == GameAction::Restart {
                            hud.last_clear = None;
                        }
                        session.handle(action, Instant::now());
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        session.poll(Instant::now());

        // Locks come from ticks and from soft drops alike.
        if let Some(TickEvent::Locked { lines_cleared, .. }) = session.take_last_event() {
            hud.last_clear = Some(lines_cleared);
        }
    }

    session.shutdown();
    Ok(())
}
