//! Session: one engine, one ticker, one input stream.
//!
//! Every entry point takes `&mut self`, so timer ticks and player input are
//! serialized through the same owner and can never interleave inside an
//! engine operation. The session also owns the ticker's lifecycle: it stops
//! on game over, pause and shutdown, and restarts from scratch on reset so a
//! stale deadline never ticks a fresh game.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, PieceSource, TickEvent};
use crate::ticker::Ticker;
use crate::types::GameAction;

pub struct Session<S: PieceSource> {
    game: GameState<S>,
    ticker: Ticker,
    paused: bool,
}

impl<S: PieceSource> Session<S> {
    /// Wrap `game` and start ticking at its configured cadence.
    pub fn new(game: GameState<S>, now: Instant) -> Self {
        let mut ticker = Ticker::new(game.config().tick_interval);
        if !game.is_game_over() {
            ticker.start(now);
        }
        Self {
            game,
            ticker,
            paused: false,
        }
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// How long the event loop may block before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    /// Run the engine tick if the timer is due.
    pub fn poll(&mut self, now: Instant) -> Option<TickEvent> {
        if !self.ticker.fire_if_due(now) {
            return None;
        }
        let event = self.game.tick();
        self.stop_if_over();
        Some(event)
    }

    /// Apply a player action. Ignored while paused, except restart.
    pub fn handle(&mut self, action: GameAction, now: Instant) -> bool {
        if action == GameAction::Restart {
            self.restart(now);
            return true;
        }
        if self.paused {
            return false;
        }
        let changed = self.game.apply_action(action);
        self.stop_if_over();
        changed
    }

    /// Pause or resume gravity. No effect once the game is over.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        if self.game.is_game_over() {
            return false;
        }
        self.paused = !self.paused;
        if self.paused {
            self.ticker.stop();
        } else {
            self.ticker.restart(now);
        }
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Last lock/game-over event, from either a tick or an action.
    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.game.take_last_event()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Stop the timer and hand back the engine.
    pub fn shutdown(mut self) -> GameState<S> {
        self.ticker.stop();
        info!(score = self.game.score(), "session closed");
        self.game
    }

    fn restart(&mut self, now: Instant) {
        self.ticker.stop();
        self.game.reset();
        self.paused = false;
        self.ticker.restart(now);
    }

    fn stop_if_over(&mut self) {
        if self.game.is_game_over() && self.ticker.is_running() {
            self.ticker.stop();
            debug!("ticker stopped on game over");
        }
    }
}
