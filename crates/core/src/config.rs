//! Engine configuration.
//!
//! Defaults reproduce the reference game: a 10 x 20 board, one gravity step
//! per second, 100 points per cleared row. Every value can be overridden from
//! the environment:
//!
//! - `BLOCKFALL_WIDTH`: board columns (default: 10)
//! - `BLOCKFALL_HEIGHT`: board rows (default: 20)
//! - `BLOCKFALL_TICK_MS`: gravity interval in milliseconds (default: 1000)
//! - `BLOCKFALL_SCORE_PER_LINE`: points per cleared row (default: 100)

use std::time::Duration;

use thiserror::Error;

use crate::shape::{Shape, MAX_EDGE};
use crate::types::{
    PieceKind, DEFAULT_HEIGHT, DEFAULT_SCORE_PER_LINE, DEFAULT_TICK_MS, DEFAULT_WIDTH,
};

/// Largest accepted board edge; keeps every coordinate inside `i16`.
pub const MAX_BOARD_EDGE: u16 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be positive")]
    ZeroWidth,
    #[error("board height must be positive")]
    ZeroHeight,
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("board {width}x{height} cannot fit every piece (needs at least {min}x{min})")]
    BoardTooSmall { width: u16, height: u16, min: u16 },
    #[error("board {width}x{height} exceeds the {max}x{max} limit")]
    BoardTooLarge { width: u16, height: u16, max: u16 },
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Construction-time settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    pub tick_interval: Duration,
    pub score_per_line: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            score_per_line: DEFAULT_SCORE_PER_LINE,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_score_per_line(mut self, score_per_line: u32) -> Self {
        self.score_per_line = score_per_line;
        self
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        let min = min_board_edge();
        if self.width < min || self.height < min {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min,
            });
        }
        if self.width > MAX_BOARD_EDGE || self.height > MAX_BOARD_EDGE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_EDGE,
            });
        }
        Ok(())
    }

    /// Defaults overridden by `BLOCKFALL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup.
    ///
    /// The result is validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            width: parse_var(&lookup, "BLOCKFALL_WIDTH")?.unwrap_or(defaults.width),
            height: parse_var(&lookup, "BLOCKFALL_HEIGHT")?.unwrap_or(defaults.height),
            tick_interval: parse_var::<u64>(&lookup, "BLOCKFALL_TICK_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_interval),
            score_per_line: parse_var(&lookup, "BLOCKFALL_SCORE_PER_LINE")?
                .unwrap_or(defaults.score_per_line),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Smallest edge that fits every template in every orientation.
fn min_board_edge() -> u16 {
    PieceKind::ALL
        .iter()
        .map(|&k| {
            let s = Shape::template(k);
            s.rows().max(s.cols()) as u16
        })
        .max()
        .unwrap_or(MAX_EDGE as u16)
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { var, value: raw })
}
