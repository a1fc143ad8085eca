//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole rule set of the falling-block game. It has no
//! dependencies on terminals, timers or input devices, which makes it:
//!
//! - **Deterministic**: a seeded or scripted [`PieceSource`] replays a game exactly
//! - **Testable**: every rule is reachable from plain method calls
//! - **Portable**: the same engine drives the terminal front end or a headless test
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size playfield with collision, merge and line clearing
//! - [`shape`]: rectangular piece masks, the seven templates, clockwise rotation
//! - [`piece`]: the immutable active piece value and its position
//! - [`game_state`]: the spawn / fall / lock / game-over state machine
//! - [`rng`]: pluggable piece selection
//! - [`config`]: validated construction settings
//! - [`snapshot`]: composed read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random and spawn centered on row 0
//! - Each tick moves the active piece down one row
//! - A piece that cannot descend locks into the grid; full rows are removed
//! - Every cleared row scores `score_per_line` (100 by default)
//! - The game ends when a spawn overlaps the stack or a piece cannot leave
//!   the spawn row
//! - Rotation is clockwise with no wall kicks
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ScriptedSource, TickEvent};
//! use blockfall_types::{Direction, PieceKind};
//!
//! let mut game = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
//! assert_eq!(game.tick(), TickEvent::Spawned(PieceKind::O));
//!
//! game.move_horizontal(Direction::Left);
//! game.rotate();
//! assert_eq!(game.tick(), TickEvent::Fell);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!game.is_game_over());
//! ```

pub mod config;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use game_state::{GameOverCause, GameState, Phase, TickEvent};
pub use grid::Grid;
pub use piece::{ActivePiece, Position};
pub use rng::{PieceSource, RandomSource, ScriptedSource};
pub use shape::Shape;
pub use snapshot::GameSnapshot;
