//! Game state module - the authoritative game model
//!
//! Ties together the grid, the active piece, the piece source and scoring,
//! and implements the spawn / fall / lock / game-over state machine.
//!
//! ```text
//!             spawn ok                 down ok
//! Spawning ───────────▶ Falling ◀──────────────┐
//!    │  ▲                 │  └─────────────────┘
//!    │  │ next tick       │ down blocked, y >= 1
//!    │  └──── (Locking) ◀─┘
//!    │                    │ down blocked, y < 1
//!    │ spawn blocked      ▼
//!    └──────────────▶ GameOver ──── reset ───▶ Spawning
//! ```
//!
//! Locking happens inside a single tick; callers see it as a
//! [`TickEvent::Locked`] rather than as a resting phase.

use tracing::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, RandomSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, PieceKind};

/// Resting state of the engine between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No active piece; the next tick spawns one.
    #[default]
    Spawning,
    /// A piece is in play.
    Falling,
    /// Terminal until reset.
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverCause {
    /// The freshly spawned piece overlapped filled cells.
    SpawnBlocked,
    /// The piece could not descend a single row from the spawn row.
    Stuck,
}

/// Outcome of a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickEvent {
    /// Nothing changed (game over, or nothing to drop).
    Idle,
    /// A new piece entered play.
    Spawned(PieceKind),
    /// The active piece moved down one row.
    Fell,
    /// The active piece was merged into the grid.
    Locked {
        kind: PieceKind,
        lines_cleared: u32,
        score_gained: u32,
    },
    /// The game just ended.
    GameOver(GameOverCause),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    config: EngineConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    source: S,
    score: u32,
    lines: u32,
    game_over: bool,
    /// Monotonic count of successful spawns since the last reset.
    pieces_spawned: u32,
    /// Last lock/game-over event (consumed by observers).
    last_event: Option<TickEvent>,
}

impl GameState<RandomSource> {
    /// Default 10 x 20 game with a seeded uniform piece source.
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandomSource::seeded(seed))
    }
}

impl Default for GameState<RandomSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Default configuration with a custom piece source.
    pub fn with_source(source: S) -> Self {
        let config = EngineConfig::default();
        Self::build(config, Grid::new(config.width, config.height), source)
    }

    /// Validated configuration with a custom piece source.
    pub fn with_config(config: EngineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            config,
            Grid::new(config.width, config.height),
            source,
        ))
    }

    /// Start from a prepared grid; its dimensions replace the configured
    /// ones.
    pub fn with_grid(config: EngineConfig, grid: Grid, source: S) -> Result<Self, ConfigError> {
        let config = config.with_size(grid.width(), grid.height());
        config.validate()?;
        Ok(Self::build(config, grid, source))
    }

    fn build(config: EngineConfig, grid: Grid, source: S) -> Self {
        Self {
            config,
            grid,
            active: None,
            source,
            score: 0,
            lines: 0,
            game_over: false,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::Falling
        } else {
            Phase::Spawning
        }
    }

    /// Take and clear the last lock/game-over event.
    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.last_event.take()
    }

    /// Spawn a piece if none is in play.
    ///
    /// Returns true when a piece was spawned. A spawn that would overlap
    /// filled cells ends the game instead.
    pub fn spawn_if_needed(&mut self) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }

        let kind = self.source.next_kind();
        let piece = ActivePiece::spawn(kind, self.grid.width());
        if piece.collides(&self.grid) {
            self.end_game(GameOverCause::SpawnBlocked);
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!(kind = kind.as_str(), x = piece.position.x, "spawned piece");
        true
    }

    /// One gravity step, driven by the external timer.
    ///
    /// With no piece in play this performs the spawn instead.
    pub fn tick(&mut self) -> TickEvent {
        if self.game_over {
            return TickEvent::Idle;
        }
        if self.active.is_none() {
            if self.spawn_if_needed() {
                return self.active.map_or(TickEvent::Idle, |p| TickEvent::Spawned(p.kind));
            }
            return self.last_event.unwrap_or(TickEvent::Idle);
        }
        self.gravity_step()
    }

    /// Input-driven gravity step. Never spawns.
    pub fn soft_drop(&mut self) -> TickEvent {
        if self.game_over {
            return TickEvent::Idle;
        }
        self.gravity_step()
    }

    fn gravity_step(&mut self) -> TickEvent {
        let Some(active) = self.active else {
            return TickEvent::Idle;
        };

        let below = active.shifted(0, 1);
        if !below.collides(&self.grid) {
            self.active = Some(below);
            return TickEvent::Fell;
        }

        if active.position.y < 1 {
            // Could not leave the spawn row: the piece stays visible unmerged.
            return self.end_game(GameOverCause::Stuck);
        }

        self.lock(active)
    }

    fn lock(&mut self, piece: ActivePiece) -> TickEvent {
        self.grid.merge(&piece.shape, piece.color(), piece.position);
        self.active = None;

        let rows = self.grid.completed_rows();
        let lines_cleared = self.grid.clear(&rows) as u32;
        let score_gained = self.config.score_per_line.saturating_mul(lines_cleared);
        self.score = self.score.saturating_add(score_gained);
        self.lines = self.lines.saturating_add(lines_cleared);

        if lines_cleared > 0 {
            info!(lines_cleared, score = self.score, "cleared rows");
        } else {
            debug!(
                kind = piece.kind.as_str(),
                x = piece.position.x,
                y = piece.position.y,
                "locked piece"
            );
        }

        let event = TickEvent::Locked {
            kind: piece.kind,
            lines_cleared,
            score_gained,
        };
        self.last_event = Some(event);
        event
    }

    fn end_game(&mut self, cause: GameOverCause) -> TickEvent {
        self.game_over = true;
        let event = TickEvent::GameOver(cause);
        self.last_event = Some(event);
        info!(?cause, score = self.score, lines = self.lines, "game over");
        event
    }

    /// Shift the active piece one column. Rejected moves leave it in place.
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        self.try_replace(|p| p.shifted(direction.dx(), 0))
    }

    /// Rotate the active piece clockwise in place. No wall kicks: a rotation
    /// that would collide is rejected.
    pub fn rotate(&mut self) -> bool {
        self.try_replace(ActivePiece::rotated)
    }

    fn try_replace(&mut self, f: impl FnOnce(&ActivePiece) -> ActivePiece) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let next = f(&active);
        if next.collides(&self.grid) {
            return false;
        }
        self.active = Some(next);
        true
    }

    /// Fresh empty grid, zero score, game-over cleared. The next tick spawns.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.width, self.config.height);
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.pieces_spawned = 0;
        self.last_event = None;
        info!("game reset");
    }

    /// Apply a game action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(Direction::Left),
            GameAction::MoveRight => self.move_horizontal(Direction::Right),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop() != TickEvent::Idle,
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Write the composed view into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());

        if let Some(active) = self.active {
            let color = active.color();
            let width = self.grid.width() as i16;
            let height = self.grid.height() as i16;
            for (x, y) in active.cells() {
                if x >= 0 && x < width && y >= 0 && y < height {
                    out.cells[y as usize * width as usize + x as usize] = Some(color);
                }
            }
        }

        out.active = self.active;
        out.phase = self.phase();
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Position;
    use crate::rng::ScriptedSource;
    use crate::types::Color;

    fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedSource> {
        GameState::with_source(ScriptedSource::new(kinds.iter().copied()))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert_eq!(state.phase(), Phase::Spawning);
        assert_eq!(state.grid.width(), 10);
        assert_eq!(state.grid.height(), 20);
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut state = scripted(&[PieceKind::T]);
        assert_eq!(state.tick(), TickEvent::Spawned(PieceKind::T));
        assert_eq!(state.phase(), Phase::Falling);
        assert_eq!(state.pieces_spawned, 1);
        assert_eq!(state.active.unwrap().position, Position::new(3, 0));
    }

    #[test]
    fn test_spawn_if_needed_is_idempotent() {
        let mut state = scripted(&[PieceKind::I, PieceKind::O]);
        assert!(state.spawn_if_needed());
        assert!(!state.spawn_if_needed());
        assert_eq!(state.active.unwrap().kind, PieceKind::I);
        assert_eq!(state.source.drawn(), 1);
    }

    #[test]
    fn test_try_move() {
        let mut state = scripted(&[PieceKind::T]);
        state.spawn_if_needed();

        let initial_x = state.active.unwrap().position.x;
        assert!(state.move_horizontal(Direction::Right));
        assert_eq!(state.active.unwrap().position.x, initial_x + 1);
        assert!(state.move_horizontal(Direction::Left));
        assert_eq!(state.active.unwrap().position.x, initial_x);
    }

    #[test]
    fn test_try_move_collision() {
        let mut state = scripted(&[PieceKind::T]);
        state.spawn_if_needed();

        // T is 3 wide and spawns at x=3: three moves reach the wall.
        let moved = (0..10)
            .filter(|_| state.move_horizontal(Direction::Left))
            .count();
        assert_eq!(moved, 3);
        assert_eq!(state.active.unwrap().position.x, 0);
    }

    #[test]
    fn test_rotate_applies_clockwise_mask() {
        let mut state = scripted(&[PieceKind::T]);
        state.spawn_if_needed();
        let before = state.active.unwrap();

        assert!(state.rotate());
        let after = state.active.unwrap();
        assert_eq!(after.shape, before.shape.rotated_cw());
        assert_eq!(after.position, before.position);
    }

    #[test]
    fn test_tick_locks_and_clears() {
        // Bottom row full except columns 3..7, which an I piece fills.
        let grid = Grid::from_text(
            10,
            &[
                "..........",
                "..........",
                "..........",
                "###....###",
            ],
        );
        let mut state = GameState::with_grid(
            EngineConfig::default(),
            grid,
            ScriptedSource::repeat(PieceKind::I),
        )
        .unwrap();
        assert_eq!(state.tick(), TickEvent::Spawned(PieceKind::I));
        assert_eq!(state.tick(), TickEvent::Fell);
        assert_eq!(state.tick(), TickEvent::Fell);
        assert_eq!(state.tick(), TickEvent::Fell);
        assert_eq!(
            state.tick(),
            TickEvent::Locked {
                kind: PieceKind::I,
                lines_cleared: 1,
                score_gained: 100,
            }
        );
        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        assert_eq!(state.grid.filled_count(), 0);
        assert!(state.active.is_none());
        assert!(matches!(state.take_last_event(), Some(TickEvent::Locked { .. })));
        assert_eq!(state.take_last_event(), None);
    }

    #[test]
    fn test_soft_drop_never_spawns() {
        let mut state = scripted(&[PieceKind::O]);
        assert_eq!(state.soft_drop(), TickEvent::Idle);
        assert!(state.active.is_none());
        state.tick();
        assert_eq!(state.soft_drop(), TickEvent::Fell);
        assert_eq!(state.active.unwrap().position.y, 1);
    }

    #[test]
    fn test_stuck_at_spawn_row_ends_game_without_merge() {
        // Row 2 filled under the O spawn columns: O at y=0 cannot descend.
        let grid = Grid::from_text(10, &["..........", "..........", "....##....", ".........."]);
        let mut state = GameState::with_grid(
            EngineConfig::default(),
            grid.clone(),
            ScriptedSource::repeat(PieceKind::O),
        )
        .unwrap();
        state.tick();
        assert_eq!(state.tick(), TickEvent::GameOver(GameOverCause::Stuck));
        assert!(state.game_over);
        assert_eq!(state.grid, grid);
        // Piece stays visible in the snapshot.
        let snap = state.snapshot();
        assert_eq!(snap.cell(4, 0), Some(Some(Color::Yellow)));
        assert_eq!(snap.phase, Phase::GameOver);
    }

    #[test]
    fn test_score_per_line_is_configurable() {
        let grid = Grid::from_text(4, &["....", "....", "....", "....", "##.."]);
        let config = EngineConfig::default().with_score_per_line(7);
        let mut state =
            GameState::with_grid(config, grid, ScriptedSource::repeat(PieceKind::O)).unwrap();
        state.tick(); // O spawns at x=1
        state.move_horizontal(Direction::Right);
        for _ in 0..3 {
            assert_eq!(state.tick(), TickEvent::Fell);
        }
        let event = state.tick();
        assert_eq!(
            event,
            TickEvent::Locked {
                kind: PieceKind::O,
                lines_cleared: 1,
                score_gained: 7,
            }
        );
        assert_eq!(state.score, 7);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = scripted(&[PieceKind::J]);
        state.tick();
        let x = state.active.unwrap().position.x;

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.unwrap().position.x, x + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::Rotate));
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.unwrap().position.y, 1);
        assert!(state.apply_action(GameAction::Restart));
        assert!(state.active.is_none());
    }
}
