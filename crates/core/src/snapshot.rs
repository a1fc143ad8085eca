//! Read-only view of a game for renderers.
//!
//! A snapshot composes the committed grid with the active piece overlaid
//! (rows at y >= 0 only). Building one never touches engine state, and
//! [`GameSnapshot`] can be reused across frames via
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into).

use crate::game_state::Phase;
use crate::piece::ActivePiece;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major composed cells.
    pub cells: Vec<Cell>,
    pub active: Option<ActivePiece>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Composed cell at `(x, y)`, `None` when out of range.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Composed rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
