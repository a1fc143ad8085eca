//! Active piece value type.
//!
//! An [`ActivePiece`] is immutable: every move or rotation builds a new value
//! and the engine swaps it in whole, so kind, mask and position can never be
//! observed half-updated.

use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{Color, PieceKind};

/// Grid coordinates of a mask's top-left corner. `y` may be negative while
/// a piece is still above the visible top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl ActivePiece {
    /// Create a piece in its template orientation, horizontally centered on
    /// a board `width` columns wide, at row 0.
    pub fn spawn(kind: PieceKind, width: u16) -> Self {
        let shape = Shape::template(kind);
        let x = (width as i16 - shape.cols() as i16) / 2;
        Self {
            kind,
            shape,
            position: Position::new(x, 0),
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Same piece shifted by `(dx, dy)`.
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }

    /// Same piece with its mask rotated clockwise about the unchanged origin.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        grid.collides(&self.shape, self.position)
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.position.x + dx, self.position.y + dy))
    }
}
