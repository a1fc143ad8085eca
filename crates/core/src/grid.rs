//! Grid module - the committed playfield
//!
//! The grid is a `width x height` matrix where each cell is empty or filled
//! with an occupant color. Storage is a flat row-major vector sized once at
//! construction; dimensions never change afterwards.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::piece::Position;
use crate::shape::Shape;
use crate::types::{Cell, Color};

/// The committed playfield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is inside the grid and filled.
    pub fn is_filled(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Would `shape` with its origin at `pos` collide?
    ///
    /// A cell collides when it is left of column 0, right of the last
    /// column, below the last row, or on a filled cell. Cells above the top
    /// (y < 0) are only checked against the side walls.
    pub fn collides(&self, shape: &Shape, pos: Position) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let px = pos.x + dx;
            let py = pos.y + dy;
            if px < 0 || px >= self.width as i16 || py >= self.height as i16 {
                return true;
            }
            py >= 0 && self.is_filled(px, py)
        })
    }

    /// Write `shape` into the grid with the given color.
    ///
    /// Cells above the top are dropped; the return value is how many were.
    pub fn merge(&mut self, shape: &Shape, color: Color, pos: Position) -> usize {
        let mut dropped = 0;
        for (dx, dy) in shape.cells() {
            if pos.y + dy < 0 {
                dropped += 1;
                continue;
            }
            self.set(pos.x + dx, pos.y + dy, Some(color));
        }
        dropped
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Indices of every full row, ascending.
    pub fn completed_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove `rows` and pad the top with as many empty rows.
    ///
    /// Remaining rows keep their relative order. Duplicate and out-of-range
    /// indices are ignored. Returns the number of rows removed.
    pub fn clear(&mut self, rows: &[usize]) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut removed = 0;

        // Two-pointer compaction from the bottom up.
        for read_y in (0..height).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        removed
    }

    /// Borrow row `y`, if it exists.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Build a grid from text rows: `.` is empty, any other character is a
    /// filled cell.
    ///
    /// Used by tests to describe boards compactly.
    pub fn from_text(width: u16, lines: &[&str]) -> Self {
        let height = lines.len() as u16;
        let mut grid = Self::new(width, height);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().take(width as usize).enumerate() {
                if ch != '.' {
                    grid.set(x as i16, y as i16, Some(color_for_char(ch)));
                }
            }
        }
        grid
    }
}

fn color_for_char(ch: char) -> Color {
    match ch.to_ascii_uppercase() {
        'I' => Color::Cyan,
        'J' => Color::Blue,
        'L' => Color::Orange,
        'O' => Color::Yellow,
        'S' => Color::Green,
        'T' => Color::Purple,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_collides_ignores_contents_above_top() {
        let grid = Grid::from_text(4, &["####", "....", "...."]);
        let bar = Shape::template(PieceKind::I).rotated_cw();
        // Vertical bar hanging three cells above the top, one on row 0.
        assert!(grid.collides(&bar, Position::new(0, -3)));
        // Entirely above the top: grid contents are never consulted.
        assert!(!grid.collides(&bar, Position::new(0, -4)));
        // Side walls still apply above the top.
        assert!(grid.collides(&bar, Position::new(-1, -4)));
        assert!(grid.collides(&bar, Position::new(4, -4)));
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        let mut grid = Grid::new(4, 4);
        let o = Shape::template(PieceKind::O);
        assert_eq!(grid.merge(&o, Color::Yellow, Position::new(1, -1)), 2);
        assert_eq!(grid.get(1, 0), Some(Some(Color::Yellow)));
        assert_eq!(grid.get(2, 0), Some(Some(Color::Yellow)));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_clear_ignores_duplicates_and_out_of_range() {
        let mut grid = Grid::from_text(2, &["a.", "##", "b."]);
        assert_eq!(grid.clear(&[1, 1, 7]), 1);
        assert_eq!(grid, Grid::from_text(2, &["..", "a.", "b."]));
    }
}
