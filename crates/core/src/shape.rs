//! Shape module - rectangular piece masks and clockwise rotation
//!
//! A shape is a boolean mask of at most 4x4 cells packed into a `u16`
//! (row-major, 4 bits per row). Offsets are relative to the mask's top-left
//! corner, which is what an active piece's position refers to.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest supported mask edge.
pub const MAX_EDGE: u8 = 4;

/// Offset of a single occupied cell relative to the mask origin
pub type CellOffset = (i16, i16);

/// Occupied offsets of a mask, row-major.
pub type ShapeCells = ArrayVec<CellOffset, 16>;

/// Immutable rectangular boolean mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: u16,
}

#[inline(always)]
const fn bit(row: u8, col: u8) -> u16 {
    1 << (row * MAX_EDGE + col)
}

impl Shape {
    /// Canonical template for a piece kind, in spawn orientation.
    pub const fn template(kind: PieceKind) -> Self {
        match kind {
            // 1111
            PieceKind::I => Self::packed(1, 4, bit(0, 0) | bit(0, 1) | bit(0, 2) | bit(0, 3)),
            // 100
            // 111
            PieceKind::J => Self::packed(2, 3, bit(0, 0) | bit(1, 0) | bit(1, 1) | bit(1, 2)),
            // 001
            // 111
            PieceKind::L => Self::packed(2, 3, bit(0, 2) | bit(1, 0) | bit(1, 1) | bit(1, 2)),
            // 11
            // 11
            PieceKind::O => Self::packed(2, 2, bit(0, 0) | bit(0, 1) | bit(1, 0) | bit(1, 1)),
            // 011
            // 110
            PieceKind::S => Self::packed(2, 3, bit(0, 1) | bit(0, 2) | bit(1, 0) | bit(1, 1)),
            // 010
            // 111
            PieceKind::T => Self::packed(2, 3, bit(0, 1) | bit(1, 0) | bit(1, 1) | bit(1, 2)),
            // 110
            // 011
            PieceKind::Z => Self::packed(2, 3, bit(0, 0) | bit(0, 1) | bit(1, 1) | bit(1, 2)),
        }
    }

    const fn packed(rows: u8, cols: u8, bits: u16) -> Self {
        Self { rows, cols, bits }
    }

    /// Build a mask from boolean rows.
    ///
    /// Returns `None` for an empty, ragged, or larger-than-4x4 input.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_EDGE as usize || width > MAX_EDGE as usize {
            return None;
        }
        let mut bits = 0u16;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    bits |= bit(r as u8, c as u8);
                }
            }
        }
        Some(Self::packed(height as u8, width as u8, bits))
    }

    /// Parse a mask from lines of `#`/`1` (filled) and `.`/`0` (empty).
    ///
    /// ```
    /// use blockfall_core::Shape;
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(Shape::parse("010\n111"), Some(Shape::template(PieceKind::T)));
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines: ArrayVec<ArrayVec<bool, 4>, 4> = ArrayVec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut row = ArrayVec::new();
            for ch in line.chars() {
                let filled = match ch {
                    '#' | '1' => true,
                    '.' | '0' => false,
                    _ => return None,
                };
                row.try_push(filled).ok()?;
            }
            lines.try_push(row).ok()?;
        }
        let rows: ArrayVec<&[bool], 4> = lines.iter().map(|r| r.as_slice()).collect();
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.bits & bit(row, col) != 0
    }

    /// Occupied cells as `(dx, dy)` offsets, row-major.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.is_filled(r, c) {
                    out.push((c as i16, r as i16));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: transpose, then reverse the row order.
    ///
    /// The result has swapped dimensions. Cell `(r, c)` of the rotated mask
    /// is cell `(rows - 1 - c, r)` of the original.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut bits = 0u16;
        for r in 0..rows {
            for c in 0..cols {
                if self.is_filled(self.rows - 1 - c, r) {
                    bits |= bit(r, c);
                }
            }
        }
        Self::packed(rows, cols, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::template(kind).cells().len(), 4, "{kind:?}");
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let t = Shape::template(PieceKind::T);
        let r = t.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (3, 2));
        // 10
        // 11
        // 10
        assert_eq!(Some(r), Shape::parse("10\n11\n10"));
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = Shape::template(kind);
            let back = s.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(s, back, "{kind:?}");
        }
    }

    #[test]
    fn o_is_rotation_invariant() {
        let o = Shape::template(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn parse_rejects_ragged_and_oversized() {
        assert_eq!(Shape::parse("11\n1"), None);
        assert_eq!(Shape::parse("11111"), None);
        assert_eq!(Shape::parse("1\n1\n1\n1\n1"), None);
        assert_eq!(Shape::parse("1x"), None);
        assert_eq!(Shape::parse(""), None);
    }
}
