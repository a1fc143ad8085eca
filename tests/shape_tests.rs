//! Shape tests - templates and clockwise rotation

use blockfall::core::{ActivePiece, Grid, Position, Shape};
use blockfall::types::PieceKind;

#[test]
fn test_templates_match_canonical_masks() {
    let cases = [
        (PieceKind::I, "1111"),
        (PieceKind::J, "100\n111"),
        (PieceKind::L, "001\n111"),
        (PieceKind::O, "11\n11"),
        (PieceKind::S, "011\n110"),
        (PieceKind::T, "010\n111"),
        (PieceKind::Z, "110\n011"),
    ];
    for (kind, text) in cases {
        assert_eq!(Some(Shape::template(kind)), Shape::parse(text), "{kind:?}");
    }
}

#[test]
fn test_i_rotates_to_vertical_bar() {
    let i = Shape::template(PieceKind::I).rotated_cw();
    assert_eq!((i.rows(), i.cols()), (4, 1));
    assert_eq!(i.cells().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_rotation_maps_cells_clockwise() {
    let l = Shape::template(PieceKind::L);
    let r = l.rotated_cw();
    for row in 0..r.rows() {
        for col in 0..r.cols() {
            assert_eq!(
                r.is_filled(row, col),
                l.is_filled(l.rows() - 1 - col, row),
                "({row}, {col})"
            );
        }
    }
    // 10
    // 10
    // 11
    assert_eq!(Some(r), Shape::parse("10\n10\n11"));
}

#[test]
fn test_rotation_keeps_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::template(kind);
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.cells().len(), 4, "{kind:?}");
        }
    }
}

#[test]
fn test_vertical_i_cannot_rotate_into_right_wall() {
    let grid = Grid::new(10, 20);
    let vertical = ActivePiece {
        kind: PieceKind::I,
        shape: Shape::template(PieceKind::I).rotated_cw(),
        position: Position::new(9, 5),
    };
    assert!(!vertical.collides(&grid));
    assert!(vertical.rotated().collides(&grid));
}

#[test]
fn test_from_rows_matches_parse() {
    let rows: [&[bool]; 2] = [&[true, true, false], &[false, true, true]];
    assert_eq!(Shape::from_rows(&rows), Some(Shape::template(PieceKind::Z)));
    assert_eq!(Shape::from_rows(&[]), None);
}
