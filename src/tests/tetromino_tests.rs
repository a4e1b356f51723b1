#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::tetromino::{ShapeSet, Tetromino, TetrominoType};

    const ALL_TYPES: [TetrominoType; 12] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::T,
        TetrominoType::L,
        TetrominoType::J,
        TetrominoType::S,
        TetrominoType::Z,
        TetrominoType::E,
        TetrominoType::U,
        TetrominoType::F,
        TetrominoType::P,
        TetrominoType::Q,
    ];

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in ALL_TYPES {
            let original = Tetromino::new(kind);
            let rotated = original.rotated().rotated().rotated().rotated();
            assert_eq!(
                rotated.shape, original.shape,
                "four rotations should restore {kind:?}"
            );
        }
    }

    #[test]
    fn test_rotation_is_clockwise() {
        let t = Tetromino::new(TetrominoType::T);
        let rotated = t.rotated();
        // T pointing up becomes T pointing right
        assert_eq!(rotated.shape, vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn test_rotation_preserves_color_and_kind() {
        let piece = Tetromino::new(TetrominoType::S);
        let rotated = piece.rotated();
        assert_eq!(rotated.color, piece.color);
        assert_eq!(rotated.kind, piece.kind);
    }

    #[test]
    fn test_rectangular_matrix_changes_aspect() {
        // No catalog shape is rectangular, but the transform must handle one
        // uniformly: a 2x3 matrix rotates into a 3x2
        let piece = Tetromino {
            shape: vec![vec![1, 1, 1], vec![1, 0, 0]],
            color: Color::White,
            kind: TetrominoType::L,
        };
        let rotated = piece.rotated();
        assert_eq!(rotated.shape, vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn test_occupied_cells_match_shape() {
        let o = Tetromino::new(TetrominoType::O);
        let cells: Vec<(i32, i32)> = o.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        let i = Tetromino::new(TetrominoType::I);
        let cells: Vec<(i32, i32)> = i.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_shape_set_sizes() {
        assert_eq!(ShapeSet::Standard.types().len(), 7);
        assert_eq!(ShapeSet::Impossible.types().len(), 10);
        assert_eq!(ShapeSet::God.types().len(), 12);
    }

    #[test]
    fn test_random_draws_from_active_set() {
        for _ in 0..100 {
            let piece = ShapeSet::Standard.random();
            assert!(
                ShapeSet::Standard.types().contains(&piece.kind),
                "standard set produced {:?}",
                piece.kind
            );
        }

        for _ in 0..100 {
            let piece = ShapeSet::Impossible.random();
            assert!(ShapeSet::Impossible.types().contains(&piece.kind));
        }
    }

    #[test]
    fn test_new_piece_matches_catalog() {
        for kind in ALL_TYPES {
            let piece = Tetromino::new(kind);
            assert_eq!(piece.kind, kind);
            assert_eq!(piece.color, kind.color());
            assert!(
                piece.occupied_cells().count() >= 4,
                "{kind:?} should have at least four occupied sub-cells"
            );
        }
    }
}
