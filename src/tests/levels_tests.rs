#[cfg(test)]
mod tests {
    use crate::levels::{LEVELS, level_by_id, next_level};
    use crate::tetromino::ShapeSet;

    #[test]
    fn test_table_has_eight_sequential_levels() {
        assert_eq!(LEVELS.len(), 8);
        for (i, level) in LEVELS.iter().enumerate() {
            assert_eq!(level.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_difficulty_increases_down_the_table() {
        for pair in LEVELS.windows(2) {
            assert!(
                pair[1].fall_interval < pair[0].fall_interval,
                "fall interval should shrink from level {} to {}",
                pair[0].id,
                pair[1].id
            );
            assert!(pair[1].lines_to_clear > pair[0].lines_to_clear);
            assert!(pair[1].score_multiplier > pair[0].score_multiplier);
        }
    }

    #[test]
    fn test_level_lookup() {
        let beginner = level_by_id(1).expect("level 1 exists");
        assert_eq!(beginner.name, "Beginner");
        assert_eq!(beginner.fall_interval.as_millis(), 1000);
        assert_eq!(beginner.lines_to_clear, 10);
        assert_eq!(beginner.pre_filled_rows, 0);

        assert!(level_by_id(0).is_none());
        assert!(level_by_id(9).is_none());
    }

    #[test]
    fn test_next_level_chain() {
        let mut id = 1;
        let mut visited = 1;
        while let Some(next) = next_level(id) {
            assert_eq!(next.id, id + 1);
            id = next.id;
            visited += 1;
        }
        assert_eq!(visited, LEVELS.len());

        // The final level has no successor
        assert!(next_level(8).is_none());
        assert!(next_level(42).is_none());
    }

    #[test]
    fn test_pre_filled_rows_on_upper_levels() {
        let expected = [0, 0, 0, 0, 2, 4, 6, 8];
        for (level, rows) in LEVELS.iter().zip(expected) {
            assert_eq!(level.pre_filled_rows, rows, "level {}", level.id);
        }
    }

    #[test]
    fn test_extended_shapes_only_on_impossible() {
        for level in &LEVELS[..7] {
            assert_eq!(level.shape_set, ShapeSet::Standard);
        }
        assert_eq!(LEVELS[7].shape_set, ShapeSet::Impossible);
    }
}
