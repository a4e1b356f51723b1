#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use crate::tetromino::ShapeSet;

/// One entry of the static difficulty table.
///
/// `score_multiplier` is reserved data: the score formula in
/// [`crate::game::line_clear_score`] scales by the level id instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub id: u32,
    pub name: &'static str,
    /// Time between forced downward steps.
    pub fall_interval: Duration,
    /// Cumulative cleared-line total needed to advance past this level.
    pub lines_to_clear: u32,
    /// Rows seeded with random blocks at session creation. 0 means none.
    pub pre_filled_rows: usize,
    pub score_multiplier: f32,
    /// Shape pool used when a session starts on this level.
    pub shape_set: ShapeSet,
}

pub const LEVELS: &[LevelConfig] = &[
    LevelConfig {
        id: 1,
        name: "Beginner",
        fall_interval: Duration::from_millis(1000),
        lines_to_clear: 10,
        pre_filled_rows: 0,
        score_multiplier: 1.0,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 2,
        name: "Easy",
        fall_interval: Duration::from_millis(800),
        lines_to_clear: 15,
        pre_filled_rows: 0,
        score_multiplier: 1.2,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 3,
        name: "Medium",
        fall_interval: Duration::from_millis(600),
        lines_to_clear: 20,
        pre_filled_rows: 0,
        score_multiplier: 1.5,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 4,
        name: "Hard",
        fall_interval: Duration::from_millis(400),
        lines_to_clear: 25,
        pre_filled_rows: 0,
        score_multiplier: 2.0,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 5,
        name: "Expert",
        fall_interval: Duration::from_millis(300),
        lines_to_clear: 30,
        pre_filled_rows: 2,
        score_multiplier: 2.5,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 6,
        name: "Insane",
        fall_interval: Duration::from_millis(200),
        lines_to_clear: 35,
        pre_filled_rows: 4,
        score_multiplier: 3.0,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 7,
        name: "Nightmare",
        fall_interval: Duration::from_millis(150),
        lines_to_clear: 40,
        pre_filled_rows: 6,
        score_multiplier: 4.0,
        shape_set: ShapeSet::Standard,
    },
    LevelConfig {
        id: 8,
        name: "Impossible",
        fall_interval: Duration::from_millis(100),
        lines_to_clear: 50,
        pre_filled_rows: 8,
        score_multiplier: 5.0,
        shape_set: ShapeSet::Impossible,
    },
];

#[must_use]
pub fn level_by_id(id: u32) -> Option<&'static LevelConfig> {
    LEVELS.iter().find(|level| level.id == id)
}

/// The table entry following `id`, or `None` if `id` is the last level (or
/// unknown).
#[must_use]
pub fn next_level(id: u32) -> Option<&'static LevelConfig> {
    let index = LEVELS.iter().position(|level| level.id == id)?;
    LEVELS.get(index + 1)
}
