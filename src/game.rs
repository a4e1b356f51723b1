#![warn(clippy::all, clippy::pedantic)]

// Game board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Column where new pieces spawn (shape origin, horizontally centered)
pub const SPAWN_COLUMN: i32 = (BOARD_WIDTH as i32 / 2) - 1;

// Chance for each cell of a pre-filled row to contain a block
pub const PRE_FILL_CHANCE: f32 = 0.7;

// Base points for clearing 0..=4 lines at once, multiplied by the level id.
// Four simultaneous clears is the maximum a single piece can produce.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points awarded for clearing `lines` rows at once on level `level`.
///
/// The level table carries a `score_multiplier` field, but scoring scales by
/// the level id itself; the multiplier is reserved data.
#[must_use]
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0) * level
}
