#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use ratatui::style::Color;

use crate::game::PRE_FILL_CHANCE;
use crate::tetromino::{PALETTE, Tetromino};

/// Offset of a tetromino's shape-matrix origin relative to the board origin.
/// Row (`y`) increases downward, column (`x`) increases rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A fixed-size grid of settled cells. Each cell is either empty or holds the
/// color of a locked block. Dimensions never change after creation; the
/// session replaces the board wholesale on restart. All operations are pure
/// and return a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<Option<Color>>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![None; width]; height],
        }
    }

    /// Returns a board whose bottom `count` rows are populated: each cell
    /// independently holds a random palette color with probability
    /// [`PRE_FILL_CHANCE`], otherwise stays empty. Used at session creation
    /// for levels configured with pre-filled rows.
    #[must_use]
    pub fn with_pre_filled_rows(&self, count: usize) -> Self {
        let mut board = self.clone();

        for i in 0..count.min(board.height) {
            let y = board.height - 1 - i;
            board.rows[y] = (0..board.width)
                .map(|_| {
                    if fastrand::f32() < PRE_FILL_CHANCE {
                        Some(PALETTE[fastrand::usize(0..PALETTE.len())])
                    } else {
                        None
                    }
                })
                .collect();
        }

        board
    }

    /// Whether every occupied sub-cell of `piece` at `position` lands on an
    /// empty, in-bounds board cell. Rows above the board top are permitted so
    /// pieces can spawn partially above the visible board; left, right and
    /// bottom overflow are rejected.
    #[must_use]
    pub fn is_valid_position(&self, piece: &Tetromino, position: Position) -> bool {
        for (dx, dy) in piece.occupied_cells() {
            let x = position.x + dx;
            let y = position.y + dy;

            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return false;
            }

            if y >= 0 && self.rows[y as usize][x as usize].is_some() {
                return false;
            }
        }

        true
    }

    /// Returns a board with the piece's occupied sub-cells merged in as
    /// settled cells of the piece's color. Sub-cells falling outside the
    /// board are skipped; callers are expected to have validated the
    /// position first.
    #[must_use]
    pub fn place(&self, piece: &Tetromino, position: Position) -> Self {
        let mut board = self.clone();

        for (dx, dy) in piece.occupied_cells() {
            let x = position.x + dx;
            let y = position.y + dy;

            if x >= 0 && x < board.width as i32 && y >= 0 && y < board.height as i32 {
                board.rows[y as usize][x as usize] = Some(piece.color);
            }
        }

        board
    }

    /// The deepest valid position reachable from `position` by pure gravity,
    /// stepping one row down at a time with no horizontal movement.
    #[must_use]
    pub fn hard_drop_position(&self, piece: &Tetromino, position: Position) -> Position {
        let mut landing = position;

        while self.is_valid_position(
            piece,
            Position {
                x: landing.x,
                y: landing.y + 1,
            },
        ) {
            landing.y += 1;
        }

        landing
    }

    /// Removes every fully-occupied row, prepends an equal number of empty
    /// rows at the top, and returns the new board together with the number of
    /// rows removed.
    #[must_use]
    pub fn clear_lines(&self) -> (Self, usize) {
        let remaining: Vec<Vec<Option<Color>>> = self
            .rows
            .iter()
            .filter(|row| row.iter().any(Option::is_none))
            .cloned()
            .collect();

        let cleared = self.height - remaining.len();

        let mut rows = vec![vec![None; self.width]; cleared];
        rows.extend(remaining);

        (
            Self {
                width: self.width,
                height: self.height,
                rows,
            },
            cleared,
        )
    }
}
