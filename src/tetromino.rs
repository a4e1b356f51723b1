#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Shape matrices are tiny; usize to i32 casts are lossless
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use ratatui::style::Color;

/// Type tags for every shape the game knows about. The base seven are always
/// available; the remaining tags only appear when an extended [`ShapeSet`] is
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrominoType {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
    E,
    U,
    F,
    P,
    Q,
}

// Shape template matrices. 0 = empty sub-cell, 1 = occupied. Matrices are not
// required to be square; rotation of a rectangular matrix changes its aspect.
const SHAPE_I: &[&[u8]] = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const SHAPE_O: &[&[u8]] = &[&[1, 1], &[1, 1]];
const SHAPE_T: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];
const SHAPE_L: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]];
const SHAPE_J: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]];
const SHAPE_S: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]];
const SHAPE_Z: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]];
const SHAPE_E: &[&[u8]] = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[1, 1, 1, 1], &[0, 0, 0, 0]];
const SHAPE_U: &[&[u8]] = &[&[1, 0, 1], &[1, 0, 1], &[1, 1, 1]];
const SHAPE_F: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1], &[1, 0, 1]];
const SHAPE_P: &[&[u8]] = &[&[1, 1, 0], &[1, 1, 1], &[0, 1, 0]];
const SHAPE_Q: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 1]];

// Colors of the seven base pieces, used as the palette for pre-filled rows.
pub const PALETTE: [Color; 7] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::LightYellow,
    Color::Blue,
    Color::Green,
    Color::Red,
];

impl TetrominoType {
    #[must_use]
    pub fn shape(self) -> &'static [&'static [u8]] {
        match self {
            TetrominoType::I => SHAPE_I,
            TetrominoType::O => SHAPE_O,
            TetrominoType::T => SHAPE_T,
            TetrominoType::L => SHAPE_L,
            TetrominoType::J => SHAPE_J,
            TetrominoType::S => SHAPE_S,
            TetrominoType::Z => SHAPE_Z,
            TetrominoType::E => SHAPE_E,
            TetrominoType::U => SHAPE_U,
            TetrominoType::F => SHAPE_F,
            TetrominoType::P => SHAPE_P,
            TetrominoType::Q => SHAPE_Q,
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            TetrominoType::I => Color::Cyan,
            TetrominoType::O => Color::Yellow,
            TetrominoType::T => Color::Magenta,
            TetrominoType::L => Color::LightYellow,
            TetrominoType::J => Color::Blue,
            TetrominoType::S => Color::Green,
            TetrominoType::Z => Color::Red,
            TetrominoType::E => Color::LightCyan,
            TetrominoType::U => Color::LightMagenta,
            TetrominoType::F => Color::LightGreen,
            TetrominoType::P => Color::LightBlue,
            TetrominoType::Q => Color::LightRed,
        }
    }
}

/// Which pool of shapes the piece generator draws from. Chosen once when a
/// session is constructed, based on the starting level's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeSet {
    #[default]
    Standard,
    Impossible,
    God,
}

const STANDARD_TYPES: &[TetrominoType] = &[
    TetrominoType::I,
    TetrominoType::O,
    TetrominoType::T,
    TetrominoType::L,
    TetrominoType::J,
    TetrominoType::S,
    TetrominoType::Z,
];

const IMPOSSIBLE_TYPES: &[TetrominoType] = &[
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
];

const GOD_TYPES: &[TetrominoType] = &[
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

impl ShapeSet {
    #[must_use]
    pub fn types(self) -> &'static [TetrominoType] {
        match self {
            ShapeSet::Standard => STANDARD_TYPES,
            ShapeSet::Impossible => IMPOSSIBLE_TYPES,
            ShapeSet::God => GOD_TYPES,
        }
    }

    /// Picks a fresh tetromino uniformly at random from this set. Every call
    /// is an independent sample; there is no bag fairness.
    #[must_use]
    pub fn random(self) -> Tetromino {
        let types = self.types();
        Tetromino::new(types[fastrand::usize(0..types.len())])
    }
}

/// An immutable piece value: shape matrix, color and type tag. Rotation
/// produces a new value rather than editing in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tetromino {
    pub shape: Vec<Vec<u8>>,
    pub color: Color,
    pub kind: TetrominoType,
}

impl Tetromino {
    #[must_use]
    pub fn new(kind: TetrominoType) -> Self {
        Self {
            shape: kind.shape().iter().map(|row| row.to_vec()).collect(),
            color: kind.color(),
            kind,
        }
    }

    /// The 90-degree-clockwise transform: transpose the matrix, then reverse
    /// each resulting row. Applies uniformly to rectangular matrices, whose
    /// aspect changes on rotation.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let rows = self.shape.len();
        let cols = self.shape.first().map_or(0, Vec::len);

        let shape = (0..cols)
            .map(|x| (0..rows).map(|y| self.shape[rows - 1 - y][x]).collect())
            .collect();

        Self {
            shape,
            color: self.color,
            kind: self.kind,
        }
    }

    /// Iterates the (column, row) offsets of every occupied sub-cell.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }
}
