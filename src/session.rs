#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use log::{debug, info};

use crate::board::{Board, Position};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COLUMN, line_clear_score};
use crate::levels::{LEVELS, LevelConfig, level_by_id, next_level};
use crate::settings::GameSettings;
use crate::tetromino::{ShapeSet, Tetromino};

/// The piece currently falling. Exists only between a successful spawn and
/// the following lock; absent once the session is game over.
#[derive(Debug, Clone)]
pub struct ActivePiece {
    pub tetromino: Tetromino,
    pub position: Position,
    pub rotation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

/// One complete game: the single source of truth for everything the
/// presentation layer renders. Intents mutate the session in place; every
/// intent either fully applies or is a no-op. Game over is terminal — only
/// [`GameSession::restart`] escapes it, by rebuilding the session from the
/// settings it was constructed with.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub current: Option<ActivePiece>,
    pub next: Option<Tetromino>,
    pub score: u32,
    pub level: u32,
    /// Cumulative count of cleared lines. Never reset on level advance; each
    /// level's `lines_to_clear` is compared against this running total.
    pub lines_cleared: u32,
    pub paused: bool,
    pub game_over: bool,
    pub fall_interval: Duration,
    /// Timestamp of the last forced drop, in the host clock's milliseconds.
    pub last_drop_ms: u64,
    shape_set: ShapeSet,
    settings: GameSettings,
}

impl GameSession {
    /// Builds a fresh session from player settings. An unknown starting
    /// level falls back to the first entry of the level table wholesale.
    #[must_use]
    pub fn new(settings: &GameSettings) -> Self {
        let config = level_by_id(settings.starting_level).unwrap_or(&LEVELS[0]);

        let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        if config.pre_filled_rows > 0 {
            board = board.with_pre_filled_rows(config.pre_filled_rows);
        }

        let mut session = Self {
            board,
            current: None,
            next: None,
            score: 0,
            level: config.id,
            lines_cleared: 0,
            paused: false,
            game_over: false,
            fall_interval: config.fall_interval,
            last_drop_ms: 0,
            shape_set: config.shape_set,
            settings: settings.clone(),
        };

        debug!(
            "New session: level {} ({}), {} pre-filled rows",
            config.id, config.name, config.pre_filled_rows
        );

        session.spawn();
        session
    }

    /// The table entry for the session's current level.
    #[must_use]
    pub fn level_config(&self) -> &'static LevelConfig {
        level_by_id(self.level).unwrap_or(&LEVELS[0])
    }

    pub fn move_left(&mut self) {
        self.move_piece(MoveDirection::Left);
    }

    pub fn move_right(&mut self) {
        self.move_piece(MoveDirection::Right);
    }

    /// Single-row downward step, from player input or the fall timer.
    pub fn soft_drop(&mut self) {
        self.move_piece(MoveDirection::Down);
    }

    /// Moves the active piece one cell. A rejected left/right move is
    /// ignored; a rejected downward move locks the piece.
    pub fn move_piece(&mut self, direction: MoveDirection) {
        if self.game_over || self.paused {
            return;
        }
        let Some(piece) = &self.current else {
            return;
        };

        let candidate = match direction {
            MoveDirection::Left => Position {
                x: piece.position.x - 1,
                y: piece.position.y,
            },
            MoveDirection::Right => Position {
                x: piece.position.x + 1,
                y: piece.position.y,
            },
            MoveDirection::Down => Position {
                x: piece.position.x,
                y: piece.position.y + 1,
            },
        };

        if self.board.is_valid_position(&piece.tetromino, candidate) {
            if let Some(piece) = &mut self.current {
                piece.position = candidate;
            }
        } else if direction == MoveDirection::Down {
            self.lock();
        }
    }

    /// Replaces the active tetromino with its clockwise rotation when the
    /// rotated shape fits at the current position. There is no wall-kick
    /// search; a blocked rotation is dropped entirely.
    pub fn rotate(&mut self) {
        if self.game_over || self.paused {
            return;
        }
        let Some(piece) = &self.current else {
            return;
        };

        let rotated = piece.tetromino.rotated();
        if self.board.is_valid_position(&rotated, piece.position) {
            if let Some(piece) = &mut self.current {
                piece.tetromino = rotated;
                piece.rotation = (piece.rotation + 1) % 4;
            }
        }
    }

    /// Drops the active piece to its gravity resting position and locks it
    /// immediately.
    pub fn hard_drop(&mut self) {
        if self.game_over || self.paused {
            return;
        }
        let Some(piece) = &self.current else {
            return;
        };

        let landing = self
            .board
            .hard_drop_position(&piece.tetromino, piece.position);
        if let Some(piece) = &mut self.current {
            piece.position = landing;
        }
        self.lock();
    }

    /// Toggles the paused flag. Has no effect once the game is over.
    pub fn pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Discards the session and reinitializes from the original settings.
    pub fn restart(&mut self) {
        info!("Restarting session");
        let settings = self.settings.clone();
        *self = Self::new(&settings);
    }

    /// Clock-driven transition: forces one downward step whenever more than
    /// the current fall interval has elapsed since the last forced drop.
    /// `now_ms` is any monotonic millisecond timestamp from the host.
    pub fn tick(&mut self, now_ms: u64) {
        if self.game_over || self.paused {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        if now_ms.saturating_sub(self.last_drop_ms) > self.fall_interval.as_millis() as u64 {
            self.soft_drop();
            self.last_drop_ms = now_ms;
        }
    }

    /// Installs the pending next piece (generating both it and a fresh
    /// lookahead as needed) at the centered top spawn position. A colliding
    /// spawn ends the game and leaves no active piece.
    fn spawn(&mut self) {
        let tetromino = self
            .next
            .take()
            .unwrap_or_else(|| self.shape_set.random());
        self.next = Some(self.shape_set.random());

        let position = Position {
            x: SPAWN_COLUMN,
            y: 0,
        };

        if self.board.is_valid_position(&tetromino, position) {
            self.current = Some(ActivePiece {
                tetromino,
                position,
                rotation: 0,
            });
        } else {
            info!("Spawn blocked, game over at score {}", self.score);
            self.current = None;
            self.game_over = true;
        }
    }

    /// Merges the active piece into the board, clears lines, scores them at
    /// the current level, spawns the next piece and finally checks level
    /// advancement against the cumulative line total.
    fn lock(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let merged = self.board.place(&piece.tetromino, piece.position);
        let (cleared_board, lines) = merged.clear_lines();
        self.board = cleared_board;

        if lines > 0 {
            let points = line_clear_score(lines, self.level);
            self.score += points;
            info!("Cleared {lines} lines for {points} points");
        }
        self.lines_cleared += u32::try_from(lines).unwrap_or(u32::MAX);

        self.spawn();

        let config = self.level_config();
        if self.lines_cleared >= config.lines_to_clear {
            if let Some(next) = next_level(self.level) {
                info!("Advancing to level {} ({})", next.id, next.name);
                self.level = next.id;
                self.fall_interval = next.fall_interval;
            }
        }
    }
}
