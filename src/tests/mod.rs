#![warn(clippy::all, clippy::pedantic)]

pub mod levels_tests;
pub mod settings_tests;
pub mod tetromino_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use ratatui::style::Color;

    use crate::board::{Board, Position};
    use crate::session::{ActivePiece, GameSession};
    use crate::settings::GameSettings;
    use crate::tetromino::{Tetromino, TetrominoType};

    // Helper to create a session with default settings (level 1, empty board)
    #[must_use]
    pub fn create_test_session() -> GameSession {
        GameSession::new(&GameSettings::default())
    }

    // Fill an entire board row with settled blocks
    pub fn fill_row(board: &mut Board, y: usize) {
        for x in 0..board.width {
            board.rows[y][x] = Some(Color::Gray);
        }
    }

    // Fill a board row except for the given gap columns
    pub fn fill_row_except(board: &mut Board, y: usize, gaps: &[usize]) {
        for x in 0..board.width {
            if !gaps.contains(&x) {
                board.rows[y][x] = Some(Color::Gray);
            }
        }
    }

    // Install a specific piece as the session's active piece
    pub fn set_piece(session: &mut GameSession, kind: TetrominoType, x: i32, y: i32) {
        session.current = Some(ActivePiece {
            tetromino: Tetromino::new(kind),
            position: Position { x, y },
            rotation: 0,
        });
    }
}
