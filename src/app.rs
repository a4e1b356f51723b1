#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use ratatui::style::Color;

use crate::board::Position;
use crate::menu::MenuRenderer;
use crate::menu_types::{Menu, Screen};
use crate::session::GameSession;
use crate::settings::GameSettings;

pub type AppResult<T> = anyhow::Result<T>;

/// Everything the binary owns: the engine session, the player settings the
/// session was built from, and the screen-navigation state. No process-wide
/// globals; a new `App` is a fully independent instance.
pub struct App {
    pub session: GameSession,
    pub settings: GameSettings,
    pub menu: Menu,
    pub menu_renderer: MenuRenderer,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            session: GameSession::new(&settings),
            settings,
            menu: Menu::new(),
            menu_renderer: MenuRenderer::new(),
            should_quit: false,
        }
    }

    /// Tears down the current session and enters gameplay with a fresh one
    /// built from the current settings.
    pub fn start_game(&mut self) {
        self.session = GameSession::new(&self.settings);
        self.menu.screen = Screen::Game;
    }

    /// Projects settled cells plus the active piece into renderable
    /// (position, color) pairs. Sub-cells above the board top are included
    /// with negative rows; the renderer skips them.
    #[must_use]
    pub fn render_blocks(&self) -> Vec<(Position, Color)> {
        let mut blocks = Vec::new();

        for (y, row) in self.session.board.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    blocks.push((
                        Position {
                            x: x as i32,
                            y: y as i32,
                        },
                        *color,
                    ));
                }
            }
        }

        if let Some(piece) = &self.session.current {
            for (dx, dy) in piece.tetromino.occupied_cells() {
                blocks.push((
                    Position {
                        x: piece.position.x + dx,
                        y: piece.position.y + dy,
                    },
                    piece.tetromino.color,
                ));
            }
        }

        blocks
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
