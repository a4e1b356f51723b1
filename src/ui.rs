#![allow(
    // Board coordinates are small enough that casts between u16/i32/usize are lossless
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::settings::Theme;
use crate::tetromino::Tetromino;

// Each board cell is drawn 2 characters wide and 1 tall
const CELL_WIDTH: u16 = 2;

#[must_use]
pub fn theme_accent(theme: Theme) -> Color {
    match theme {
        Theme::Classic => Color::White,
        Theme::Neon => Color::LightMagenta,
        Theme::Pastel => Color::LightCyan,
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let board_width = BOARD_WIDTH as u16 * CELL_WIDTH + 2; // +2 for borders
    let board_height = BOARD_HEIGHT as u16 + 2;
    let min_info_width = 22u16;

    // Refuse to draw a truncated board; ask for a bigger terminal instead
    if f.area().width < board_width + min_info_width || f.area().height < board_height + 3 {
        let warning = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Blockfall"));
        f.render_widget(warning, f.area());
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width),
            Constraint::Min(min_info_width),
        ])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Title
            Constraint::Length(board_height),  // Board
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(6), // Score panel
            Constraint::Length(7), // Next piece
            Constraint::Min(7),    // Controls
        ])
        .split(main_layout[1]);

    let accent = theme_accent(app.settings.theme);

    let title = Paragraph::new("BLOCKFALL")
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_board(f, app, game_layout[1]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    render_score_panel(f, app, info_layout[1]);
    render_next_piece(f, app, info_layout[2]);

    let controls = Paragraph::new(
        "Controls:\n\
        ←/→: Move left/right\n\
        ↓: Soft drop\n\
        ↑: Rotate\n\
        Space: Hard drop\n\
        P: Pause  R: Restart\n\
        Esc: Menu  Q: Quit",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[3]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (position, color) in app.render_blocks() {
        if position.x < 0 || position.y < 0 {
            continue;
        }
        let x = position.x as u16;
        let y = position.y as u16;

        if x >= BOARD_WIDTH as u16 || y >= BOARD_HEIGHT as u16 {
            continue;
        }

        let block_x = inner.left() + x * CELL_WIDTH;
        let block_y = inner.top() + y;

        // Two buffer cells per board cell for square-ish proportions
        for dx in 0..CELL_WIDTH {
            if block_x + dx < inner.right() && block_y < inner.bottom() {
                if let Some(cell) = f.buffer_mut().cell_mut((block_x + dx, block_y)) {
                    cell.set_symbol("█");
                    cell.set_fg(color);
                    cell.set_bg(Color::Black);
                }
            }
        }
    }

    let session = &app.session;
    if session.game_over {
        render_overlay(f, inner, "GAME OVER", Color::Red);
    } else if session.paused {
        render_overlay(f, inner, "PAUSED", Color::Yellow);
    }
}

fn render_overlay(f: &mut Frame, inner: Rect, text: &str, color: Color) {
    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let width = text.len() as u16 + 2;
    let area = Rect {
        x: inner.x + inner.width.saturating_sub(width) / 2,
        y: inner.y + inner.height / 2,
        width: width.min(inner.width),
        height: 1,
    };
    f.render_widget(overlay, area);
}

fn render_score_panel(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let config = session.level_config();

    let stats = format!(
        "Score: {}\nLevel: {} - {}\nLines: {} / {}\nSpeed: {}ms",
        session.score,
        session.level,
        config.name,
        session.lines_cleared,
        config.lines_to_clear,
        session.fall_interval.as_millis(),
    );

    let panel = Paragraph::new(stats)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn render_next_piece(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Next");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(next) = &app.session.next else {
        return;
    };

    render_preview(f, next, inner);
}

// Draw a tetromino's shape matrix centered in the preview box
fn render_preview(f: &mut Frame, piece: &Tetromino, inner: Rect) {
    let rows = piece.shape.len() as u16;
    let cols = piece.shape.first().map_or(0, Vec::len) as u16;

    let x0 = inner.left() + inner.width.saturating_sub(cols * CELL_WIDTH) / 2;
    let y0 = inner.top() + inner.height.saturating_sub(rows) / 2;

    for (dx, dy) in piece.occupied_cells() {
        let block_x = x0 + dx as u16 * CELL_WIDTH;
        let block_y = y0 + dy as u16;

        for i in 0..CELL_WIDTH {
            if block_x + i < inner.right() && block_y < inner.bottom() {
                if let Some(cell) = f.buffer_mut().cell_mut((block_x + i, block_y)) {
                    cell.set_symbol("█");
                    cell.set_fg(piece.color);
                }
            }
        }
    }
}
