use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::levels::{LEVELS, level_by_id};
use crate::menu_types::{Menu, Screen, SettingsOption, WelcomeOption};
use crate::settings::GameSettings;
use crate::ui::theme_accent;

const TITLE: &str = r"
 ____  _     ___   ____ _  __ _____ _    _     _
| __ )| |   / _ \ / ___| |/ /|  ___/ \  | |   | |
|  _ \| |  | | | | |   | ' / | |_ / _ \ | |   | |
| |_) | |__| |_| | |___| . \ |  _/ ___ \| |___| |___
|____/|_____\___/ \____|_|\_\|_|/_/   \_\_____|_____|";

pub struct MenuRenderer;

impl MenuRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn next_option(&self, menu: &mut Menu) {
        match menu.screen {
            Screen::Welcome => {
                menu.welcome_selected = match menu.welcome_selected {
                    WelcomeOption::StartGame => WelcomeOption::Settings,
                    WelcomeOption::Settings => WelcomeOption::Quit,
                    WelcomeOption::Quit => WelcomeOption::StartGame,
                };
            }
            Screen::Settings => {
                menu.settings_selected = match menu.settings_selected {
                    SettingsOption::StartingLevel => SettingsOption::Theme,
                    SettingsOption::Theme => SettingsOption::Sound,
                    SettingsOption::Sound => SettingsOption::Back,
                    SettingsOption::Back => SettingsOption::StartingLevel,
                };
            }
            Screen::Game => {}
        }
    }

    pub fn prev_option(&self, menu: &mut Menu) {
        match menu.screen {
            Screen::Welcome => {
                menu.welcome_selected = match menu.welcome_selected {
                    WelcomeOption::StartGame => WelcomeOption::Quit,
                    WelcomeOption::Settings => WelcomeOption::StartGame,
                    WelcomeOption::Quit => WelcomeOption::Settings,
                };
            }
            Screen::Settings => {
                menu.settings_selected = match menu.settings_selected {
                    SettingsOption::StartingLevel => SettingsOption::Back,
                    SettingsOption::Theme => SettingsOption::StartingLevel,
                    SettingsOption::Sound => SettingsOption::Theme,
                    SettingsOption::Back => SettingsOption::Sound,
                };
            }
            Screen::Game => {}
        }
    }

    /// Adjusts the value of the highlighted settings row. `delta` is -1 for
    /// left and +1 for right; the starting level wraps around the table ends.
    pub fn adjust_setting(&self, menu: &Menu, settings: &mut GameSettings, delta: i32) {
        match menu.settings_selected {
            SettingsOption::StartingLevel => {
                let count = LEVELS.len() as i32;
                let index = LEVELS
                    .iter()
                    .position(|level| level.id == settings.starting_level)
                    .unwrap_or(0) as i32;
                let next = (index + delta).rem_euclid(count);
                settings.starting_level = LEVELS[next as usize].id;
            }
            SettingsOption::Theme => {
                settings.theme = settings.theme.next();
            }
            SettingsOption::Sound => {
                settings.sound_enabled = !settings.sound_enabled;
            }
            SettingsOption::Back => {}
        }
    }

    pub fn render_welcome(&self, f: &mut Frame, menu: &Menu, settings: &GameSettings) {
        let accent = theme_accent(settings.theme);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(7), // Title banner
                Constraint::Length(2),
                Constraint::Length(6), // Options
                Constraint::Length(3), // Hint
                Constraint::Fill(1),
            ])
            .split(f.area());

        let title = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD));
        f.render_widget(title, layout[1]);

        let options = [
            (WelcomeOption::StartGame, "Start Game"),
            (WelcomeOption::Settings, "Settings"),
            (WelcomeOption::Quit, "Quit"),
        ];
        let lines: Vec<Line> = options
            .iter()
            .map(|(option, label)| option_line(label, *option == menu.welcome_selected, accent))
            .collect();

        let list = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(list, layout[3]);

        let hint = Paragraph::new("↑/↓ select   Enter confirm   Q quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, layout[4]);
    }

    pub fn render_settings(&self, f: &mut Frame, menu: &Menu, settings: &GameSettings) {
        let accent = theme_accent(settings.theme);

        let area = centered_box(46, 12, f.area());
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title("Settings")
                .style(Style::default().fg(accent)),
            area,
        );

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(area);

        let level_name = level_by_id(settings.starting_level).map_or("?", |level| level.name);

        let rows = [
            (
                SettingsOption::StartingLevel,
                format!(
                    "Starting level:  {} - {}",
                    settings.starting_level, level_name
                ),
            ),
            (
                SettingsOption::Theme,
                format!("Theme:           {}", settings.theme.label()),
            ),
            (
                SettingsOption::Sound,
                format!(
                    "Sound:           {}",
                    if settings.sound_enabled { "On" } else { "Off" }
                ),
            ),
            (SettingsOption::Back, "Save & Back".to_string()),
        ];

        for (i, (option, label)) in rows.iter().enumerate() {
            let line = option_line(label, *option == menu.settings_selected, accent);
            let row = Paragraph::new(line).alignment(Alignment::Center);
            f.render_widget(row, inner[i + 1]);
        }

        let hint = Paragraph::new("←/→ change   ↑/↓ select   Esc back")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, inner[5]);
    }
}

impl Default for MenuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn option_line(label: &str, selected: bool, accent: Color) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("▶ {label} ◀"),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::raw(format!("  {label}  ")))
    }
}

/// A fixed-size rect centered in `r`, clamped to the available area.
fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
