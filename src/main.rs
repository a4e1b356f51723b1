#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use blockfall::app::{App, AppResult};
use blockfall::menu_types::{Screen, SettingsOption, WelcomeOption};
use blockfall::settings;
use blockfall::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Send stderr (and with it the logger) to a file so log lines don't
    // corrupt the alternate screen
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("blockfall.log")?;

    let stderr_fd = io::stderr().as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: redirecting stderr to our log file with standard POSIX operations
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting blockfall");

    let game_settings = match settings::load_settings() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load settings: {e:?}");
            settings::GameSettings::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(game_settings);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> AppResult<()> {
    let render_rate = Duration::from_millis(33); // ~30 FPS
    let started = Instant::now();
    let mut last_render = Instant::now();

    // Leaving this loop drops the session and with it the tick clock, so no
    // transition can fire against a torn-down game
    loop {
        if app.should_quit {
            return Ok(());
        }

        if last_render.elapsed() >= render_rate {
            terminal.draw(|f| match app.menu.screen {
                Screen::Welcome => app.menu_renderer.render_welcome(f, &app.menu, &app.settings),
                Screen::Settings => app.menu_renderer.render_settings(f, &app.menu, &app.settings),
                Screen::Game => ui::render(f, &app),
            })?;
            last_render = Instant::now();
        }

        // Gravity only advances while the gameplay screen is up
        if app.menu.screen == Screen::Game {
            #[allow(clippy::cast_possible_truncation)]
            app.session.tick(started.elapsed().as_millis() as u64);
        }

        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                debug!("Key event: {key:?}");

                match app.menu.screen {
                    Screen::Welcome => handle_welcome_key(&mut app, key.code),
                    Screen::Settings => handle_settings_key(&mut app, key.code),
                    Screen::Game => handle_game_key(&mut app, key.code),
                }
            }
        }
    }
}

fn handle_welcome_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('w') => app.menu_renderer.prev_option(&mut app.menu),
        KeyCode::Down | KeyCode::Char('s') => app.menu_renderer.next_option(&mut app.menu),
        KeyCode::Enter | KeyCode::Char(' ') => match app.menu.welcome_selected {
            WelcomeOption::StartGame => app.start_game(),
            WelcomeOption::Settings => app.menu.screen = Screen::Settings,
            WelcomeOption::Quit => app.should_quit = true,
        },
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('w') => app.menu_renderer.prev_option(&mut app.menu),
        KeyCode::Down | KeyCode::Char('s') => app.menu_renderer.next_option(&mut app.menu),
        KeyCode::Left | KeyCode::Char('a') => {
            app.menu_renderer
                .adjust_setting(&app.menu, &mut app.settings, -1);
        }
        KeyCode::Right | KeyCode::Char('d') => {
            app.menu_renderer
                .adjust_setting(&app.menu, &mut app.settings, 1);
        }
        KeyCode::Enter if app.menu.settings_selected == SettingsOption::Back => {
            leave_settings(app);
        }
        KeyCode::Esc => leave_settings(app),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn leave_settings(app: &mut App) {
    if let Err(e) = settings::save_settings(&app.settings) {
        error!("Failed to save settings: {e:?}");
    }
    app.menu.screen = Screen::Welcome;
}

fn handle_game_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('a') => app.session.move_left(),
        KeyCode::Right | KeyCode::Char('d') => app.session.move_right(),
        KeyCode::Down | KeyCode::Char('s') => app.session.soft_drop(),
        KeyCode::Up | KeyCode::Char('w') => app.session.rotate(),
        KeyCode::Char(' ') => app.session.hard_drop(),
        KeyCode::Char('p') => app.session.pause(),
        KeyCode::Char('r') => app.session.restart(),
        KeyCode::Esc => app.menu.screen = Screen::Welcome,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
