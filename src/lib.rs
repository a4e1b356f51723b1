pub mod app;
pub mod board;
pub mod game;
pub mod levels;
pub mod menu;
pub mod menu_types;
pub mod session;
pub mod settings;
pub mod tetromino;
pub mod ui;

#[cfg(test)]
mod tests;
