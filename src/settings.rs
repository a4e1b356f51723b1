#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// Fallback settings path when no user config directory exists
const SETTINGS_FILE_PATH: &str = "config/blockfall.json";

/// Visual theme applied by the presentation layer. The engine stores it but
/// never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Neon,
    Pastel,
}

impl Theme {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Neon => "Neon",
            Theme::Pastel => "Pastel",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Theme::Classic => Theme::Neon,
            Theme::Neon => Theme::Pastel,
            Theme::Pastel => Theme::Classic,
        }
    }
}

/// Player settings, persisted as flat JSON
/// (`{"startingLevel": 1, "theme": "classic", "soundEnabled": true}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub starting_level: u32,
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_level: 1,
            theme: Theme::default(),
            sound_enabled: true,
        }
    }
}

// Load the settings from the file system, creating a default file on first run
pub fn load_settings() -> Result<GameSettings, SettingsError> {
    let path = settings_file_path();

    if !path.exists() {
        let defaults = GameSettings::default();
        save_settings(&defaults)?;
        return Ok(defaults);
    }

    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Result<GameSettings, SettingsError> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    Ok(settings)
}

// Save the settings to the file system
pub fn save_settings(settings: &GameSettings) -> Result<(), SettingsError> {
    save_settings_to(settings, &settings_file_path())
}

pub fn save_settings_to(settings: &GameSettings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

// Get the path to the settings file
fn settings_file_path() -> PathBuf {
    // Check for environment variable override
    if let Ok(path) = std::env::var("BLOCKFALL_SETTINGS") {
        return PathBuf::from(path);
    }

    // Otherwise use default path in user's config directory
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("blockfall").join("settings.json")
    } else {
        // Fallback to local directory
        PathBuf::from(SETTINGS_FILE_PATH)
    }
}

// Custom error type for settings operations
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Json(err)
    }
}
