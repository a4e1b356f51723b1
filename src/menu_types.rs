// Screen the application is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Settings,
    Game,
}

// Welcome screen option selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeOption {
    StartGame,
    Settings,
    Quit,
}

// Settings screen option selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOption {
    StartingLevel,
    Theme,
    Sound,
    Back,
}

#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub screen: Screen,
    pub welcome_selected: WelcomeOption,
    pub settings_selected: SettingsOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            screen: Screen::Welcome,
            welcome_selected: WelcomeOption::StartGame,
            settings_selected: SettingsOption::StartingLevel,
        }
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }
}
