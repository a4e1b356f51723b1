#[cfg(test)]
mod tests {
    use crate::settings::{
        GameSettings, Theme, load_settings_from, save_settings_to,
    };

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.starting_level, 1);
        assert_eq!(settings.theme, Theme::Classic);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");

        let settings = GameSettings {
            starting_level: 5,
            theme: Theme::Neon,
            sound_enabled: false,
        };

        save_settings_to(&settings, &path).expect("save settings");
        let loaded = load_settings_from(&path).expect("load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("settings.json");

        save_settings_to(&GameSettings::default(), &path).expect("save settings");
        assert!(path.exists());
    }

    #[test]
    fn test_flat_json_layout() {
        // The persisted layout is flat camelCase JSON
        let json = serde_json::to_string(&GameSettings::default()).expect("serialize");
        assert!(json.contains("\"startingLevel\":1"));
        assert!(json.contains("\"theme\":\"classic\""));
        assert!(json.contains("\"soundEnabled\":true"));
    }

    #[test]
    fn test_parses_external_layout() {
        let parsed: GameSettings =
            serde_json::from_str(r#"{"startingLevel":3,"theme":"neon","soundEnabled":false}"#)
                .expect("parse settings");
        assert_eq!(
            parsed,
            GameSettings {
                starting_level: 3,
                theme: Theme::Neon,
                sound_enabled: false,
            }
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_settings_from(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::Classic.next(), Theme::Neon);
        assert_eq!(Theme::Neon.next(), Theme::Pastel);
        assert_eq!(Theme::Pastel.next(), Theme::Classic);
    }
}
