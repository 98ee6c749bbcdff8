use std::{fs, path::PathBuf};

use log::LevelFilter;
use mazegraph::Algorithm;
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::helpers::constants::paths::settings_path;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Named maze shipped in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazePreset {
    pub title: String,
    pub rows: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LevelFilter>,
    #[serde(default)]
    pub default_algorithm: Option<Algorithm>,
    #[serde(default)]
    pub clear_on_start: Option<bool>,
    #[serde(default)]
    pub mazes: Option<Vec<MazePreset>>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        settings_path()
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        self.log_level.unwrap_or(LevelFilter::Warn)
    }

    pub fn get_default_algorithm(&self) -> Algorithm {
        self.default_algorithm.unwrap_or_default()
    }

    pub fn get_clear_on_start(&self) -> bool {
        self.clear_on_start.unwrap_or_default()
    }

    pub fn get_mazes(&self) -> Vec<MazePreset> {
        self.mazes.clone().unwrap_or_default()
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(text)?)
    }

    /// Loads settings from `path`, writing the defaults there first if the file is missing.
    pub fn load(path: PathBuf) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("creating default settings at {:?}", path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, DEFAULT_SETTINGS)?;
                DEFAULT_SETTINGS.to_string()
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_ron(&text)
    }

    /// Like [`Settings::load`], but falls back to the built-in defaults on any error.
    pub fn load_or_default(path: PathBuf) -> Self {
        match Self::load(path.clone()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("using default settings, {:?} is unusable: {}", path, err);
                Self::builtin()
            }
        }
    }

    /// Defaults compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_ron(DEFAULT_SETTINGS).unwrap_or_default()
    }

    pub fn reset_config(path: PathBuf) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();
        assert!(settings.get_color());
        assert_eq!(settings.get_log_level(), LevelFilter::Warn);
        assert!(!settings.get_mazes().is_empty());
        for preset in settings.get_mazes() {
            assert!(
                mazegraph::MazeGraph::new(&preset.rows).is_ok(),
                "preset {:?} is not a valid maze",
                preset.title
            );
        }
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron("()").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.get_color());
        assert_eq!(settings.get_default_algorithm(), Algorithm::DepthFirst);
        assert!(settings.get_mazes().is_empty());
    }

    #[test]
    fn implicit_some() {
        let settings =
            Settings::from_ron("(color: false, default_algorithm: BreadthFirst)").unwrap();
        assert!(!settings.get_color());
        assert_eq!(settings.get_default_algorithm(), Algorithm::BreadthFirst);
    }

    #[test]
    fn presets_and_level_are_read() {
        let settings = Settings::from_ron(
            r#"(log_level: Debug, clear_on_start: true, mazes: [(title: "tiny", rows: ["SE"])])"#,
        )
        .unwrap();

        assert_eq!(settings.get_log_level(), LevelFilter::Debug);
        assert!(settings.get_clear_on_start());
        assert_eq!(
            settings.get_mazes(),
            vec![MazePreset {
                title: "tiny".into(),
                rows: vec!["SE".into()],
            }]
        );
    }

    #[test]
    fn broken_file_is_an_error() {
        assert!(matches!(
            Settings::from_ron("(color: maybe)"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn load_creates_missing_file() {
        let dir =
            std::env::temp_dir().join(format!("mazesolver-settings-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(settings.get_mazes(), Settings::builtin().get_mazes());

        let _ = fs::remove_dir_all(&dir);
    }
}
