//! Configuration management module.
//!
//! This module handles loading, validating and saving the application
//! configuration: timing, alert behavior, time presets, theme and hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{Hotkey, HotkeyAction, Hotkeys};

use crate::error::AppError;
use crate::events::alert::{VibrationPattern, DEFAULT_PULSE_MS};
use crate::state::{CountdownSettings, TimePickerButton, TimeUnit};
use crate::ui::Theme;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/arc-timer";

/// Alert signal settings.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,
    #[serde(default = "default_true")]
    pub repeat: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        AlertConfig {
            enabled: true,
            pulse_ms: DEFAULT_PULSE_MS,
            repeat: true,
        }
    }
}

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub tick_interval_ms: u64,
    pub urgency_threshold_secs: u64,
    pub log_level: String,
    pub alert: AlertConfig,
    pub presets: Vec<TimePickerButton>,
    pub hotkeys: Hotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_urgency_threshold_secs")]
    pub urgency_threshold_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub alert: AlertConfig,
    #[serde(default = "default_presets")]
    pub presets: Vec<TimePickerButton>,
    #[serde(default)]
    pub hotkeys: Option<Hotkeys>,
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_urgency_threshold_secs() -> u64 {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pulse_ms() -> u64 {
    DEFAULT_PULSE_MS
}

fn default_true() -> bool {
    true
}

/// Presets shown when the config does not list any: +10 min, +1 min, +15 sec.
///
pub fn default_presets() -> Vec<TimePickerButton> {
    vec![
        TimePickerButton::new(10, TimeUnit::Minute),
        TimePickerButton::new(1, TimeUnit::Minute),
        TimePickerButton::new(15, TimeUnit::Second),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            tick_interval_ms: default_tick_interval_ms(),
            urgency_threshold_secs: default_urgency_threshold_secs(),
            log_level: default_log_level(),
            alert: AlertConfig::default(),
            presets: default_presets(),
            hotkeys: Hotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided, or the
    /// default one otherwise. A missing file is created with the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_contents(&contents)?;
        } else {
            log::info!("Writing default configuration to {}", file_path.display());
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Replace the settings with those parsed from YAML `contents`.
    ///
    fn apply_contents(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.tick_interval_ms = data.tick_interval_ms;
        self.urgency_threshold_secs = data.urgency_threshold_secs;
        self.log_level = data.log_level;
        self.alert = data.alert;
        self.presets = data.presets;
        self.hotkeys = data
            .hotkeys
            .map(Hotkeys::merged_with_defaults)
            .unwrap_or_default();
        Ok(())
    }

    /// Check every value that the rest of the application relies on.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.presets.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "presets",
                message: "at least one preset is required".to_string(),
            });
        }
        if self.presets.len() > 9 {
            return Err(ConfigError::InvalidValue {
                field: "presets",
                message: "at most nine presets fit on screen".to_string(),
            });
        }
        if let Some(preset) = self.presets.iter().find(|p| p.amount == 0) {
            return Err(ConfigError::InvalidValue {
                field: "presets",
                message: format!("preset amount must be positive ({:?})", preset),
            });
        }
        if self.alert.enabled && self.alert.pulse_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "alert.pulse_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if Theme::by_name(&self.theme_name).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "theme_name",
                message: format!(
                    "unknown theme '{}', expected one of: {}",
                    self.theme_name,
                    Theme::names().join(", ")
                ),
            });
        }
        self.level_filter()?;
        if let Some(action) = self.hotkeys.find_preset_digit() {
            return Err(ConfigError::InvalidValue {
                field: "hotkeys",
                message: format!("{:?} is bound to a preset digit", action),
            });
        }
        if let Some((a, b)) = self.hotkeys.find_conflict() {
            return Err(ConfigError::InvalidValue {
                field: "hotkeys",
                message: format!("{:?} and {:?} share a key", a, b),
            });
        }
        Ok(())
    }

    /// Return the configured log level.
    ///
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "log_level",
                message: format!("unknown level '{}'", self.log_level),
            })
    }

    /// Return the countdown settings derived from this configuration.
    ///
    pub fn countdown_settings(&self) -> CountdownSettings {
        CountdownSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            pattern: VibrationPattern::from_step(self.alert.pulse_ms),
            repeat_alert: self.alert.repeat,
        }
    }

    /// Return the theme named in the configuration.
    ///
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme_name).unwrap_or_default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            tick_interval_ms: self.tick_interval_ms,
            urgency_threshold_secs: self.urgency_threshold_secs,
            log_level: self.log_level.clone(),
            alert: self.alert.clone(),
            presets: self.presets.clone(),
            hotkeys: Some(self.hotkeys.clone()),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn load_from(dir: &Path) -> Result<Config, AppError> {
        let mut config = Config::new();
        config.load(dir.to_str())?;
        Ok(config)
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.presets, default_presets());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(dir.path()).unwrap();
        let file_path = dir.path().join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));

        let reloaded = load_from(dir.path()).unwrap();
        assert_eq!(reloaded.presets, config.presets);
        assert_eq!(reloaded.hotkeys, config.hotkeys);
        assert_eq!(reloaded.alert, config.alert);
        assert_eq!(reloaded.theme_name, "midnight");
    }

    #[test]
    fn test_load_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        load_from(&nested).unwrap();
        assert!(nested.join(FILE_NAME).exists());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "tick_interval_ms: 250\npresets:\n  - amount: 5\n    unit: second\nhotkeys:\n  reset:\n    code: Char\n    char: x\n",
        )
        .unwrap();
        let config = load_from(dir.path()).unwrap();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.presets, vec![TimePickerButton::new(5, TimeUnit::Second)]);
        assert_eq!(config.urgency_threshold_secs, 6);
        assert_eq!(
            config.hotkeys.get(HotkeyAction::Reset).map(|h| h.code),
            Some(KeyCode::Char('x'))
        );
        assert_eq!(
            config.hotkeys.get(HotkeyAction::Quit).map(|h| h.code),
            Some(KeyCode::Char('q'))
        );
        assert_eq!(
            config.countdown_settings().tick_interval,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "presets: [oops").unwrap();
        assert!(matches!(
            load_from(dir.path()),
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::new();
        config.tick_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "tick_interval_ms", .. })
        ));

        let mut config = Config::new();
        config.presets.clear();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.presets.push(TimePickerButton::new(0, TimeUnit::Second));
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.theme_name = "no-such-theme".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "theme_name", .. })
        ));

        let mut config = Config::new();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.hotkeys.bind(HotkeyAction::Dismiss, Hotkey::char('q'));
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.hotkeys.bind(HotkeyAction::Quit, Hotkey::char('L'));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "hotkeys", .. })
        ));
    }

    #[test]
    fn test_preset_digit_bindings_are_rejected() {
        let mut config = Config::new();
        config.hotkeys.bind(HotkeyAction::Reset, Hotkey::char('1'));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "hotkeys", .. })
        ));

        let mut config = Config::new();
        config.hotkeys.bind(HotkeyAction::Reset, Hotkey::char('0'));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_silent_alert_allows_zero_pulse() {
        let mut config = Config::new();
        config.alert.enabled = false;
        config.alert.pulse_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_countdown_settings_pattern() {
        let mut config = Config::new();
        config.alert.pulse_ms = 100;
        config.alert.repeat = false;
        let settings = config.countdown_settings();
        assert_eq!(settings.pattern, VibrationPattern::from_step(100));
        assert!(!settings.repeat_alert);
    }
}
