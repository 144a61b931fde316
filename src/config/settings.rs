//! Application settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{config_path, ConfigError, Result};
use crate::ui::{SpinnerStyle, Theme};

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base theme for stories that do not pick their own.
    pub theme: Theme,
    /// Event loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Story to open on startup.
    pub default_story: Option<String>,
    /// Spinner style for loading states.
    pub spinner: SpinnerStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            tick_rate_ms: crate::events::TICK_RATE_MS,
            default_story: None,
            spinner: SpinnerStyle::Braille,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load settings from `path`, or the defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(ConfigError::WriteError)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
