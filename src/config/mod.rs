//! Configuration for the demo application.
//!
//! Settings live in a TOML file in the platform configuration directory.
//! A missing file is not an error: the defaults apply.

mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use settings::Settings;

/// Application name used for configuration and data directories.
pub const APP_NAME: &str = "lazywidgets";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory is unknown.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration directory could not be created.
    #[error("could not create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The configuration file could not be written.
    #[error("could not write configuration file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The configuration file is not valid TOML for [`Settings`].
    #[error("invalid configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The settings could not be serialized.
    #[error("could not serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A setting has an unusable value.
    #[error("invalid setting: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Path of the configuration file.
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join(APP_NAME).join(CONFIG_FILE))
}
