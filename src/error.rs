//! Centralized error types for the demo application.
//!
//! The widgets themselves never fail. Errors come from the application
//! around them: configuration, the terminal, and user-supplied data files.

use thiserror::Error;

use crate::config::ConfigError;
use crate::ui::RecordError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A data file could not be turned into table rows.
    #[error("{0}")]
    Data(#[from] RecordError),

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Data(e) => match e {
                RecordError::Json(_) => "Data file is not valid JSON.".to_string(),
                RecordError::NotAnArray => {
                    "Data file must contain a JSON array of objects.".to_string()
                }
                RecordError::NotAnObject(index) => {
                    format!("Data file entry {} is not a JSON object.", index)
                }
            },
            AppError::Io(_) => "A file operation failed. Please check the path and permissions."
                .to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Check if this error prevents the application from starting.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AppError::Terminal(_) | AppError::Data(_) | AppError::Io(_)
        )
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
