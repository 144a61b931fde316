//! File logging for the gallery binary.
//!
//! Output goes to a daily rotating file under the platform data directory,
//! never to the terminal the widgets draw on. `RUST_LOG` picks the level:
//!
//! - `lazywidgets=debug` adds sort and selection transitions
//! - `lazywidgets=trace` adds every key the widgets see

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::config::APP_NAME;

/// Log file name prefix; the appender adds the date.
const LOG_FILE_PREFIX: &str = "lazywidgets.log";

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "lazywidgets=info,warn";

/// Install the file subscriber and return the directory it writes to.
///
/// # Errors
///
/// Fails when the data directory is unknown or cannot be created, or when
/// a global subscriber is already installed.
///
/// ```no_run
/// let dir = lazywidgets::logging::init()?;
/// println!("logging to {}", dir.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init() -> anyhow::Result<PathBuf> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter_from(env.as_deref()))
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "lazywidgets starting up"
    );
    Ok(log_dir)
}

/// Build the level filter from a `RUST_LOG` value.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// `<data_local_dir>/lazywidgets/logs`.
pub fn log_directory() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("could not determine local data directory")?;
    Ok(base.join(APP_NAME).join("logs"))
}

/// Log a clean shutdown.
pub fn shutdown() {
    tracing::info!("lazywidgets shutting down");
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_log_directory_is_under_app_name() {
        let dir = log_directory().unwrap();
        assert!(dir.ends_with("lazywidgets/logs"));
    }

    #[test]
    fn test_default_filter_is_info() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_env_filter_is_used() {
        let filter = filter_from(Some("lazywidgets=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_bad_env_filter_falls_back_to_default() {
        let filter = filter_from(Some("lazywidgets=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
