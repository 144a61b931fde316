//! lazywidgets - an interactive gallery of the input field and data table
//! widgets.

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info, warn};

use lazywidgets::app::App;
use lazywidgets::config::Settings;
use lazywidgets::error::{AppError, Result};
use lazywidgets::events::EventHandler;
use lazywidgets::logging;
use lazywidgets::ui::{parse_records, Record, StoryCatalog, StoryOptions, Theme};

/// Browse the lazywidgets input field and data table stories.
#[derive(Debug, Parser)]
#[command(name = "lazywidgets", version, about)]
struct Cli {
    /// Story to open, as `Group/Name` or a bare story name.
    #[arg(short, long)]
    story: Option<String>,

    /// Base theme: light or dark.
    #[arg(short, long)]
    theme: Option<Theme>,

    /// JSON file with an array of objects to show in the demo table.
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Event loop tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,

    /// Print the story names and exit.
    #[arg(short, long)]
    list: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = match logging::init() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let result = run(cli);
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, critical = e.is_critical(), "Exiting with error");
            eprintln!("Error: {}", e.user_message());
            if let Some(dir) = log_dir {
                eprintln!("Logs: {}", dir.display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using default: {}", e);
        Settings::default()
    });
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(tick_rate) = cli.tick_rate {
        settings.tick_rate_ms = tick_rate;
    }
    settings.validate()?;

    let records = cli.data.as_deref().map(load_records).transpose()?;
    let mut catalog = StoryCatalog::new(StoryOptions {
        theme: settings.theme,
        spinner: settings.spinner,
        records,
    });

    if cli.list {
        for name in catalog.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(name) = cli.story.as_ref().or(settings.default_story.as_ref()) {
        if !catalog.select(name) {
            return Err(AppError::other(format!("No story named '{}'", name)));
        }
    }

    let mut terminal = setup_terminal()?;
    let result = event_loop(
        &mut terminal,
        App::new(catalog, settings.theme),
        EventHandler::with_tick_rate(settings.tick_rate_ms),
    );
    restore_terminal(&mut terminal)?;
    result
}

/// Read a JSON array of objects into table records.
fn load_records(path: &Path) -> Result<Vec<Record>> {
    let contents = std::fs::read_to_string(path)?;
    let records = parse_records(&contents)?;
    info!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    or_rollback(enter_screen, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Run `step`; on failure run `rollback` before returning the error.
fn or_rollback<T>(step: impl FnOnce() -> io::Result<T>, rollback: impl FnOnce()) -> Result<T> {
    step().map_err(|e| {
        rollback();
        AppError::terminal(e.to_string())
    })
}

fn enter_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal(e.to_string()))
}

fn event_loop(terminal: &mut Tui, mut app: App, events: EventHandler) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        app.update(events.next()?);
    }
    info!("Event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_rolls_back() {
        let rolled_back = Cell::new(false);
        let result: Result<()> = or_rollback(
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || rolled_back.set(true),
        );

        assert!(matches!(result, Err(AppError::Terminal(_))));
        assert!(rolled_back.get());
    }

    #[test]
    fn test_successful_setup_keeps_state() {
        let rolled_back = Cell::new(false);
        let result = or_rollback(|| Ok(7), || rolled_back.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back.get());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["lazywidgets", "--theme", "dark", "--story", "All States"])
            .unwrap();
        assert_eq!(cli.theme, Some(Theme::Dark));
        assert_eq!(cli.story.as_deref(), Some("All States"));
        assert!(!cli.list);
    }
}
