//! Main application state and event loop.
//!
//! Follows The Elm Architecture: `update` folds events into state and
//! `view` draws the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use tracing::{debug, info, trace};

use crate::config::APP_NAME;
use crate::events::Event;
use crate::ui::{render_context_help, StoryCatalog, Theme};

/// The widget gallery application.
pub struct App {
    catalog: StoryCatalog,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Create the application over a story catalog.
    pub fn new(catalog: StoryCatalog, theme: Theme) -> Self {
        debug!(stories = catalog.len(), %theme, "Creating application");
        Self {
            catalog,
            theme,
            should_quit: false,
        }
    }

    /// The story catalog.
    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                trace!(key = ?key.code, modifiers = ?key.modifiers, "Key event");
                self.handle_key_event(key);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.catalog.current_mut().tick(),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('q')
                if key.modifiers.is_empty() && !self.catalog.current().captures_text() =>
            {
                self.quit()
            }
            KeyCode::Tab => {
                self.catalog.next();
                debug!(story = %self.catalog.current().qualified_name(), "Next story");
            }
            KeyCode::BackTab => {
                self.catalog.previous();
                debug!(story = %self.catalog.current().qualified_name(), "Previous story");
            }
            KeyCode::F(6) => {
                self.catalog.current_mut().switch_focus();
            }
            _ => self.catalog.current_mut().handle_input(key),
        }
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let palette = self.theme.palette();
        frame.render_widget(
            Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
            area,
        );

        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = Line::from(vec![
            Span::styled(format!(" {} ", APP_NAME), Style::default().fg(palette.accent)),
            Span::styled(
                format!(
                    "story {}/{}",
                    self.catalog.index() + 1,
                    self.catalog.len()
                ),
                Style::default().fg(palette.muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        let context = self.catalog.current().key_context();
        self.catalog
            .current_mut()
            .render(frame, content_area, self.theme);
        render_context_help(frame, footer_area, context, self.theme);
    }
}
