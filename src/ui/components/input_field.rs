//! Labeled text input.
//!
//! `InputField` is a controlled component: the caller owns the value and
//! is told about edits through change events. The field never writes its
//! own value; an edit produces a [`ChangeEvent`] carrying the proposed value
//! and the caller decides whether to pass it back through
//! [`InputField::set_value`].
//!
//! The only state the field keeps for itself is whether a password is
//! currently shown in plain text.
//!
//! ## Keys
//!
//! - printable characters, `Backspace`, `Ctrl+U`: edit
//! - `Ctrl+L`: clear control
//! - `Ctrl+T`: show/hide password

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::loading::{LoadingIndicator, SpinnerStyle};
use crate::ui::theme::Theme;

/// Visual variant of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Bordered box with a tinted background.
    Filled,
    /// Bordered box.
    #[default]
    Outlined,
    /// No border.
    Ghost,
}

/// Size of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    /// One row, no border.
    Sm,
    /// Standard height.
    #[default]
    Md,
    /// Standard height plus vertical padding.
    Lg,
}

/// Kind of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text.
    #[default]
    Text,
    /// Masked text.
    Password,
}

/// The element a change event refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTarget {
    /// The proposed new value.
    pub value: String,
}

/// Payload of the change callback, shaped like `{ target: { value } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The changed element.
    pub target: ChangeTarget,
}

impl ChangeEvent {
    /// Create a change event proposing `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                value: value.into(),
            },
        }
    }

    /// The proposed new value.
    pub fn value(&self) -> &str {
        &self.target.value
    }
}

/// Callback invoked for every change event.
pub type ChangeCallback = Box<dyn FnMut(&ChangeEvent)>;

/// Text shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine<'a> {
    /// Helper text, shown while valid.
    Helper(&'a str),
    /// Error message, shown while invalid.
    Error(&'a str),
}

/// Actions reported by [`InputField::handle_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFieldAction {
    /// An edit or the clear control proposed a new value.
    Changed(ChangeEvent),
    /// The password visibility toggle flipped; carries the new visibility.
    VisibilityToggled(bool),
}

/// Marker for the show-password control.
const SHOW_MARKER: &str = "[show]";

/// Marker for the hide-password control.
const HIDE_MARKER: &str = "[hide]";

/// Marker for the clear control.
const CLEAR_MARKER: &str = "[x]";

/// Mask character for hidden passwords.
const MASK_CHAR: char = '•';

/// A labeled text input widget.
pub struct InputField {
    value: String,
    on_change: Option<ChangeCallback>,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    variant: InputVariant,
    size: InputSize,
    input_type: InputType,
    show_clear_button: bool,
    theme: Theme,
    /// Whether a password is currently shown in plain text.
    show_password: bool,
    loader: LoadingIndicator,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    /// Create an empty text input with default props.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            on_change: None,
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            input_type: InputType::default(),
            show_clear_button: false,
            theme: Theme::default(),
            show_password: false,
            loader: LoadingIndicator::new(),
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Register the change callback.
    pub fn on_change(mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the label shown above the input.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder shown while empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the helper text.
    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Set the error message.
    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the invalid flag.
    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Set the loading flag.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set the input type.
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set whether the clear control is offered.
    pub fn with_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the spinner style used while loading.
    pub fn with_spinner(mut self, style: SpinnerStyle) -> Self {
        self.loader.set_style(style);
        self
    }

    /// Set the value. This is how the caller applies a change event.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Set the invalid flag.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Set the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Check if the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Check if the field is loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Check if a password is currently shown in plain text.
    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// The input type after applying password visibility.
    pub fn effective_type(&self) -> InputType {
        match self.input_type {
            InputType::Password if self.show_password => InputType::Text,
            other => other,
        }
    }

    /// The value as it is drawn: masked for hidden passwords.
    pub fn display_value(&self) -> String {
        match self.effective_type() {
            InputType::Password => MASK_CHAR.to_string().repeat(self.value.chars().count()),
            InputType::Text => self.value.clone(),
        }
    }

    /// Check if the show/hide password control is offered.
    pub fn shows_password_toggle(&self) -> bool {
        self.input_type == InputType::Password && !self.loading
    }

    /// Check if the clear control is offered.
    pub fn shows_clear_button(&self) -> bool {
        self.show_clear_button && !self.value.is_empty() && !self.loading
    }

    /// Check if the spinner is shown.
    pub fn shows_spinner(&self) -> bool {
        self.loading
    }

    /// The text under the input: helper text while valid, the error
    /// message while invalid. An invalid field without a message shows
    /// nothing.
    pub fn status_line(&self) -> Option<StatusLine<'_>> {
        if self.invalid {
            self.error_message.as_deref().map(StatusLine::Error)
        } else {
            self.helper_text.as_deref().map(StatusLine::Helper)
        }
    }

    /// Activate the show/hide password control.
    ///
    /// Returns the new visibility, or `None` when the control is not
    /// offered. Never changes the value.
    pub fn toggle_password_visibility(&mut self) -> Option<bool> {
        if !self.shows_password_toggle() {
            return None;
        }
        self.show_password = !self.show_password;
        debug!(visible = self.show_password, "Password visibility toggled");
        Some(self.show_password)
    }

    /// Activate the clear control.
    ///
    /// Emits a change event with an empty value, or returns `None` when the
    /// control is not offered.
    pub fn clear(&mut self) -> Option<ChangeEvent> {
        if !self.shows_clear_button() {
            return None;
        }
        Some(self.emit(String::new()))
    }

    /// Build a change event and hand it to the callback.
    fn emit(&mut self, value: String) -> ChangeEvent {
        let event = ChangeEvent::new(value);
        trace!(len = event.value().len(), "Input change event");
        if let Some(callback) = self.on_change.as_mut() {
            callback(&event);
        }
        event
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        if self.loading {
            self.loader.tick();
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns the resulting action, if any. Edits are ignored while
    /// disabled.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<InputFieldAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.clear().map(InputFieldAction::Changed)
            }
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => self
                .toggle_password_visibility()
                .map(InputFieldAction::VisibilityToggled),
            _ if self.disabled => None,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    None
                } else {
                    Some(InputFieldAction::Changed(self.emit(String::new())))
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let mut next = self.value.clone();
                next.push(c);
                Some(InputFieldAction::Changed(self.emit(next)))
            }
            (KeyCode::Backspace, _) => {
                let mut next = self.value.clone();
                next.pop()?;
                Some(InputFieldAction::Changed(self.emit(next)))
            }
            _ => None,
        }
    }

    /// Rows taken by the input box itself.
    fn box_height(&self) -> u16 {
        let bordered = self.variant != InputVariant::Ghost;
        match (self.size, bordered) {
            (InputSize::Sm, _) => 1,
            (InputSize::Md, true) => 3,
            (InputSize::Md, false) => 1,
            (InputSize::Lg, true) => 5,
            (InputSize::Lg, false) => 3,
        }
    }

    /// Total rows needed to render the label, box and status line.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        let status = u16::from(self.status_line().is_some());
        label + self.box_height() + status
    }

    /// Right-hand affordances: spinner, or show/hide and clear markers.
    fn affordances(&self) -> Vec<Span<'static>> {
        let palette = self.theme.palette();
        if self.shows_spinner() {
            return vec![Span::styled(
                self.loader.spinner_frame(),
                Style::default().fg(palette.accent),
            )];
        }

        let mut spans = Vec::new();
        if self.shows_password_toggle() {
            let marker = if self.show_password {
                HIDE_MARKER
            } else {
                SHOW_MARKER
            };
            spans.push(Span::styled(marker, Style::default().fg(palette.muted)));
        }
        if self.shows_clear_button() {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(CLEAR_MARKER, Style::default().fg(palette.muted)));
        }
        spans
    }

    /// Render the field.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let palette = self.theme.palette();
        let status = self.status_line();

        let [label_area, box_area, status_area] = Layout::vertical([
            Constraint::Length(u16::from(self.label.is_some())),
            Constraint::Length(self.box_height()),
            Constraint::Length(u16::from(status.is_some())),
        ])
        .areas(area);

        if let Some(label) = &self.label {
            let label = Paragraph::new(Span::styled(
                label.clone(),
                Style::default()
                    .fg(palette.label)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(label, label_area);
        }

        let background = if self.disabled {
            palette.disabled
        } else if self.variant == InputVariant::Filled {
            palette.fill
        } else {
            palette.bg
        };
        let border_color = if self.invalid {
            palette.error
        } else if focused && !self.disabled {
            palette.focus
        } else {
            palette.border
        };

        let mut block = Block::default().style(Style::default().bg(background));
        let bordered = self.variant != InputVariant::Ghost && self.size != InputSize::Sm;
        if bordered {
            block = block
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color));
        }
        if self.size == InputSize::Lg {
            block = block.padding(Padding::vertical(1));
        }
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let affordances = self.affordances();
        let affordance_width: u16 = affordances.iter().map(|s| s.width() as u16).sum();
        let [text_area, _, affordance_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(u16::from(affordance_width > 0)),
            Constraint::Length(affordance_width),
        ])
        .areas(Rect { height: inner.height.min(1), ..inner });

        let text_style = if self.disabled {
            Style::default().fg(palette.muted)
        } else {
            Style::default().fg(palette.fg)
        };
        let (text, style) = if self.value.is_empty() {
            (
                self.placeholder.clone().unwrap_or_default(),
                Style::default().fg(palette.muted),
            )
        } else {
            (
                visible_tail(&self.display_value(), text_area.width.saturating_sub(1)),
                text_style,
            )
        };
        frame.render_widget(Paragraph::new(Span::styled(text, style)), text_area);

        if !affordances.is_empty() {
            frame.render_widget(Paragraph::new(Line::from(affordances)), affordance_area);
        }

        if let Some(status) = status {
            let line = match status {
                StatusLine::Helper(text) => {
                    Span::styled(text.to_string(), Style::default().fg(palette.helper))
                }
                StatusLine::Error(text) => {
                    Span::styled(text.to_string(), Style::default().fg(palette.error))
                }
            };
            frame.render_widget(Paragraph::new(line), status_area);
        }

        if focused && !self.disabled && text_area.width > 0 {
            let shown = if self.value.is_empty() {
                0
            } else {
                visible_tail(&self.display_value(), text_area.width.saturating_sub(1))
                    .chars()
                    .count() as u16
            };
            frame.set_cursor_position(Position::new(text_area.x + shown, text_area.y));
        }
    }
}

/// The trailing `width` characters of `text`.
fn visible_tail(text: &str, width: u16) -> String {
    let count = text.chars().count();
    let skip = count.saturating_sub(width as usize);
    text.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&ChangeEvent) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |event: &ChangeEvent| {
            sink.borrow_mut().push(event.value().to_string())
        })
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(field: &InputField) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                field.render(frame, area, true);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_defaults() {
        let field = InputField::new();
        assert_eq!(field.value(), "");
        assert_eq!(field.variant, InputVariant::Outlined);
        assert_eq!(field.size, InputSize::Md);
        assert_eq!(field.input_type, InputType::Text);
        assert_eq!(field.theme, Theme::Light);
        assert!(!field.shows_clear_button());
        assert!(!field.shows_password_toggle());
    }

    #[test]
    fn test_password_toggle_reveals_without_change_event() {
        let (calls, callback) = recorder();
        let mut field = InputField::new()
            .with_type(InputType::Password)
            .with_value("secret")
            .on_change(callback);
        assert_eq!(field.display_value(), "••••••");

        assert_eq!(field.toggle_password_visibility(), Some(true));
        assert_eq!(field.effective_type(), InputType::Text);
        assert_eq!(field.display_value(), "secret");
        assert_eq!(field.value(), "secret");

        assert_eq!(field.toggle_password_visibility(), Some(false));
        assert_eq!(field.display_value(), "••••••");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_password_mask_counts_characters() {
        let field = InputField::new()
            .with_type(InputType::Password)
            .with_value("héllo");
        assert_eq!(field.display_value(), "•••••");
    }

    #[test]
    fn test_toggle_on_text_input_is_noop() {
        let mut field = InputField::new().with_value("abc");
        assert_eq!(field.toggle_password_visibility(), None);
        assert_eq!(field.effective_type(), InputType::Text);
    }

    #[test]
    fn test_clear_emits_empty_value_once() {
        let (calls, callback) = recorder();
        let mut field = InputField::new()
            .with_clear_button(true)
            .with_value("abc")
            .on_change(callback);

        let event = field.clear().unwrap();
        assert_eq!(event, ChangeEvent::new(""));
        assert_eq!(*calls.borrow(), vec![String::new()]);
        // Controlled: the caller applies the change.
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_clear_needs_value_and_flag() {
        let mut field = InputField::new().with_clear_button(true);
        assert!(!field.shows_clear_button());
        assert!(field.clear().is_none());

        let mut field = InputField::new().with_value("abc");
        assert!(field.clear().is_none());
    }

    #[test]
    fn test_loading_suppresses_affordances() {
        let (calls, callback) = recorder();
        let mut field = InputField::new()
            .with_type(InputType::Password)
            .with_clear_button(true)
            .with_value("abc")
            .with_loading(true)
            .on_change(callback);

        assert!(field.shows_spinner());
        assert!(!field.shows_clear_button());
        assert!(!field.shows_password_toggle());
        assert!(field.clear().is_none());
        assert!(field.toggle_password_visibility().is_none());
        assert!(calls.borrow().is_empty());

        field.set_loading(false);
        assert!(field.shows_clear_button());
        assert!(field.shows_password_toggle());
    }

    #[test]
    fn test_status_line_is_exclusive() {
        let mut field = InputField::new()
            .with_helper_text("help")
            .with_error_message("bad");
        assert_eq!(field.status_line(), Some(StatusLine::Helper("help")));

        field.set_invalid(true);
        assert_eq!(field.status_line(), Some(StatusLine::Error("bad")));
    }

    #[test]
    fn test_invalid_without_message_shows_nothing() {
        let field = InputField::new()
            .with_helper_text("help")
            .with_invalid(true);
        assert_eq!(field.status_line(), None);
    }

    #[test]
    fn test_typing_emits_proposed_value() {
        let (calls, callback) = recorder();
        let mut field = InputField::new().with_value("ab").on_change(callback);

        let action = field.handle_input(key(KeyCode::Char('c')));
        assert_eq!(action, Some(InputFieldAction::Changed(ChangeEvent::new("abc"))));

        field.handle_input(key(KeyCode::Backspace));
        field.handle_input(ctrl('u'));
        assert_eq!(*calls.borrow(), vec!["abc", "a", ""]);
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_backspace_and_ctrl_u_on_empty_do_nothing() {
        let (calls, callback) = recorder();
        let mut field = InputField::new().on_change(callback);
        assert!(field.handle_input(key(KeyCode::Backspace)).is_none());
        assert!(field.handle_input(ctrl('u')).is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_disabled_ignores_typing() {
        let (calls, callback) = recorder();
        let mut field = InputField::new()
            .with_disabled(true)
            .with_value("abc")
            .on_change(callback);
        assert!(field.handle_input(key(KeyCode::Char('x'))).is_none());
        assert!(field.handle_input(key(KeyCode::Backspace)).is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_control_keys() {
        let mut field = InputField::new()
            .with_type(InputType::Password)
            .with_clear_button(true)
            .with_value("pw");

        assert_eq!(
            field.handle_input(ctrl('t')),
            Some(InputFieldAction::VisibilityToggled(true))
        );
        assert_eq!(
            field.handle_input(ctrl('l')),
            Some(InputFieldAction::Changed(ChangeEvent::new("")))
        );
    }

    #[test]
    fn test_height_by_size_and_variant() {
        let field = InputField::new();
        assert_eq!(field.height(), 3);

        let field = InputField::new()
            .with_label("Name")
            .with_helper_text("help")
            .with_size(InputSize::Lg);
        assert_eq!(field.height(), 7);

        let field = InputField::new().with_variant(InputVariant::Ghost);
        assert_eq!(field.height(), 1);

        let field = InputField::new().with_size(InputSize::Sm);
        assert_eq!(field.height(), 1);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("hello", 3), "llo");
        assert_eq!(visible_tail("hi", 10), "hi");
        assert_eq!(visible_tail("hi", 0), "");
    }

    #[test]
    fn test_render_label_placeholder_and_helper() {
        let field = InputField::new()
            .with_label("Name")
            .with_placeholder("Enter your name")
            .with_helper_text("Type your full name");
        let text = render(&field);
        assert!(text.contains("Name"));
        assert!(text.contains("Enter your name"));
        assert!(text.contains("Type your full name"));
    }

    #[test]
    fn test_render_masked_then_plain() {
        let mut field = InputField::new()
            .with_type(InputType::Password)
            .with_value("secret");
        let text = render(&field);
        assert!(text.contains("••••••"));
        assert!(text.contains(SHOW_MARKER));
        assert!(!text.contains("secret"));

        field.toggle_password_visibility();
        let text = render(&field);
        assert!(text.contains("secret"));
        assert!(text.contains(HIDE_MARKER));
    }

    #[test]
    fn test_render_error_replaces_helper() {
        let field = InputField::new()
            .with_helper_text("We'll never share your email")
            .with_error_message("Please enter a valid email address")
            .with_invalid(true);
        let text = render(&field);
        assert!(text.contains("Please enter a valid email address"));
        assert!(!text.contains("never share"));
    }

    #[test]
    fn test_render_loading_hides_clear_marker() {
        let field = InputField::new()
            .with_clear_button(true)
            .with_value("abc")
            .with_loading(true);
        let text = render(&field);
        assert!(!text.contains(CLEAR_MARKER));

        let field = InputField::new().with_clear_button(true).with_value("abc");
        assert!(render(&field).contains(CLEAR_MARKER));
    }
}
