//! The combined demo: a name input above a selectable table.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tracing::info;

use super::stories::describe_table_action;
use crate::events::KeyContext;
use crate::ui::components::{
    Column, DataTable, InputField, InputFieldAction, Record, Row, SpinnerStyle,
};
use crate::ui::theme::Theme;

/// Which demo widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoFocus {
    /// The name input.
    #[default]
    Input,
    /// The table.
    Table,
}

/// Name input plus a selectable record table.
pub struct DemoView {
    name: InputField,
    table: DataTable<Record>,
    focus: DemoFocus,
}

impl DemoView {
    /// Create the demo over `records`.
    ///
    /// Columns come from the fields of the first record, or default to
    /// name, email and age when there are no records.
    pub fn new(records: Vec<Record>, theme: Theme, spinner: SpinnerStyle) -> Self {
        let columns = match records.first() {
            Some(first) => Column::infer_from(first),
            None => vec![
                Column::field("name", "Name", "name").sortable(true),
                Column::field("email", "Email", "email").sortable(true),
                Column::field("age", "Age", "age").sortable(true),
            ],
        };

        let name = InputField::new()
            .with_label("Name")
            .with_placeholder("Enter your name")
            .with_helper_text("Type your full name")
            .with_clear_button(true)
            .with_theme(theme)
            .with_spinner(spinner);

        let table = DataTable::new(columns)
            .with_data(records.into_iter().map(std::rc::Rc::new).collect())
            .with_selectable(true)
            .with_theme(theme)
            .with_spinner(spinner)
            .on_row_select(|rows| {
                info!(
                    ids = ?rows.iter().map(|r| r.id()).collect::<Vec<_>>(),
                    "Demo rows selected"
                );
            });

        Self {
            name,
            table,
            focus: DemoFocus::default(),
        }
    }

    /// The widget that receives keys.
    pub fn focus(&self) -> DemoFocus {
        self.focus
    }

    /// Move focus to the other widget.
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            DemoFocus::Input => DemoFocus::Table,
            DemoFocus::Table => DemoFocus::Input,
        };
    }

    /// The name input.
    pub fn name(&self) -> &InputField {
        &self.name
    }

    /// The table.
    pub fn table(&self) -> &DataTable<Record> {
        &self.table
    }

    /// Check if the focused widget takes printable keys as text.
    pub fn captures_text(&self) -> bool {
        self.focus == DemoFocus::Input
    }

    /// Key hints for the focused widget.
    pub fn key_context(&self) -> KeyContext {
        match self.focus {
            DemoFocus::Input => KeyContext::TextInput,
            DemoFocus::Table => KeyContext::SelectableTable,
        }
    }

    /// Forward a key to the focused widget. Returns a description of any
    /// event it produced.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<String> {
        match self.focus {
            DemoFocus::Input => match self.name.handle_input(key)? {
                InputFieldAction::Changed(event) => {
                    self.name.set_value(event.value());
                    Some(format!("onChange: {:?}", event.value()))
                }
                InputFieldAction::VisibilityToggled(visible) => {
                    Some(format!("password visible: {}", visible))
                }
            },
            DemoFocus::Table => self.table.handle_input(key).map(describe_table_action),
        }
    }

    /// Advance spinners.
    pub fn tick(&mut self) {
        self.name.tick();
        self.table.tick();
    }

    /// Render the demo.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, _, table_area] = Layout::vertical([
            Constraint::Length(self.name.height()),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .areas(area);

        self.name
            .render(frame, input_area, self.focus == DemoFocus::Input);
        self.table
            .render(frame, table_area, self.focus == DemoFocus::Table);
    }
}
