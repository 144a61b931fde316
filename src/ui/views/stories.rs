//! Story catalog.
//!
//! Each story is one preconfigured widget. Input stories apply their own
//! change events, like a caller holding the value in its state; table
//! stories report selection changes. The catalog is what the demo binary
//! pages through.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info};

use super::demo::DemoView;
use super::sample::{sample_records, sample_users, user_columns, User};
use crate::events::KeyContext;
use crate::ui::components::{
    DataTable, DataTableAction, InputField, InputFieldAction, InputSize, InputType, InputVariant,
    Record, Row, SpinnerStyle,
};
use crate::ui::theme::Theme;

/// Widest a story widget is drawn.
const MAX_STORY_WIDTH: u16 = 72;

/// Options shared by every story.
#[derive(Debug, Clone, Default)]
pub struct StoryOptions {
    /// Theme for stories that do not pick their own.
    pub theme: Theme,
    /// Spinner style for loading states.
    pub spinner: SpinnerStyle,
    /// Rows for the combined demo, instead of the sample users.
    pub records: Option<Vec<Record>>,
}

/// The widget a story shows.
pub enum StoryContent {
    /// A single input field.
    Input(InputField),
    /// A single table of users.
    Table(DataTable<User>),
    /// The combined demo.
    Demo(Box<DemoView>),
    /// Several labelled tables side by side.
    Gallery(TableGallery),
}

/// Labelled tables shown together; one of them receives keys.
pub struct TableGallery {
    panels: Vec<(&'static str, DataTable<User>)>,
    focused: usize,
}

impl TableGallery {
    fn new(panels: Vec<(&'static str, DataTable<User>)>) -> Self {
        Self { panels, focused: 0 }
    }

    /// Panel titles in display order.
    pub fn titles(&self) -> Vec<&'static str> {
        self.panels.iter().map(|(title, _)| *title).collect()
    }

    /// The panel tables in display order.
    pub fn tables(&self) -> impl Iterator<Item = &DataTable<User>> {
        self.panels.iter().map(|(_, table)| table)
    }

    /// Index of the panel that receives keys.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Move key focus to the next panel, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.panels.is_empty() {
            self.focused = (self.focused + 1) % self.panels.len();
        }
    }

    fn focused_table(&self) -> Option<&DataTable<User>> {
        self.panels.get(self.focused).map(|(_, table)| table)
    }

    fn focused_table_mut(&mut self) -> Option<&mut DataTable<User>> {
        self.panels.get_mut(self.focused).map(|(_, table)| table)
    }

    fn tick(&mut self) {
        for (_, table) in &mut self.panels {
            table.tick();
        }
    }

    /// Two panels per row, each a title line above its table.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: Theme) {
        let palette = theme.palette();
        let rows = self.panels.len().div_ceil(2).max(1);
        let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);

        for (index, (title, table)) in self.panels.iter_mut().enumerate() {
            let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(1)
                .areas(row_areas[index / 2]);
            let cell = if index % 2 == 0 { left } else { right };
            let [title_area, table_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(cell);

            let focused = index == self.focused;
            let style = if focused {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.label)
            };
            frame.render_widget(Paragraph::new(Span::styled(*title, style)), title_area);
            table.render(frame, table_area, focused);
        }
    }
}

/// A named, preconfigured widget.
pub struct Story {
    group: &'static str,
    name: &'static str,
    description: &'static str,
    content: StoryContent,
    last_event: Option<String>,
}

impl Story {
    fn new(
        group: &'static str,
        name: &'static str,
        description: &'static str,
        content: StoryContent,
    ) -> Self {
        Self {
            group,
            name,
            description,
            content,
            last_event: None,
        }
    }

    /// The component group, e.g. `InputField`.
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// The story name within its group.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `group/name`.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The story widget.
    pub fn content(&self) -> &StoryContent {
        &self.content
    }

    /// The most recent event the widget reported.
    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Check if the story widget takes printable keys as text.
    pub fn captures_text(&self) -> bool {
        match &self.content {
            StoryContent::Input(_) => true,
            StoryContent::Table(_) | StoryContent::Gallery(_) => false,
            StoryContent::Demo(demo) => demo.captures_text(),
        }
    }

    /// Key hints for the story widget.
    pub fn key_context(&self) -> KeyContext {
        match &self.content {
            StoryContent::Input(field) if field.shows_password_toggle() => {
                KeyContext::PasswordInput
            }
            StoryContent::Input(_) => KeyContext::TextInput,
            StoryContent::Table(table) if table.is_selectable() => KeyContext::SelectableTable,
            StoryContent::Table(_) => KeyContext::Table,
            StoryContent::Demo(demo) => demo.key_context(),
            StoryContent::Gallery(gallery) => match gallery.focused_table() {
                Some(table) if table.is_selectable() => KeyContext::SelectableTable,
                _ => KeyContext::Table,
            },
        }
    }

    /// Switch focus inside a multi-widget story. Returns false when the
    /// story has a single widget.
    pub fn switch_focus(&mut self) -> bool {
        match &mut self.content {
            StoryContent::Demo(demo) => {
                demo.switch_focus();
                true
            }
            StoryContent::Gallery(gallery) => {
                gallery.focus_next();
                true
            }
            StoryContent::Input(_) | StoryContent::Table(_) => false,
        }
    }

    /// Forward a key to the story widget.
    pub fn handle_input(&mut self, key: KeyEvent) {
        let event = match &mut self.content {
            StoryContent::Input(field) => match field.handle_input(key) {
                Some(InputFieldAction::Changed(event)) => {
                    field.set_value(event.value());
                    Some(format!("onChange: {:?}", event.value()))
                }
                Some(InputFieldAction::VisibilityToggled(visible)) => {
                    Some(format!("password visible: {}", visible))
                }
                None => None,
            },
            StoryContent::Table(table) => table.handle_input(key).map(describe_table_action),
            StoryContent::Demo(demo) => demo.handle_input(key),
            StoryContent::Gallery(gallery) => gallery
                .focused_table_mut()
                .and_then(|table| table.handle_input(key))
                .map(describe_table_action),
        };

        if let Some(event) = event {
            debug!(story = %self.qualified_name(), %event, "Story event");
            self.last_event = Some(event);
        }
    }

    /// Advance spinners.
    pub fn tick(&mut self) {
        match &mut self.content {
            StoryContent::Input(field) => field.tick(),
            StoryContent::Table(table) => table.tick(),
            StoryContent::Demo(demo) => demo.tick(),
            StoryContent::Gallery(gallery) => gallery.tick(),
        }
    }

    /// Render the story: title, description, widget and last event.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: Theme) {
        let palette = theme.palette();
        let max_width = match self.content {
            StoryContent::Gallery(_) => area.width,
            _ => MAX_STORY_WIDTH,
        };
        let width = area.width.min(max_width);
        let area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let [title_area, description_area, _, widget_area, event_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Line::from(vec![
            Span::styled(self.group, Style::default().fg(palette.muted)),
            Span::styled(" / ", Style::default().fg(palette.muted)),
            Span::styled(
                self.name,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.description,
                Style::default().fg(palette.muted),
            )),
            description_area,
        );

        match &mut self.content {
            StoryContent::Input(field) => {
                let height = field.height().min(widget_area.height);
                field.render(frame, Rect { height, ..widget_area }, true);
            }
            StoryContent::Table(table) => table.render(frame, widget_area, true),
            StoryContent::Demo(demo) => demo.render(frame, widget_area),
            StoryContent::Gallery(gallery) => gallery.render(frame, widget_area, theme),
        }

        if let Some(event) = &self.last_event {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    event.clone(),
                    Style::default().fg(palette.helper),
                )),
                event_area,
            );
        }
    }
}

/// Event line for a table action.
pub(super) fn describe_table_action<R: Row>(action: DataTableAction<R>) -> String {
    match action {
        DataTableAction::Sorted(sort) => {
            format!("sorted by {} {}", sort.key, sort.direction.arrow())
        }
        DataTableAction::SelectionChanged(rows) => format!(
            "onRowSelect: [{}]",
            rows.iter()
                .map(|r| r.id().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Builds an input story whose theme follows the catalog unless the story
/// pins one.
fn input_story(
    name: &'static str,
    description: &'static str,
    options: &StoryOptions,
    field: InputField,
) -> Story {
    let field = field
        .with_theme(options.theme)
        .with_spinner(options.spinner)
        .on_change(|event| debug!(len = event.value().len(), "Story onChange"));
    Story::new("InputField", name, description, StoryContent::Input(field))
}

fn story_table(options: &StoryOptions, table: DataTable<User>) -> DataTable<User> {
    table
        .with_theme(options.theme)
        .with_spinner(options.spinner)
        .on_row_select(|rows| info!(count = rows.len(), "Story onRowSelect"))
}

fn table_story(
    name: &'static str,
    description: &'static str,
    options: &StoryOptions,
    table: DataTable<User>,
) -> Story {
    let table = story_table(options, table);
    Story::new("DataTable", name, description, StoryContent::Table(table))
}

fn all_states_story(options: &StoryOptions) -> Story {
    let panels = vec![
        (
            "Default with Data",
            DataTable::new(user_columns()).with_data(sample_users()),
        ),
        (
            "Loading State",
            DataTable::new(user_columns()).with_loading(true),
        ),
        ("Empty State", DataTable::new(user_columns())),
        (
            "Selectable with Data",
            DataTable::new(user_columns())
                .with_data(sample_users())
                .with_selectable(true),
        ),
        (
            "Selectable Loading State",
            DataTable::new(user_columns())
                .with_loading(true)
                .with_selectable(true),
        ),
        (
            "Selectable Empty State",
            DataTable::new(user_columns()).with_selectable(true),
        ),
    ]
    .into_iter()
    .map(|(title, table)| (title, story_table(options, table)))
    .collect();

    Story::new(
        "DataTable",
        "All States",
        "Every table state on one screen. F6 moves key focus between tables.",
        StoryContent::Gallery(TableGallery::new(panels)),
    )
}

fn input_stories(options: &StoryOptions) -> Vec<Story> {
    let mut stories = vec![
        input_story(
            "Default",
            "Outlined, medium input with helper text.",
            options,
            InputField::new()
                .with_label("Name")
                .with_placeholder("Enter your name")
                .with_helper_text("This is a helper text")
                .with_variant(InputVariant::Outlined)
                .with_size(InputSize::Md),
        ),
        input_story(
            "Disabled",
            "Typing is ignored while disabled.",
            options,
            InputField::new()
                .with_label("Disabled Field")
                .with_placeholder("Cannot type here")
                .with_disabled(true)
                .with_helper_text("This field is disabled"),
        ),
        input_story(
            "Invalid State",
            "The error message replaces the helper text.",
            options,
            InputField::new()
                .with_label("Email")
                .with_placeholder("Enter your email")
                .with_invalid(true)
                .with_error_message("Please enter a valid email address")
                .with_variant(InputVariant::Outlined),
        ),
        input_story(
            "Loading State",
            "A spinner replaces the clear and show/hide controls.",
            options,
            InputField::new()
                .with_label("Loading Field")
                .with_placeholder("Validating...")
                .with_loading(true)
                .with_helper_text("Please wait while we validate your input"),
        ),
        input_story(
            "Filled Variant",
            "Bordered input with a tinted background.",
            options,
            InputField::new()
                .with_label("Filled Input")
                .with_placeholder("Type something")
                .with_variant(InputVariant::Filled)
                .with_helper_text("This is the filled variant"),
        ),
        input_story(
            "Outlined Variant",
            "Bordered input.",
            options,
            InputField::new()
                .with_label("Outlined Input")
                .with_placeholder("Type something")
                .with_variant(InputVariant::Outlined)
                .with_helper_text("This is the outlined variant"),
        ),
        input_story(
            "Ghost Variant",
            "Input without a border.",
            options,
            InputField::new()
                .with_label("Ghost Input")
                .with_placeholder("Type something")
                .with_variant(InputVariant::Ghost)
                .with_helper_text("This is the ghost variant"),
        ),
        input_story(
            "Small Size",
            "Single-row input.",
            options,
            InputField::new()
                .with_label("Small Input")
                .with_placeholder("Small size input")
                .with_size(InputSize::Sm)
                .with_helper_text("This is a small sized input"),
        ),
        input_story(
            "Medium Size",
            "Standard input height.",
            options,
            InputField::new()
                .with_label("Medium Input")
                .with_placeholder("Medium size input")
                .with_size(InputSize::Md)
                .with_helper_text("This is a medium sized input"),
        ),
        input_story(
            "Large Size",
            "Input with vertical padding.",
            options,
            InputField::new()
                .with_label("Large Input")
                .with_placeholder("Large size input")
                .with_size(InputSize::Lg)
                .with_helper_text("This is a large sized input"),
        ),
        input_story(
            "Password Field",
            "Masked input; Ctrl+T shows or hides the value.",
            options,
            InputField::new()
                .with_label("Password")
                .with_placeholder("Enter your password")
                .with_type(InputType::Password)
                .with_helper_text("Press Ctrl+T to toggle visibility"),
        ),
        input_story(
            "Clear Button",
            "Ctrl+L clears the field once it has a value.",
            options,
            InputField::new()
                .with_label("Input with Clear Button")
                .with_placeholder("Type something to see clear button")
                .with_clear_button(true)
                .with_helper_text("Clear button appears when you type"),
        ),
    ];

    // Pinned themes go on after the catalog theme so they win.
    for (name, description, label, placeholder, helper, theme) in [
        (
            "Light Theme",
            "Input styled for light backgrounds.",
            "Light Theme Input",
            "Input in light theme",
            "This input is styled for light theme",
            Theme::Light,
        ),
        (
            "Dark Theme",
            "Input styled for dark backgrounds.",
            "Dark Theme Input",
            "Input in dark theme",
            "This input is styled for dark theme",
            Theme::Dark,
        ),
    ] {
        let mut story = input_story(
            name,
            description,
            options,
            InputField::new()
                .with_label(label)
                .with_placeholder(placeholder)
                .with_helper_text(helper),
        );
        if let StoryContent::Input(field) = &mut story.content {
            field.set_theme(theme);
        }
        stories.push(story);
    }

    stories
}

fn table_stories(options: &StoryOptions) -> Vec<Story> {
    vec![
        table_story(
            "Default",
            "Sortable columns; Enter sorts by the focused column.",
            options,
            DataTable::new(user_columns()).with_data(sample_users()),
        ),
        table_story(
            "Selectable",
            "Space toggles a row, a toggles every row.",
            options,
            DataTable::new(user_columns())
                .with_data(sample_users())
                .with_selectable(true),
        ),
        table_story(
            "Loading",
            "Headers with a spinner in the body.",
            options,
            DataTable::new(user_columns()).with_loading(true),
        ),
        table_story(
            "Empty",
            "Headers with the empty-state message in the body.",
            options,
            DataTable::new(user_columns()),
        ),
        table_story(
            "Selectable Loading",
            "Loading state with the checkbox column.",
            options,
            DataTable::new(user_columns())
                .with_loading(true)
                .with_selectable(true),
        ),
        table_story(
            "Selectable Empty",
            "Empty state with the checkbox column.",
            options,
            DataTable::new(user_columns()).with_selectable(true),
        ),
        all_states_story(options),
    ]
}

/// The ordered list of stories and the current position.
pub struct StoryCatalog {
    stories: Vec<Story>,
    current: usize,
}

impl StoryCatalog {
    /// Build every story.
    pub fn new(options: StoryOptions) -> Self {
        let records = options.records.clone().unwrap_or_else(sample_records);
        let demo = DemoView::new(records, options.theme, options.spinner);

        let mut stories = vec![Story::new(
            "App",
            "Demo",
            "A name input above a selectable table. F6 switches focus.",
            StoryContent::Demo(Box::new(demo)),
        )];
        stories.extend(input_stories(&options));
        stories.extend(table_stories(&options));

        Self {
            stories,
            current: 0,
        }
    }

    /// Number of stories.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Index of the current story.
    pub fn index(&self) -> usize {
        self.current
    }

    /// The current story.
    pub fn current(&self) -> &Story {
        &self.stories[self.current]
    }

    /// The current story, mutably.
    pub fn current_mut(&mut self) -> &mut Story {
        &mut self.stories[self.current]
    }

    /// Qualified names of every story, in order.
    pub fn names(&self) -> Vec<String> {
        self.stories.iter().map(Story::qualified_name).collect()
    }

    /// Go to the next story, wrapping around.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.stories.len();
    }

    /// Go to the previous story, wrapping around.
    pub fn previous(&mut self) {
        self.current = (self.current + self.stories.len() - 1) % self.stories.len();
    }

    /// Go to a story by qualified name (`DataTable/Empty`) or by bare name
    /// (first match), ignoring case. Returns false when nothing matches.
    pub fn select(&mut self, name: &str) -> bool {
        let position = self
            .stories
            .iter()
            .position(|s| s.qualified_name().eq_ignore_ascii_case(name))
            .or_else(|| {
                self.stories
                    .iter()
                    .position(|s| s.name.eq_ignore_ascii_case(name))
            });

        match position {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::ui::components::BodyState;

    fn catalog() -> StoryCatalog {
        StoryCatalog::new(StoryOptions::default())
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = catalog();
        let names = catalog.names();
        assert_eq!(catalog.len(), 1 + 14 + 7);
        assert_eq!(names[0], "App/Demo");
        assert!(names.contains(&"InputField/Password Field".to_string()));
        assert!(names.contains(&"DataTable/Selectable Empty".to_string()));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut catalog = catalog();
        catalog.previous();
        assert_eq!(catalog.index(), catalog.len() - 1);
        catalog.next();
        assert_eq!(catalog.index(), 0);
    }

    #[test]
    fn test_select_by_name() {
        let mut catalog = catalog();
        assert!(catalog.select("datatable/default"));
        assert_eq!(catalog.current().group(), "DataTable");

        assert!(catalog.select("default"));
        assert_eq!(catalog.current().group(), "InputField");

        assert!(!catalog.select("nope"));
        assert_eq!(catalog.current().group(), "InputField");
    }

    #[test]
    fn test_input_story_applies_its_own_changes() {
        let mut catalog = catalog();
        catalog.select("InputField/Default");
        let story = catalog.current_mut();
        story.handle_input(key('h'));
        story.handle_input(key('i'));

        assert_eq!(story.last_event(), Some("onChange: \"hi\""));
        match story.content() {
            StoryContent::Input(field) => assert_eq!(field.value(), "hi"),
            _ => panic!("expected an input story"),
        }
    }

    #[test]
    fn test_disabled_story_ignores_typing() {
        let mut catalog = catalog();
        catalog.select("Disabled");
        let story = catalog.current_mut();
        story.handle_input(key('x'));
        assert!(story.last_event().is_none());
    }

    #[test]
    fn test_selectable_story_reports_selection() {
        let mut catalog = catalog();
        catalog.select("DataTable/Selectable");
        let story = catalog.current_mut();
        assert_eq!(story.key_context(), KeyContext::SelectableTable);

        story.handle_input(key(' '));
        assert_eq!(story.last_event(), Some("onRowSelect: [1]"));
    }

    #[test]
    fn test_password_story_context() {
        let mut catalog = catalog();
        catalog.select("Password Field");
        assert_eq!(catalog.current().key_context(), KeyContext::PasswordInput);
    }

    #[test]
    fn test_dark_theme_story_keeps_its_theme() {
        let catalog = StoryCatalog::new(StoryOptions {
            theme: Theme::Light,
            ..StoryOptions::default()
        });
        let dark = catalog
            .stories
            .iter()
            .find(|s| s.name() == "Dark Theme")
            .unwrap();
        match dark.content() {
            StoryContent::Input(field) => assert_eq!(field.theme(), Theme::Dark),
            _ => panic!("expected an input story"),
        }
    }

    fn gallery(story: &Story) -> &TableGallery {
        match story.content() {
            StoryContent::Gallery(gallery) => gallery,
            _ => panic!("expected a gallery story"),
        }
    }

    #[test]
    fn test_all_states_story_shows_every_table_state() {
        let mut catalog = catalog();
        assert!(catalog.select("DataTable/All States"));
        let gallery = gallery(catalog.current());

        assert_eq!(
            gallery.titles(),
            vec![
                "Default with Data",
                "Loading State",
                "Empty State",
                "Selectable with Data",
                "Selectable Loading State",
                "Selectable Empty State",
            ]
        );
        let states: Vec<BodyState> = gallery.tables().map(|t| t.body_state()).collect();
        assert_eq!(
            states,
            vec![
                BodyState::Rows,
                BodyState::Loading,
                BodyState::Empty,
                BodyState::Rows,
                BodyState::Loading,
                BodyState::Empty,
            ]
        );
        let selectable: Vec<bool> = gallery.tables().map(|t| t.is_selectable()).collect();
        assert_eq!(selectable, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn test_all_states_focus_routes_keys() {
        let mut catalog = catalog();
        catalog.select("All States");
        let story = catalog.current_mut();
        assert_eq!(story.key_context(), KeyContext::Table);

        for _ in 0..3 {
            assert!(story.switch_focus());
        }
        assert_eq!(gallery(story).focused(), 3);
        assert_eq!(story.key_context(), KeyContext::SelectableTable);

        story.handle_input(key(' '));
        assert_eq!(story.last_event(), Some("onRowSelect: [1]"));

        for _ in 0..3 {
            story.switch_focus();
        }
        assert_eq!(gallery(story).focused(), 0);
    }

    #[test]
    fn test_all_states_renders_every_panel() {
        let mut catalog = catalog();
        catalog.select("All States");
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                catalog.current_mut().render(frame, area, Theme::Light);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Selectable Empty State"));
        assert!(text.contains("Loading data..."));
        assert!(text.contains("No data available"));
        assert!(text.contains("Alice"));
    }

    #[test]
    fn test_single_widget_stories_do_not_switch_focus() {
        let mut catalog = catalog();
        assert!(catalog.current_mut().switch_focus());
        assert!(!catalog.current().captures_text());
        catalog.next();
        assert!(!catalog.current_mut().switch_focus());
    }
}
