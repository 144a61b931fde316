//! Sortable, selectable data table.
//!
//! The table displays caller-supplied rows and owns two pieces of state:
//!
//! - the active sort (one column, ascending or descending), and
//! - the selection, a list of row instances.
//!
//! Rows are shared with the caller as `Rc<R>`. Selection membership is
//! decided by `Rc::ptr_eq`, so two rows with the same id but different
//! allocations are different rows. Replacing the data does not clear the
//! selection.
//!
//! Sorting never touches the caller's data: [`DataTable::sorted_rows`]
//! builds a fresh sorted view on every call.
//!
//! ## Keys
//!
//! - `←/→`, `h/l`: move header focus
//! - `Enter`, `s`: sort by the focused column
//! - `↑/↓`, `k/j`: move the row cursor
//! - `Space`: toggle the row under the cursor
//! - `a`: toggle the select-all checkbox

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};
use tracing::{debug, trace};

use super::loading::{LoadingIndicator, SpinnerStyle};
use super::record::{CellValue, Row, RowId};
use crate::ui::theme::Theme;

/// Extracts a cell value from a row.
pub type Accessor<R> = Rc<dyn Fn(&R) -> CellValue>;

/// Callback invoked with the full selection after every selection change.
pub type RowSelectCallback<R> = Box<dyn FnMut(&[Rc<R>])>;

/// A table column.
pub struct Column<R> {
    key: String,
    title: String,
    accessor: Accessor<R>,
    sortable: bool,
}

impl<R> Column<R> {
    /// Create a non-sortable column.
    ///
    /// `key` must be unique among the table's columns; it identifies the
    /// column in the sort state.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            accessor: Rc::new(accessor),
            sortable: false,
        }
    }

    /// Set whether clicking the header sorts by this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// The column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check if the column is sortable.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Read this column's value from a row.
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Read this column's value from a row as display text.
    pub fn display(&self, row: &R) -> String {
        self.value(row).to_string()
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            accessor: Rc::clone(&self.accessor),
            sortable: self.sortable,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Header marker for an active sort in this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort: a column key and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Key of the sorted column.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Create a sort state.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// The sort that results from clicking the header of column `key`.
    ///
    /// Clicking the active ascending column flips it to descending. Any
    /// other click (a different column, an active descending column, or no
    /// active sort) sorts ascending by `key`.
    pub fn after_click(current: Option<&SortState>, key: &str) -> SortState {
        let direction = match current {
            Some(sort) if sort.key == key && sort.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        SortState::new(key, direction)
    }
}

/// Visual state of the select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// Nothing selected.
    Unchecked,
    /// Every row selected.
    Checked,
    /// Some rows selected.
    Indeterminate,
}

impl CheckState {
    /// Checkbox glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Checked => "[x]",
            CheckState::Indeterminate => "[-]",
        }
    }
}

/// What the table body shows, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    /// A single placeholder row with a spinner.
    Loading,
    /// A single placeholder row with the empty-state message.
    Empty,
    /// One row per data entry.
    Rows,
}

/// Actions reported by [`DataTable::handle_input`].
#[derive(Debug, Clone)]
pub enum DataTableAction<R> {
    /// The sort changed.
    Sorted(SortState),
    /// The selection changed; carries the new selection.
    SelectionChanged(Vec<Rc<R>>),
}

/// Sort `data` by `sort` without mutating it.
///
/// Returns the rows in their original order when there is no sort or the
/// sort key names no column. Ties keep their relative order. Rows whose
/// cell is absent go last in either direction.
pub fn sort_rows<R>(data: &[Rc<R>], columns: &[Column<R>], sort: Option<&SortState>) -> Vec<Rc<R>> {
    let mut rows = data.to_vec();
    let Some(sort) = sort else {
        return rows;
    };
    let Some(column) = columns.iter().find(|c| c.key == sort.key) else {
        return rows;
    };

    rows.sort_by(|a, b| {
        let (a, b) = (column.value(a), column.value(b));
        match (a.is_absent(), b.is_absent()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match sort.direction {
                SortDirection::Ascending => a.sort_cmp(&b),
                SortDirection::Descending => a.sort_cmp(&b).reverse(),
            },
        }
    });
    rows
}

/// Message shown while loading.
const LOADING_MESSAGE: &str = "Loading data...";

/// Empty-state headline.
const EMPTY_TITLE: &str = "No data available";

/// Empty-state detail line.
const EMPTY_DETAIL: &str = "There are no records to display";

/// Width of the checkbox column.
const CHECKBOX_WIDTH: u16 = 3;

/// A sortable, selectable table widget.
pub struct DataTable<R: Row> {
    data: Vec<Rc<R>>,
    columns: Vec<Column<R>>,
    loading: bool,
    selectable: bool,
    theme: Theme,
    on_row_select: Option<RowSelectCallback<R>>,
    /// Active sort, `None` when unsorted.
    sort: Option<SortState>,
    /// Selected rows in selection order.
    selected: Vec<Rc<R>>,
    /// Focused column header.
    header_cursor: usize,
    /// Row cursor over the sorted view.
    row_cursor: usize,
    loader: LoadingIndicator,
    table_state: TableState,
}

impl<R: Row> DataTable<R> {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            data: Vec::new(),
            columns,
            loading: false,
            selectable: false,
            theme: Theme::default(),
            on_row_select: None,
            sort: None,
            selected: Vec::new(),
            header_cursor: 0,
            row_cursor: 0,
            loader: LoadingIndicator::with_message(LOADING_MESSAGE),
            table_state: TableState::default(),
        }
    }

    /// Set the rows.
    pub fn with_data(mut self, data: Vec<Rc<R>>) -> Self {
        self.set_data(data);
        self
    }

    /// Set the loading flag.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set whether rows can be selected.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
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

    /// Register the selection callback.
    pub fn on_row_select(mut self, callback: impl FnMut(&[Rc<R>]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    /// Replace the rows.
    ///
    /// The selection is kept as-is, even when it refers to rows that are no
    /// longer in the data.
    pub fn set_data(&mut self, data: Vec<Rc<R>>) {
        self.data = data;
        if self.row_cursor >= self.data.len() {
            self.row_cursor = self.data.len().saturating_sub(1);
        }
    }

    /// Replace the columns. A sort on a removed column stops applying.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
        if self.header_cursor >= self.columns.len() {
            self.header_cursor = self.columns.len().saturating_sub(1);
        }
    }

    /// Set the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set whether rows can be selected.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The caller's rows, in their original order.
    pub fn data(&self) -> &[Rc<R>] {
        &self.data
    }

    /// The columns.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Check if the table is loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Check if rows can be selected.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// The active sort.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// The selected rows, in selection order.
    pub fn selected(&self) -> &[Rc<R>] {
        &self.selected
    }

    /// Index of the focused column header.
    pub fn header_cursor(&self) -> usize {
        self.header_cursor
    }

    /// Index of the row cursor in the sorted view.
    pub fn row_cursor(&self) -> usize {
        self.row_cursor
    }

    /// The rows in display order.
    pub fn sorted_rows(&self) -> Vec<Rc<R>> {
        sort_rows(&self.data, &self.columns, self.sort.as_ref())
    }

    /// What the body currently shows.
    pub fn body_state(&self) -> BodyState {
        if self.loading {
            BodyState::Loading
        } else if self.data.is_empty() {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }

    /// Check if `row` (this exact instance) is selected.
    pub fn is_selected(&self, row: &Rc<R>) -> bool {
        self.selected.iter().any(|r| Rc::ptr_eq(r, row))
    }

    /// State of the select-all checkbox.
    pub fn header_checkbox(&self) -> CheckState {
        let count = self.data.len();
        let selected = self.selected.len();
        if count > 0 && selected == count {
            CheckState::Checked
        } else if selected > 0 && selected < count {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Click the header of column `index`.
    ///
    /// Returns the new sort, or `None` when the column does not exist or is
    /// not sortable.
    pub fn click_header(&mut self, index: usize) -> Option<SortState> {
        let column = self.columns.get(index).filter(|c| c.sortable)?;
        let next = SortState::after_click(self.sort.as_ref(), &column.key);
        debug!(column = %next.key, direction = ?next.direction, "Table sort changed");
        self.sort = Some(next.clone());
        Some(next)
    }

    /// Click the checkbox of `row`.
    ///
    /// Removes the row when selected. Otherwise appends it in a selectable
    /// table, or makes it the only selected row.
    pub fn toggle_row(&mut self, row: &Rc<R>) -> Vec<Rc<R>> {
        if self.is_selected(row) {
            self.selected.retain(|r| !Rc::ptr_eq(r, row));
        } else if self.selectable {
            self.selected.push(Rc::clone(row));
        } else {
            self.selected = vec![Rc::clone(row)];
        }
        self.notify_selection();
        self.selected.clone()
    }

    /// Set the select-all checkbox.
    ///
    /// Checking selects every row in sorted order; unchecking clears the
    /// selection.
    pub fn set_select_all(&mut self, checked: bool) -> Vec<Rc<R>> {
        self.selected = if checked {
            self.sorted_rows()
        } else {
            Vec::new()
        };
        self.notify_selection();
        self.selected.clone()
    }

    /// Click the select-all checkbox: a checked box unchecks, an unchecked
    /// or indeterminate box checks.
    pub fn click_select_all(&mut self) -> Vec<Rc<R>> {
        let checked = self.header_checkbox() != CheckState::Checked;
        self.set_select_all(checked)
    }

    fn notify_selection(&mut self) {
        debug!(
            selected = ?self.selected.iter().map(|r| r.id()).collect::<Vec<RowId>>(),
            "Table selection changed"
        );
        if let Some(callback) = self.on_row_select.as_mut() {
            callback(&self.selected);
        }
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        if self.loading {
            self.loader.tick();
        }
    }

    /// Move header focus left.
    pub fn focus_previous_column(&mut self) {
        self.header_cursor = self.header_cursor.saturating_sub(1);
    }

    /// Move header focus right.
    pub fn focus_next_column(&mut self) {
        if self.header_cursor + 1 < self.columns.len() {
            self.header_cursor += 1;
        }
    }

    /// Move the row cursor up.
    pub fn move_up(&mut self) {
        self.row_cursor = self.row_cursor.saturating_sub(1);
    }

    /// Move the row cursor down.
    pub fn move_down(&mut self) {
        if self.row_cursor + 1 < self.data.len() {
            self.row_cursor += 1;
        }
    }

    /// The row under the cursor in the sorted view.
    pub fn row_at_cursor(&self) -> Option<Rc<R>> {
        self.sorted_rows().get(self.row_cursor).cloned()
    }

    /// Check if checkbox clicks are possible right now.
    fn checkboxes_active(&self) -> bool {
        self.selectable && self.body_state() == BodyState::Rows
    }

    /// Handle keyboard input.
    ///
    /// Returns the resulting action, if the key changed sort or selection.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DataTableAction<R>> {
        trace!(?key, "Data table key");
        match (key.code, key.modifiers) {
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                self.focus_previous_column();
                None
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                self.focus_next_column();
                None
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.move_up();
                None
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.move_down();
                None
            }
            (KeyCode::Enter, _) | (KeyCode::Char('s'), KeyModifiers::NONE) => self
                .click_header(self.header_cursor)
                .map(DataTableAction::Sorted),
            (KeyCode::Char(' '), KeyModifiers::NONE) if self.checkboxes_active() => {
                let row = self.row_at_cursor()?;
                Some(DataTableAction::SelectionChanged(self.toggle_row(&row)))
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) if self.checkboxes_active() => {
                Some(DataTableAction::SelectionChanged(self.click_select_all()))
            }
            _ => None,
        }
    }

    fn header_row(&self, focused: bool) -> TableRow<'static> {
        let palette = self.theme.palette();
        let mut cells = Vec::with_capacity(self.columns.len() + 1);

        if self.selectable {
            cells.push(Cell::from(self.header_checkbox().symbol()));
        }

        for (index, column) in self.columns.iter().enumerate() {
            let mut spans = vec![Span::raw(column.title.to_uppercase())];
            if column.sortable {
                let marker = match &self.sort {
                    Some(sort) if sort.key == column.key => {
                        Span::styled(sort.direction.arrow(), Style::default().fg(palette.accent))
                    }
                    _ => Span::styled("↕", Style::default().fg(palette.muted)),
                };
                spans.push(Span::raw(" "));
                spans.push(marker);
            }

            let mut style = Style::default()
                .fg(palette.label)
                .add_modifier(Modifier::BOLD);
            if focused && index == self.header_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            cells.push(Cell::from(Line::from(spans)).style(style));
        }

        TableRow::new(cells).bottom_margin(1)
    }

    fn body_rows(&self, sorted: &[Rc<R>]) -> Vec<TableRow<'static>> {
        let palette = self.theme.palette();
        sorted
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let selected = self.is_selected(row);
                let mut cells = Vec::with_capacity(self.columns.len() + 1);
                if self.selectable {
                    cells.push(Cell::from(if selected { "[x]" } else { "[ ]" }));
                }
                cells.extend(
                    self.columns
                        .iter()
                        .map(|column| Cell::from(column.display(row))),
                );

                let background = if selected {
                    palette.selected
                } else if index % 2 == 0 {
                    palette.bg
                } else {
                    palette.stripe
                };
                TableRow::new(cells).style(Style::default().fg(palette.fg).bg(background))
            })
            .collect()
    }

    fn placeholder_lines(&self) -> Vec<Line<'static>> {
        let palette = self.theme.palette();
        match self.body_state() {
            BodyState::Loading => vec![Line::from(vec![
                Span::styled(self.loader.spinner_frame(), Style::default().fg(palette.accent)),
                Span::raw("  "),
                Span::styled(
                    self.loader.message().to_string(),
                    Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
                ),
            ])],
            BodyState::Empty => vec![
                Line::styled("∅", Style::default().fg(palette.muted)),
                Line::styled(
                    EMPTY_TITLE,
                    Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
                ),
                Line::styled(EMPTY_DETAIL, Style::default().fg(palette.border)),
            ],
            BodyState::Rows => Vec::new(),
        }
    }

    /// Render the table.
    ///
    /// Header focus and the row cursor are only drawn when `focused`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let palette = self.theme.palette();
        let border_style = if focused {
            Style::default().fg(palette.focus)
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(palette.bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut widths = Vec::with_capacity(self.columns.len() + 1);
        if self.selectable {
            widths.push(Constraint::Length(CHECKBOX_WIDTH));
        }
        widths.extend(self.columns.iter().map(|_| Constraint::Fill(1)));

        let sorted = self.sorted_rows();
        let rows = match self.body_state() {
            BodyState::Rows => self.body_rows(&sorted),
            BodyState::Loading | BodyState::Empty => Vec::new(),
        };
        let table = Table::new(rows, widths)
            .header(self.header_row(focused))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));

        if focused && self.body_state() == BodyState::Rows {
            self.table_state.select(Some(self.row_cursor));
        } else {
            self.table_state.select(None);
        }
        frame.render_stateful_widget(table, inner, &mut self.table_state);

        let lines = self.placeholder_lines();
        if !lines.is_empty() {
            // Header row plus its bottom margin.
            let body = Rect {
                y: inner.y.saturating_add(2),
                height: inner.height.saturating_sub(2),
                ..inner
            };
            let placeholder = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(placeholder, body);
        }
    }
}
