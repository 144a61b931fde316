//! User interface components and views.
//!
//! `components` holds the widgets; `views` holds the story catalog that
//! the demo binary displays.

mod components;
pub mod theme;
mod views;

pub use components::{
    parse_records, render_context_help, sort_rows, Accessor, BodyState, CellValue,
    ChangeCallback, ChangeEvent, ChangeTarget, CheckState, Column, DataTable, DataTableAction,
    InputField, InputFieldAction, InputSize, InputType, InputVariant, LoadingIndicator, Record,
    RecordError, Row, RowId, RowSelectCallback, SortDirection, SortState, SpinnerStyle,
    StatusLine,
};
pub use theme::{Palette, Theme};
pub use views::{
    sample_records, sample_users, user_columns, DemoView, Story, StoryCatalog, StoryContent,
    StoryOptions, TableGallery, User,
};
