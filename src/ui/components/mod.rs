//! Reusable UI components.

mod data_table;
mod help_bar;
mod input_field;
mod loading;
mod record;

pub use data_table::{
    sort_rows, Accessor, BodyState, CheckState, Column, DataTable, DataTableAction,
    RowSelectCallback, SortDirection, SortState,
};
pub use help_bar::render_context_help;
pub use input_field::{
    ChangeCallback, ChangeEvent, ChangeTarget, InputField, InputFieldAction, InputSize,
    InputType, InputVariant, StatusLine,
};
pub use loading::{LoadingIndicator, SpinnerStyle};
pub use record::{parse_records, CellValue, Record, RecordError, Row, RowId};
