//! Key hints per focus context.

/// What currently receives key input, for choosing help bar hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// A plain text input.
    TextInput,
    /// A password input with a visibility toggle.
    PasswordInput,
    /// A table without row selection.
    Table,
    /// A table with row checkboxes.
    SelectableTable,
}

/// Global hints shown after the context hints.
const GLOBAL_HINTS: &str = "[Tab/S-Tab] story  [Esc] quit";

/// Get the help bar hints for a context.
///
/// Keys are wrapped in brackets so the help bar can highlight them.
pub fn get_context_hints(context: KeyContext) -> String {
    let local = match context {
        KeyContext::TextInput => "[type] edit  [C-u] clear line  [C-l] clear",
        KeyContext::PasswordInput => "[type] edit  [C-t] show/hide  [C-l] clear",
        KeyContext::Table => "[h/l] column  [Enter] sort  [j/k] row  [q] quit",
        KeyContext::SelectableTable => {
            "[h/l] column  [Enter] sort  [j/k] row  [Space] select  [a] all  [q] quit"
        }
    };
    format!("{}  {}", local, GLOBAL_HINTS)
}
