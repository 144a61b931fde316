//! Event handling for the demo application.
//!
//! Terminal input arrives as [`Event`]s from the [`EventHandler`]; the
//! widgets only ever see key events, forwarded by the application.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::{EventHandler, TICK_RATE_MS};
pub use keys::{get_context_hints, KeyContext};

/// An application event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The tick interval elapsed without input.
    Tick,
}
