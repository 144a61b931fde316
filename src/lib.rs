//! lazywidgets - form and data widgets for ratatui terminal UIs.
//!
//! The library exposes an [`InputField`](ui::InputField) and a
//! [`DataTable`](ui::DataTable), plus the story catalog and the
//! application shell the `lazywidgets` binary uses to show them.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod ui;
