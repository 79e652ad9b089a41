//! Adapters that only make sense for the command-line front end.

mod clipboard;
mod ui;

pub use clipboard::UnavailableClipboard;
pub use ui::TerminalUi;
