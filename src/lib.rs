//! FluentClip
//!
//! Clipboard history manager: watches the system clipboard, keeps a bounded
//! and deduplicated history and lets you put any entry back.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod interactive;

pub use cli::{Cli, Command};
pub use commands::execute;
