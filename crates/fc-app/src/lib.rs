//! FluentClip application layer
//!
//! This crate contains the history service, the use cases built on it and the
//! single-consumer runtime that owns the history while the app is running.

pub mod app_paths;
pub mod deps;
pub mod history;
pub mod rows;
pub mod runtime;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use history::ClipboardHistory;
pub use rows::{items_footer, render_rows, HistoryRow};
pub use runtime::{app_command_channel, AppCommand, AppCommandSender, AppRuntime};
pub use usecases::UseCases;
