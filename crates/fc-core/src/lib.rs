//! # fc-core
//!
//! Core domain models and business logic for FluentClip.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard entry model, the bounded history store, settings and config DTOs,
//! and the ports the outer layers implement.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardEntry, ClipboardSnapshot, EntryKind, Fingerprint, HistoryStore, IgnoreReason,
    ObserveOutcome, DEFAULT_CAPACITY,
};
pub use config::AppConfig;
pub use error::HistoryError;
pub use settings::model::Settings;
