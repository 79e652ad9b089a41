//! Clipboard domain models.
mod entry;
mod history;
mod snapshot;

pub use entry::{ClipboardEntry, EntryKind, Fingerprint, PREVIEW_MAX_CHARS};
pub use history::{HistoryStore, IgnoreReason, ObserveOutcome, Search, DEFAULT_CAPACITY};
pub use snapshot::ClipboardSnapshot;
