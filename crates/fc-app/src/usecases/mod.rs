//! Business logic use cases
//!
//! ```text
//! PollingClipboardWatcher
//!         ↓
//! CaptureClipboardUseCase
//!         ↓
//! ---------------------------------
//! ListHistoryUseCase / SearchHistoryUseCase   → rows for the UI or CLI
//! RestoreEntryUseCase                         → back to the system clipboard
//! ClearHistoryUseCase / SetCapacityUseCase    → user maintenance
//! ```
//!
//! Use cases that change the history take it by `&mut`, so only whoever owns
//! the [`ClipboardHistory`](crate::ClipboardHistory) can run them.

pub mod capture_clipboard;
pub mod clear_history;
pub mod get_settings;
pub mod list_history;
pub mod restore_entry;
pub mod search_history;
pub mod set_capacity;

pub use capture_clipboard::CaptureClipboardUseCase;
pub use clear_history::ClearHistoryUseCase;
pub use get_settings::GetSettings;
pub use list_history::ListHistoryUseCase;
pub use restore_entry::RestoreEntryUseCase;
pub use search_history::SearchHistoryUseCase;
pub use set_capacity::SetCapacityUseCase;

use crate::deps::AppDeps;

/// Builds use cases wired to one set of [`AppDeps`].
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn capture_clipboard(&self) -> CaptureClipboardUseCase {
        CaptureClipboardUseCase::new(self.deps.clock.clone())
    }

    pub fn restore_entry(&self) -> RestoreEntryUseCase {
        RestoreEntryUseCase::new(self.deps.clipboard.clone())
    }

    pub fn clear_history(&self) -> ClearHistoryUseCase {
        ClearHistoryUseCase
    }

    pub fn set_capacity(&self) -> SetCapacityUseCase {
        SetCapacityUseCase::new(self.deps.settings.clone())
    }

    pub fn list_history(&self) -> ListHistoryUseCase {
        ListHistoryUseCase
    }

    pub fn search_history(&self) -> SearchHistoryUseCase {
        SearchHistoryUseCase
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.deps.settings.clone())
    }
}
