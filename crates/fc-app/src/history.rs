//! The clipboard history as the application sees it: the in-memory store plus
//! the side effects that follow every mutation.

use std::sync::Arc;

use fc_core::clipboard::{ClipboardEntry, HistoryStore, ObserveOutcome, Search};
use fc_core::ports::{HistoryRepositoryPort, UiPort};
use fc_core::{HistoryError, DEFAULT_CAPACITY};
use tracing::{debug, error, info, warn};

use crate::deps::AppDeps;

/// Owns the [`HistoryStore`] and keeps the file and the UI in step with it.
///
/// Every mutation is saved and then announced through
/// [`UiPort::history_changed`]. A failed save is logged and otherwise
/// ignored; the in-memory history stays authoritative.
pub struct ClipboardHistory {
    store: HistoryStore,
    repo: Arc<dyn HistoryRepositoryPort>,
    ui: Arc<dyn UiPort>,
}

impl ClipboardHistory {
    /// Builds the history from whatever was persisted.
    ///
    /// An unreadable history file is logged and the app starts empty. An
    /// invalid `capacity` falls back to the default.
    pub async fn load(deps: &AppDeps, capacity: usize) -> Self {
        let store = HistoryStore::new(capacity).unwrap_or_else(|e| {
            warn!(error = %e, fallback = DEFAULT_CAPACITY, "Invalid history capacity in settings");
            HistoryStore::default()
        });

        let mut history = Self {
            store,
            repo: deps.history_repo.clone(),
            ui: deps.ui_port.clone(),
        };

        match history.repo.load().await {
            Ok(entries) => {
                let discarded = history.store.restore(entries);
                info!(
                    entries = history.store.len(),
                    discarded,
                    capacity = history.store.capacity(),
                    "Loaded clipboard history"
                );
            }
            Err(e) => {
                warn!(error = %e, "Failed to load clipboard history, starting empty");
            }
        }

        history
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        self.store.entries()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn select(&self, index: usize) -> Result<&ClipboardEntry, HistoryError> {
        self.store.select(index)
    }

    pub fn search(&self, query: &str) -> Search<'_> {
        self.store.search(query)
    }

    pub async fn observe(&mut self, entry: ClipboardEntry) -> ObserveOutcome {
        let kind = entry.kind;
        let outcome = self.store.observe(entry);

        match &outcome {
            ObserveOutcome::Ignored(reason) => {
                debug!(%kind, ?reason, "Clipboard value ignored");
                return outcome;
            }
            ObserveOutcome::Inserted { evicted } => {
                info!(%kind, evicted = evicted.len(), "New clipboard entry");
            }
            ObserveOutcome::Promoted { from } => {
                info!(%kind, from, "Clipboard entry moved to top");
            }
        }

        self.flush().await;
        outcome
    }

    /// Empties the history and returns the number of removed entries.
    pub async fn clear(&mut self) -> usize {
        let removed = self.store.clear();
        info!(removed, "Cleared clipboard history");
        self.flush().await;
        removed
    }

    /// Applies a new capacity and returns the entries that no longer fit.
    pub async fn set_capacity(
        &mut self,
        capacity: usize,
    ) -> Result<Vec<ClipboardEntry>, HistoryError> {
        let evicted = self.store.set_capacity(capacity)?;
        info!(capacity, evicted = evicted.len(), "History capacity changed");
        self.flush().await;
        Ok(evicted)
    }

    async fn flush(&self) {
        if let Err(e) = self.repo.save(self.store.entries()).await {
            error!(error = %e, "Failed to persist clipboard history");
        }
        self.ui.history_changed(self.store.entries());
    }
}
