use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardEntry;

/// Durable storage for the whole history list.
///
/// The history is small and always written as a unit, so the port deals in
/// complete, ordered lists rather than individual records.
#[async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    /// Loads the persisted entries, most recent first.
    ///
    /// A missing store yields an empty list. A store that exists but cannot be
    /// parsed is an error; the caller decides how to recover.
    async fn load(&self) -> Result<Vec<ClipboardEntry>>;

    /// Overwrites the persisted entries with `entries`.
    async fn save(&self, entries: &[ClipboardEntry]) -> Result<()>;
}
