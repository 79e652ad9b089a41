use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use fc_core::clipboard::ClipboardEntry;
use fc_core::ports::HistoryRepositoryPort;
use tokio::fs;
use tracing::{debug, warn};

use super::record::HistoryRecord;
use crate::fs::atomic_write;

/// Stores the history as a JSON array in a single file.
pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryRepositoryPort for JsonHistoryRepository {
    /// Reads the history file.
    ///
    /// A missing file is an empty history. A file that is not a JSON array is
    /// an error. Each element is read on its own: a record with a bad
    /// timestamp, an unknown `type`, missing keys or an undecodable image
    /// payload is skipped with a warning and the rest still load.
    async fn load(&self) -> Result<Vec<ClipboardEntry>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read history failed: {}", self.path.display()))
            }
        };

        let records: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("parse history failed: {}", self.path.display()))?;

        let mut entries = Vec::with_capacity(records.len());
        for (index, value) in records.into_iter().enumerate() {
            let entry = serde_json::from_value::<HistoryRecord>(value)
                .map_err(anyhow::Error::from)
                .and_then(ClipboardEntry::try_from);
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index, error = %e, "Skipping unreadable history record"),
            }
        }

        debug!(count = entries.len(), path = %self.path.display(), "Loaded history");
        Ok(entries)
    }

    async fn save(&self, entries: &[ClipboardEntry]) -> Result<()> {
        let records: Vec<HistoryRecord> = entries.iter().map(HistoryRecord::from).collect();
        let content = serde_json::to_vec(&records).context("serialize history failed")?;

        atomic_write(&self.path, &content).await?;
        debug!(count = entries.len(), path = %self.path.display(), "Saved history");
        Ok(())
    }
}
