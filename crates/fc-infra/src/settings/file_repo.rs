use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use fc_core::{
    ports::SettingsPort,
    settings::model::{Settings, CURRENT_SCHEMA_VERSION},
};
use tokio::fs;
use tracing::warn;

use crate::fs::atomic_write;

pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Creates a repository that reads and writes the given settings file.
    ///
    /// # Examples
    ///
    /// ```
    /// use fc_infra::FileSettingsRepository;
    ///
    /// let _repo = FileSettingsRepository::new("config/settings.json");
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Loads settings from the repository path. Keys missing from the file
    /// take their default values.
    ///
    /// If the settings file does not exist, returns `Settings::default()`.
    /// Read errors carry the settings path in their context.
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))?;
        if settings.schema_version > CURRENT_SCHEMA_VERSION {
            warn!(
                found = settings.schema_version,
                supported = CURRENT_SCHEMA_VERSION,
                "Settings file was written by a newer version; unknown keys are ignored"
            );
        }

        Ok(settings)
    }

    /// Persist settings as pretty-printed JSON, written atomically.
    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        atomic_write(&self.path, content.as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        assert_eq!(repo.load().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("cfg").join("settings.json"));

        let mut settings = Settings::default();
        settings.history.capacity = 12;
        settings.watcher.poll_interval_ms = 250;
        settings.watcher.capture_images = false;
        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"history": {"capacity": 12}}"#).unwrap();

        let loaded = FileSettingsRepository::new(&path).load().await.unwrap();

        assert_eq!(loaded.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(loaded.history.capacity, 12);
        assert_eq!(loaded.watcher, Settings::default().watcher);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileSettingsRepository::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("parse settings failed"));
    }
}
