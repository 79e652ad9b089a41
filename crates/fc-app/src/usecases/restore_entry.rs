use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use fc_core::clipboard::EntryKind;
use fc_core::ports::SystemClipboardPort;
use tokio::task;
use tracing::info;

use crate::history::ClipboardHistory;

/// Writes a history entry back to the system clipboard.
///
/// The history itself is not reordered; the watcher sees the new clipboard
/// value on its next poll and the entry moves to the top then.
pub struct RestoreEntryUseCase {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl RestoreEntryUseCase {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Restores the entry at `index` and returns its notification summary.
    ///
    /// The clipboard write runs on the blocking pool; decoding a large PNG
    /// must not stall the runtime.
    ///
    /// # Errors
    ///
    /// [`HistoryError::OutOfRange`](fc_core::HistoryError::OutOfRange) (inside
    /// the `anyhow::Error`) for a bad index, or the clipboard write error.
    pub async fn execute(&self, history: &ClipboardHistory, index: usize) -> Result<String> {
        let entry = history.select(index)?;
        let clipboard = self.clipboard.clone();

        let write = match entry.kind {
            EntryKind::Text => {
                let text = entry.content.clone();
                task::spawn_blocking(move || {
                    clipboard
                        .write_text(&text)
                        .context("write text to clipboard failed")
                })
            }
            EntryKind::Image => {
                let png = entry
                    .payload
                    .clone()
                    .ok_or_else(|| anyhow!("image entry {index} has no image data"))?;
                task::spawn_blocking(move || {
                    clipboard
                        .write_image(&png)
                        .context("write image to clipboard failed")
                })
            }
        };
        write.await.context("clipboard write task failed")??;

        info!(index, kind = %entry.kind, "Restored history entry to clipboard");
        Ok(entry.notification_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::AppDeps;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use fc_core::clipboard::{ClipboardEntry, ClipboardSnapshot};
    use fc_core::ports::{ClockPort, HistoryRepositoryPort, SettingsPort, UiPort};
    use fc_core::{HistoryError, Settings};
    use std::sync::Mutex;
    use std::thread;

    #[derive(Default)]
    struct RecordingClipboard {
        texts: Mutex<Vec<String>>,
        images: Mutex<Vec<Vec<u8>>>,
        writer_threads: Mutex<Vec<thread::ThreadId>>,
    }

    impl SystemClipboardPort for RecordingClipboard {
        fn read_snapshot(&self, _: bool) -> Result<Option<ClipboardSnapshot>> {
            Ok(None)
        }
        fn write_text(&self, text: &str) -> Result<()> {
            self.writer_threads.lock().unwrap().push(thread::current().id());
            self.texts.lock().unwrap().push(text.to_string());
            Ok(())
        }
        fn write_image(&self, png: &[u8]) -> Result<()> {
            self.writer_threads.lock().unwrap().push(thread::current().id());
            self.images.lock().unwrap().push(png.to_vec());
            Ok(())
        }
    }

    struct SeededRepo(Vec<ClipboardEntry>);

    #[async_trait]
    impl HistoryRepositoryPort for SeededRepo {
        async fn load(&self) -> Result<Vec<ClipboardEntry>> {
            Ok(self.0.clone())
        }
        async fn save(&self, _: &[ClipboardEntry]) -> Result<()> {
            Ok(())
        }
    }

    struct SilentUi;

    impl UiPort for SilentUi {
        fn history_changed(&self, _: &[ClipboardEntry]) {}
        fn visibility_changed(&self, _: bool) {}
        fn entry_restored(&self, _: &str) {}
    }

    struct DefaultSettings;

    #[async_trait]
    impl SettingsPort for DefaultSettings {
        async fn load(&self) -> Result<Settings> {
            Ok(Settings::default())
        }
        async fn save(&self, _: &Settings) -> Result<()> {
            Ok(())
        }
    }

    struct EpochClock;

    impl ClockPort for EpochClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.timestamp_opt(0, 0).unwrap()
        }
    }

    async fn history_with(
        entries: Vec<ClipboardEntry>,
        clipboard: Arc<RecordingClipboard>,
    ) -> (ClipboardHistory, RestoreEntryUseCase) {
        let deps = AppDeps {
            clipboard: clipboard.clone(),
            history_repo: Arc::new(SeededRepo(entries)),
            settings: Arc::new(DefaultSettings),
            ui_port: Arc::new(SilentUi),
            clock: Arc::new(EpochClock),
        };
        let history = ClipboardHistory::load(&deps, 30).await;
        (history, RestoreEntryUseCase::new(clipboard))
    }

    #[tokio::test]
    async fn restores_text_without_reordering() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clipboard = Arc::new(RecordingClipboard::default());
        let (history, uc) = history_with(
            vec![
                ClipboardEntry::text("top", ts),
                ClipboardEntry::text("second", ts),
            ],
            clipboard.clone(),
        )
        .await;

        let summary = uc.execute(&history, 1).await.unwrap();

        assert_eq!(summary, "second");
        assert_eq!(*clipboard.texts.lock().unwrap(), vec!["second".to_string()]);
        assert_eq!(history.select(0).unwrap().content, "top");
    }

    #[tokio::test]
    async fn restores_image_bytes() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clipboard = Arc::new(RecordingClipboard::default());
        let (history, uc) =
            history_with(vec![ClipboardEntry::image(vec![9, 8, 7], ts)], clipboard.clone()).await;

        uc.execute(&history, 0).await.unwrap();

        assert_eq!(*clipboard.images.lock().unwrap(), vec![vec![9u8, 8, 7]]);
        assert!(clipboard.texts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_history_reports_out_of_range() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let (history, uc) = history_with(Vec::new(), clipboard.clone()).await;

        let err = uc.execute(&history, 0).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<HistoryError>(),
            Some(&HistoryError::OutOfRange { index: 0, len: 0 })
        );
        assert!(clipboard.texts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn clipboard_write_runs_off_the_runtime_thread() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clipboard = Arc::new(RecordingClipboard::default());
        let (history, uc) = history_with(
            vec![
                ClipboardEntry::text("text", ts),
                ClipboardEntry::image(vec![1, 2, 3], ts),
            ],
            clipboard.clone(),
        )
        .await;

        uc.execute(&history, 0).await.unwrap();
        uc.execute(&history, 1).await.unwrap();

        let runtime_thread = thread::current().id();
        let writers = clipboard.writer_threads.lock().unwrap();
        assert_eq!(writers.len(), 2);
        assert!(writers.iter().all(|id| *id != runtime_thread));
    }
}
