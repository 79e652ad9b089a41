//! Polling clipboard watcher.
//!
//! The watcher is an event source. It reads the system clipboard through
//! [`SystemClipboardPort`] on a fixed interval and emits
//! [`PlatformEvent::ClipboardCaptured`] when the value differs from the
//! previous poll. It never touches the history; the runtime decides what a
//! capture means.
//!
//! ```text
//! System clipboard
//!      ↓
//! SystemClipboardPort
//!      ↓
//! PollingClipboardWatcher   (this module)
//!      ↓
//! PlatformEvent
//!      ↓
//! AppRuntime
//! ```
//!
//! Read failures do not stop the watcher. They are counted, logged on the
//! first failure and every tenth after that, and after ten in a row the poll
//! delay doubles per failure up to [`MAX_BACKOFF`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use fc_core::clipboard::{ClipboardSnapshot, Fingerprint};
use fc_core::ports::SystemClipboardPort;
use fc_core::settings::model::WatcherSettings;
use tokio::sync::oneshot;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info, warn};

use crate::ipc::PlatformEvent;
use crate::runtime::event_bus::PlatformEventSender;

/// Consecutive failures tolerated before the poll delay starts growing.
pub const BACKOFF_THRESHOLD: u32 = 10;
pub const MAX_BACKOFF: Duration = Duration::from_secs(5);
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(50);
const LOG_EVERY_NTH_FAILURE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    pub poll_interval: Duration,
    pub capture_images: bool,
}

impl WatcherConfig {
    pub fn from_settings(settings: &WatcherSettings) -> Self {
        Self {
            poll_interval: Duration::from_millis(settings.poll_interval_ms).max(MIN_POLL_INTERVAL),
            capture_images: settings.capture_images,
        }
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self::from_settings(&WatcherSettings::default())
    }
}

pub struct PollingClipboardWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    tx: PlatformEventSender,
    config: WatcherConfig,
    last_fingerprint: Option<Fingerprint>,
    consecutive_failures: u32,
}

impl PollingClipboardWatcher {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        tx: PlatformEventSender,
        config: WatcherConfig,
    ) -> Self {
        Self {
            clipboard,
            tx,
            config,
            last_fingerprint: None,
            consecutive_failures: 0,
        }
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Reads the clipboard once.
    ///
    /// Returns `Ok(Some(_))` only when the value differs from the last one
    /// this watcher returned. An empty clipboard does not reset that memory.
    pub fn poll_once(&mut self) -> Result<Option<ClipboardSnapshot>> {
        let read = self.clipboard.read_snapshot(self.config.capture_images);
        self.track_read(read)
    }

    /// [`poll_once`](Self::poll_once) with the clipboard read moved to the
    /// blocking pool. Image reads encode a PNG and can take a while.
    pub async fn poll(&mut self) -> Result<Option<ClipboardSnapshot>> {
        let clipboard = self.clipboard.clone();
        let capture_images = self.config.capture_images;
        let read = task::spawn_blocking(move || clipboard.read_snapshot(capture_images))
            .await
            .map_err(|e| anyhow!("clipboard read task failed: {e}"))
            .and_then(|read| read);
        self.track_read(read)
    }

    fn track_read(
        &mut self,
        read: Result<Option<ClipboardSnapshot>>,
    ) -> Result<Option<ClipboardSnapshot>> {
        let snapshot = match read {
            Ok(snapshot) => {
                if self.consecutive_failures > 0 {
                    info!(
                        failures = self.consecutive_failures,
                        "Clipboard reads recovered"
                    );
                    self.consecutive_failures = 0;
                }
                snapshot
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                let n = self.consecutive_failures;
                if n == 1 || n % LOG_EVERY_NTH_FAILURE == 0 {
                    warn!(error = %e, consecutive_failures = n, "Failed to read clipboard");
                }
                return Err(e);
            }
        };

        let Some(snapshot) = snapshot else {
            return Ok(None);
        };

        let fingerprint = snapshot.fingerprint();
        if self.last_fingerprint == Some(fingerprint) {
            return Ok(None);
        }
        self.last_fingerprint = Some(fingerprint);

        debug!(
            kind = %snapshot.kind(),
            size_bytes = snapshot.size_bytes(),
            "Clipboard changed"
        );
        Ok(Some(snapshot))
    }

    /// Starts polling on a tokio task.
    pub fn spawn(self) -> WatcherHandle {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(self.run(stop_rx));
        WatcherHandle {
            stop_tx: Some(stop_tx),
            join,
        }
    }

    async fn run(mut self, mut stop_rx: oneshot::Receiver<()>) {
        info!(
            poll_interval_ms = self.config.poll_interval.as_millis() as u64,
            capture_images = self.config.capture_images,
            "Clipboard watcher started"
        );

        loop {
            let delay = next_delay(self.config.poll_interval, self.consecutive_failures);
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = tokio::time::sleep(delay) => {}
            }

            // Errors are already counted and logged by track_read.
            if let Ok(Some(snapshot)) = self.poll().await {
                if self
                    .tx
                    .send(PlatformEvent::ClipboardCaptured(snapshot))
                    .await
                    .is_err()
                {
                    debug!("Platform event receiver dropped, stopping clipboard watcher");
                    return;
                }
            }
        }

        let _ = self.tx.try_send(PlatformEvent::WatcherStopped);
        info!("Clipboard watcher stopped");
    }
}

/// Delay before the next poll given the current failure streak.
fn next_delay(base: Duration, failures: u32) -> Duration {
    if failures < BACKOFF_THRESHOLD {
        return base;
    }
    let exponent = (failures - BACKOFF_THRESHOLD + 1).min(16);
    base.saturating_mul(1u32 << exponent)
        .min(MAX_BACKOFF.max(base))
}

/// Controls a running watcher task. Dropping the handle also stops it.
pub struct WatcherHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    join: JoinHandle<()>,
}

impl WatcherHandle {
    /// Signals the watcher to stop and waits for the task to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.join).await {
            warn!(error = %e, "Clipboard watcher task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
