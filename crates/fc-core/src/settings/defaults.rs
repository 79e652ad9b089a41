use super::model::*;
use crate::clipboard::DEFAULT_CAPACITY;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            capture_images: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            history: HistorySettings::default(),
            watcher: WatcherSettings::default(),
        }
    }
}
