use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of entries kept in the history.
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherSettings {
    /// How often the system clipboard is polled.
    pub poll_interval_ms: u64,

    /// Whether image contents are captured at all.
    #[serde(default = "default_capture_images")]
    pub capture_images: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Written with every save. A hand-written file without it reads as the
    /// current version.
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub watcher: WatcherSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_capture_images() -> bool {
    true
}
