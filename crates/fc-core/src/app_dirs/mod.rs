use std::path::PathBuf;

/// Resolved per-user directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds `history.json` and `settings.json`.
    pub app_config_root: PathBuf,
    /// Holds logs.
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// Puts everything under one root, used when the config file overrides the location.
    pub fn single_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            app_config_root: root.clone(),
            app_data_root: root,
        }
    }
}
