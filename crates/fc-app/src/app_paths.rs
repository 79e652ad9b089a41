use std::path::PathBuf;

use fc_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub history_path: PathBuf,
    pub settings_path: PathBuf,
    /// Held by the process that may write the history.
    pub lock_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            history_path: dirs.app_config_root.join("history.json"),
            settings_path: dirs.app_config_root.join("settings.json"),
            lock_path: dirs.app_config_root.join("fluentclip.lock"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
