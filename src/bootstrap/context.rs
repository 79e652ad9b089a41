use std::path::Path;

use anyhow::Result;
use fc_app::AppPaths;
use fc_core::app_dirs::AppDirs;
use fc_core::config::AppConfig;
use fc_core::ports::AppDirsPort;
use fc_platform::DirsAppDirsAdapter;

/// Reads `--config` when given; no file means an empty config.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => fc_infra::load_config(path),
        None => Ok(AppConfig::empty()),
    }
}

/// `[storage] data_dir` puts everything under one directory; otherwise the
/// per-user system directories are used.
pub fn resolve_app_dirs(config: &AppConfig, dirs: &dyn AppDirsPort) -> Result<AppDirs> {
    if let Some(root) = config.data_dir_override() {
        return Ok(AppDirs::single_root(root.clone()));
    }
    Ok(dirs.get_app_dirs()?)
}

/// Everything a command needs to know about where the app keeps its files.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: AppPaths,
    pub file_logging: bool,
}

impl AppContext {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let dirs = resolve_app_dirs(config, &DirsAppDirsAdapter::new())?;
        Ok(Self {
            paths: AppPaths::from_app_dirs(&dirs),
            file_logging: config.file_logging.unwrap_or(true),
        })
    }
}
