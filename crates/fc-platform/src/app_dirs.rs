use std::path::PathBuf;

use fc_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "fluentclip";
const PROFILE_ENV: &str = "FLUENTCLIP_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves FluentClip's per-user directories with the `dirs` crate.
pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Creates an adapter that resolves against the system directories.
    ///
    /// # Examples
    ///
    /// ```
    /// use fc_platform::app_dirs::DirsAppDirsAdapter;
    /// let _ = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Uses `base` for both the config and the data root instead of the
    /// system directories.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    /// Joins the app directory name (`fluentclip`, or `fluentclip-<profile>`
    /// when `FLUENTCLIP_PROFILE` is set) onto the config and data-local dirs.
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_config_root: base_config.join(&app_dir_name),
            app_data_root: base_data.join(&app_dir_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var(PROFILE_ENV).ok();

        match value {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        result
    }

    #[test]
    fn adapter_appends_fluentclip_dir_name() {
        with_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_config_root, PathBuf::from("/tmp/fluentclip"));
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/fluentclip"));
        });
    }

    #[test]
    fn empty_profile_is_ignored() {
        with_profile(Some(""), || {
            let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert!(dirs.app_config_root.ends_with("fluentclip"));
        });
    }

    #[test]
    fn adapter_isolates_dirs_for_different_profiles() {
        let dirs_a = with_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_config_root, PathBuf::from("/tmp/fluentclip-a"));
        assert_eq!(dirs_b.app_config_root, PathBuf::from("/tmp/fluentclip-b"));
        assert_ne!(dirs_a.app_data_root, dirs_b.app_data_root);
    }
}
