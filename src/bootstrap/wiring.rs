//! Assembles [`AppDeps`] from concrete adapters.

use std::sync::Arc;

use fc_app::{AppDeps, AppPaths};
use fc_core::ports::{SystemClipboardPort, UiPort};
use fc_infra::{FileSettingsRepository, JsonHistoryRepository, SystemClock};

/// History and settings live at `paths`; the clipboard and UI adapters are
/// chosen by the command being run.
pub fn build_deps(
    paths: &AppPaths,
    clipboard: Arc<dyn SystemClipboardPort>,
    ui_port: Arc<dyn UiPort>,
) -> AppDeps {
    AppDeps {
        clipboard,
        history_repo: Arc::new(JsonHistoryRepository::new(paths.history_path.clone())),
        settings: Arc::new(FileSettingsRepository::new(paths.settings_path.clone())),
        ui_port,
        clock: Arc::new(SystemClock),
    }
}
