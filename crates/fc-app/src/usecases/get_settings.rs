use std::sync::Arc;

use fc_core::ports::SettingsPort;
use fc_core::Settings;
use tracing::warn;

/// Reads the user settings for startup.
pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Returns the stored settings, or the defaults when they cannot be read.
    pub async fn execute(&self) -> Settings {
        match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                Settings::default()
            }
        }
    }
}
