use std::sync::Arc;

use fc_core::ports::SettingsPort;
use fc_core::HistoryError;
use tracing::error;

use crate::history::ClipboardHistory;

/// Changes the history bound and remembers it in the settings file.
pub struct SetCapacityUseCase {
    settings: Arc<dyn SettingsPort>,
}

impl SetCapacityUseCase {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Applies `capacity` and returns how many entries were evicted.
    ///
    /// An invalid capacity is rejected before anything is written. A settings
    /// write failure is logged; the new bound still applies to this session.
    pub async fn execute(
        &self,
        history: &mut ClipboardHistory,
        capacity: usize,
    ) -> Result<usize, HistoryError> {
        let evicted = history.set_capacity(capacity).await?;

        let persisted = async {
            let mut settings = self.settings.load().await?;
            settings.history.capacity = capacity;
            self.settings.save(&settings).await
        };
        if let Err(e) = persisted.await {
            error!(error = %e, capacity, "Failed to save history capacity to settings");
        }

        Ok(evicted.len())
    }
}
