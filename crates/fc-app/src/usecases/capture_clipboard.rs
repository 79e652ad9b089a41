use std::sync::Arc;

use fc_core::clipboard::{ClipboardSnapshot, ObserveOutcome};
use fc_core::ports::ClockPort;

use crate::history::ClipboardHistory;

/// Turns a clipboard snapshot into a timestamped entry and records it.
///
/// Image snapshots get their `Image <time>` label here, from the same
/// instant as the entry timestamp.
pub struct CaptureClipboardUseCase {
    clock: Arc<dyn ClockPort>,
}

impl CaptureClipboardUseCase {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub async fn execute(
        &self,
        history: &mut ClipboardHistory,
        snapshot: ClipboardSnapshot,
    ) -> ObserveOutcome {
        let entry = snapshot.into_entry(self.clock.now());
        history.observe(entry).await
    }
}
