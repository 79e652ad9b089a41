use crate::history::ClipboardHistory;

/// Removes every entry. The emptied history is saved right away.
pub struct ClearHistoryUseCase;

impl ClearHistoryUseCase {
    pub async fn execute(&self, history: &mut ClipboardHistory) -> usize {
        history.clear().await
    }
}
