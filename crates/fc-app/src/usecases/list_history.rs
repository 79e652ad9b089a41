use crate::history::ClipboardHistory;
use crate::rows::{render_rows, HistoryRow};

pub struct ListHistoryUseCase;

impl ListHistoryUseCase {
    /// Every entry as a display row, most recent first.
    pub fn execute(&self, history: &ClipboardHistory) -> Vec<HistoryRow> {
        render_rows(history.entries().iter().enumerate())
    }
}
