use crate::history::ClipboardHistory;
use crate::rows::{render_rows, HistoryRow};

pub struct SearchHistoryUseCase;

impl SearchHistoryUseCase {
    /// Rows whose content contains `query`, ignoring case. Each row keeps its
    /// index in the full history so it can be passed to `select`.
    pub fn execute(&self, history: &ClipboardHistory, query: &str) -> Vec<HistoryRow> {
        render_rows(history.search(query).indexed())
    }
}
