use crate::clipboard::ClipboardEntry;

/// Receives refresh notifications for whatever renders the history.
///
/// Called on the runtime's single consumer task after every mutation, so
/// implementations must not block.
pub trait UiPort: Send + Sync {
    /// The history changed; `entries` is the full list in display order.
    fn history_changed(&self, entries: &[ClipboardEntry]);

    /// The popup was toggled.
    fn visibility_changed(&self, visible: bool);

    /// An entry was written back to the system clipboard. `summary` is the
    /// short text meant for a notification.
    fn entry_restored(&self, summary: &str);
}
