//! System clipboard port - abstracts OS clipboard access

use anyhow::Result;

use crate::clipboard::ClipboardSnapshot;

/// Platform-agnostic access to the OS clipboard.
///
/// Implementations are blocking and cheap; the watcher calls `read_snapshot`
/// on every poll tick.
pub trait SystemClipboardPort: Send + Sync {
    /// Reads the current clipboard value.
    ///
    /// Text wins over images when both are present. Returns `Ok(None)` when the
    /// clipboard holds nothing we capture (or only an image and
    /// `include_images` is false).
    fn read_snapshot(&self, include_images: bool) -> Result<Option<ClipboardSnapshot>>;

    fn write_text(&self, text: &str) -> Result<()>;

    /// Writes PNG-encoded image bytes.
    fn write_image(&self, png: &[u8]) -> Result<()>;
}
