//! Display rows for history listings.

use std::fmt;
use std::io::Cursor;

use fc_core::clipboard::{ClipboardEntry, EntryKind, PREVIEW_MAX_CHARS};
use image::ImageReader;

/// Shown instead of an image label when the stored bytes are not a readable image.
pub const IMAGE_PREVIEW_UNAVAILABLE: &str = "[Image - preview unavailable]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Position in the history, as accepted by `select`.
    pub index: usize,
    pub kind: EntryKind,
    pub preview: String,
    pub time: String,
}

impl HistoryRow {
    pub fn from_entry(index: usize, entry: &ClipboardEntry) -> Self {
        let preview = match entry.kind {
            EntryKind::Text => entry.preview(PREVIEW_MAX_CHARS),
            EntryKind::Image => image_preview(entry),
        };

        Self {
            index,
            kind: entry.kind,
            preview,
            time: entry.display_time(),
        }
    }
}

impl fmt::Display for HistoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One row per line regardless of what the text contains.
        let single_line = self.preview.replace(['\r', '\n'], " ");
        write!(f, "{:>3}  {}  {}", self.index, self.time, single_line)
    }
}

pub fn render_rows<'a>(
    entries: impl IntoIterator<Item = (usize, &'a ClipboardEntry)>,
) -> Vec<HistoryRow> {
    entries
        .into_iter()
        .map(|(index, entry)| HistoryRow::from_entry(index, entry))
        .collect()
}

pub fn items_footer(count: usize) -> String {
    format!("Items: {count}")
}

fn image_preview(entry: &ClipboardEntry) -> String {
    let Some(bytes) = entry.payload.as_deref() else {
        return IMAGE_PREVIEW_UNAVAILABLE.to_string();
    };

    match image_dimensions(bytes) {
        Ok((width, height)) => format!("{} ({width}x{height})", entry.content),
        Err(e) => {
            tracing::debug!(error = %e, label = %entry.content, "Unreadable image payload");
            IMAGE_PREVIEW_UNAVAILABLE.to_string()
        }
    }
}

fn image_dimensions(bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}
