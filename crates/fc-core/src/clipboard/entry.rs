use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Maximum characters shown for one history row.
pub const PREVIEW_MAX_CHARS: usize = 100;

const NOTIFICATION_MAX_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Text,
    Image,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Image => "image",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cheap identity of a clipboard value: its kind plus a blake3 digest of the
/// text (for text) or the encoded image bytes (for images).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub kind: EntryKind,
    pub digest: [u8; 32],
}

impl Fingerprint {
    pub fn of(kind: EntryKind, bytes: &[u8]) -> Self {
        Self {
            kind,
            digest: *blake3::hash(bytes).as_bytes(),
        }
    }
}

/// One captured clipboard snapshot.
///
/// For text entries `content` is the literal clipboard text. For image entries
/// `content` is a synthetic label (`"Image 2024-05-01 12:00:00"`) and `payload`
/// holds the encoded PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub content: String,
    pub kind: EntryKind,
    pub timestamp: DateTime<Utc>,
    pub payload: Option<Vec<u8>>,
}

impl ClipboardEntry {
    pub fn text(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            kind: EntryKind::Text,
            timestamp,
            payload: None,
        }
    }

    /// Creates an image entry whose label is derived from the capture time.
    pub fn image(payload: Vec<u8>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: image_label(timestamp),
            kind: EntryKind::Image,
            timestamp,
            payload: Some(payload),
        }
    }

    /// Whether the entry carries nothing worth keeping: whitespace-only text,
    /// or an image without bytes.
    pub fn is_blank(&self) -> bool {
        match self.kind {
            EntryKind::Text => self.content.trim().is_empty(),
            EntryKind::Image => self.payload.as_ref().map_or(true, |p| p.is_empty()),
        }
    }

    /// The bytes that define this entry's identity.
    pub fn identity_bytes(&self) -> &[u8] {
        match self.kind {
            EntryKind::Text => self.content.as_bytes(),
            EntryKind::Image => self.payload.as_deref().unwrap_or_default(),
        }
    }

    /// Exact identity: same kind and byte-for-byte equal text or payload.
    pub fn same_identity(&self, other: &ClipboardEntry) -> bool {
        self.kind == other.kind && self.identity_bytes() == other.identity_bytes()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.kind, self.identity_bytes())
    }

    /// Case-insensitive substring match on `content`. `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.content.to_lowercase().contains(needle)
    }

    /// Content shortened to `max_chars` characters, the last three replaced by `...`
    /// when the text had to be cut.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use fc_core::ClipboardEntry;
    ///
    /// let entry = ClipboardEntry::text("abcdefghij", Utc::now());
    /// assert_eq!(entry.preview(8), "abcde...");
    /// assert_eq!(entry.preview(10), "abcdefghij");
    /// ```
    pub fn preview(&self, max_chars: usize) -> String {
        truncate_chars(&self.content, max_chars, max_chars.saturating_sub(ELLIPSIS.len()))
    }

    /// Short form used in "copied to clipboard" notifications.
    pub fn notification_summary(&self) -> String {
        truncate_chars(&self.content, NOTIFICATION_MAX_CHARS, NOTIFICATION_MAX_CHARS)
    }

    pub fn display_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string()
    }
}

fn image_label(timestamp: DateTime<Utc>) -> String {
    format!(
        "Image {}",
        timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    )
}

fn truncate_chars(text: &str, max_chars: usize, keep: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
