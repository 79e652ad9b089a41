use chrono::{DateTime, Utc};

use super::entry::{ClipboardEntry, EntryKind, Fingerprint};

/// What the platform layer read from the OS clipboard on one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardSnapshot {
    Text(String),
    /// PNG-encoded image bytes.
    Image { png: Vec<u8> },
}

impl ClipboardSnapshot {
    pub fn kind(&self) -> EntryKind {
        match self {
            ClipboardSnapshot::Text(_) => EntryKind::Text,
            ClipboardSnapshot::Image { .. } => EntryKind::Image,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            ClipboardSnapshot::Text(text) => Fingerprint::of(EntryKind::Text, text.as_bytes()),
            ClipboardSnapshot::Image { png } => Fingerprint::of(EntryKind::Image, png),
        }
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            ClipboardSnapshot::Text(text) => text.len(),
            ClipboardSnapshot::Image { png } => png.len(),
        }
    }

    pub fn into_entry(self, captured_at: DateTime<Utc>) -> ClipboardEntry {
        match self {
            ClipboardSnapshot::Text(text) => ClipboardEntry::text(text, captured_at),
            ClipboardSnapshot::Image { png } => ClipboardEntry::image(png, captured_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_fingerprint_matches_entry_fingerprint() {
        let now = Utc::now();
        let text = ClipboardSnapshot::Text("hello".into());
        assert_eq!(text.fingerprint(), text.clone().into_entry(now).fingerprint());

        let image = ClipboardSnapshot::Image { png: vec![1, 2, 3] };
        assert_eq!(image.fingerprint(), image.clone().into_entry(now).fingerprint());
    }

    #[test]
    fn image_snapshot_becomes_labelled_entry() {
        let entry = ClipboardSnapshot::Image { png: vec![7; 4] }.into_entry(Utc::now());
        assert_eq!(entry.kind, EntryKind::Image);
        assert!(entry.content.starts_with("Image "));
        assert_eq!(entry.payload.as_deref(), Some(&[7u8; 4][..]));
    }
}
