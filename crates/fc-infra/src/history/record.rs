//! On-disk shape of one history entry.
//!
//! ```json
//! {"content": "hello", "timestamp": "2024-05-01T12:00:00+00:00", "type": "text"}
//! {"content": "Image 2024-05-01 12:00:00", "timestamp": "...", "type": "image", "image_data": "iVBORw0..."}
//! ```

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use fc_core::clipboard::{ClipboardEntry, EntryKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub content: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl From<&ClipboardEntry> for HistoryRecord {
    fn from(entry: &ClipboardEntry) -> Self {
        let image_data = match entry.kind {
            EntryKind::Image => entry.payload.as_ref().map(|bytes| STANDARD.encode(bytes)),
            EntryKind::Text => None,
        };
        Self {
            content: entry.content.clone(),
            timestamp: entry.timestamp,
            kind: entry.kind,
            image_data,
        }
    }
}

impl TryFrom<HistoryRecord> for ClipboardEntry {
    type Error = anyhow::Error;

    fn try_from(record: HistoryRecord) -> Result<Self> {
        let payload = match record.kind {
            EntryKind::Text => None,
            EntryKind::Image => {
                let encoded = record
                    .image_data
                    .ok_or_else(|| anyhow!("image record without image_data"))?;
                Some(
                    STANDARD
                        .decode(encoded.as_bytes())
                        .context("image_data is not valid base64")?,
                )
            }
        };

        Ok(ClipboardEntry {
            content: record.content,
            kind: record.kind,
            timestamp: record.timestamp,
            payload,
        })
    }
}

/// RFC 3339 on write. On read, offset-less ISO-8601 strings (with or without
/// fractional seconds) are accepted and taken as local time.
mod timestamp_format {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.with_timezone(&Utc));
        }
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeZone};

    #[test]
    fn text_record_has_no_image_data_key() {
        let entry = ClipboardEntry::text("hello", Utc::now());
        let json = serde_json::to_value(HistoryRecord::from(&entry)).unwrap();

        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "hello");
        assert!(json.get("image_data").is_none());
    }

    #[test]
    fn image_record_carries_base64_payload() {
        let entry = ClipboardEntry::image(vec![0x89, b'P', b'N', b'G'], Utc::now());
        let record = HistoryRecord::from(&entry);

        assert_eq!(record.kind, EntryKind::Image);
        assert_eq!(record.image_data.as_deref(), Some("iVBORw=="));
    }

    #[test]
    fn naive_timestamps_are_read_as_local_time() {
        let parsed = timestamp_format::parse("2024-02-03T04:05:06.123456").unwrap();
        let expected = Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 2, 3)
                    .unwrap()
                    .and_hms_micro_opt(4, 5, 6, 123_456)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn rfc3339_timestamps_keep_their_offset() {
        let parsed = timestamp_format::parse("2024-02-03T04:05:06+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 3, 2, 5, 6).unwrap());
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert!(timestamp_format::parse("yesterday").is_none());
    }

    #[test]
    fn image_record_without_data_is_rejected() {
        let record = HistoryRecord {
            content: "Image 2024-01-01 00:00:00".into(),
            timestamp: Utc::now(),
            kind: EntryKind::Image,
            image_data: None,
        };
        assert!(ClipboardEntry::try_from(record).is_err());
    }
}
