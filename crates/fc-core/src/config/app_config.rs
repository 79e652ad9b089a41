use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the per-user configuration directory. Empty means "not set".
    pub data_dir: PathBuf,

    /// Whether a log file is written next to the stderr output.
    /// `None` when the key is absent; the caller picks the default.
    pub file_logging: Option<bool>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Must NOT contain validation or default value logic. Empty strings are
    /// valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool()),
        })
    }

    /// Create empty AppConfig (all empty values)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn data_dir_override(&self) -> Option<&PathBuf> {
        if self.data_dir.as_os_str().is_empty() {
            None
        } else {
            Some(&self.data_dir)
        }
    }
}
