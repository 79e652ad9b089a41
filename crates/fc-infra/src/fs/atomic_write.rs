use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// Sibling path used while a file is being replaced: `history.json` → `history.json.tmp`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Writes `content` to a temporary file next to `path` and renames it over the
/// target, creating missing parent directories first.
///
/// On success the target holds either its previous contents or the complete
/// new contents, never a partial write.
///
/// # Errors
///
/// Returns an error with the offending path in its context if directory
/// creation, the temporary write or the rename fails.
pub async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create dir failed: {}", dir.display()))?;
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, content)
        .await
        .with_context(|| format!("write temp file failed: {}", tmp_path.display()))?;

    // TODO: rename over an open file is not atomic on Windows; fine on macOS/Linux.
    fs::rename(&tmp_path, path).await.with_context(|| {
        format!(
            "rename temp file to target failed: {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
