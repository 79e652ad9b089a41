use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InstanceLockError {
    #[error(
        "another FluentClip process is using this data directory (lock: {}); \
         stop it, or send commands through `fluentclip run --interactive`",
        path.display()
    )]
    Held { path: PathBuf },

    #[error("open lock file failed: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Exclusive advisory lock that marks the one process allowed to write a
/// history file. Released when dropped or when the process exits.
#[derive(Debug)]
pub struct InstanceLock {
    file: File,
    path: PathBuf,
}

impl InstanceLock {
    /// Takes the lock without waiting. Creates the file and its parent
    /// directory when missing.
    pub fn acquire(path: &Path) -> Result<Self, InstanceLockError> {
        let io_error = |source| InstanceLockError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(io_error)?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!(path = %path.display(), "Acquired instance lock");
                Ok(Self {
                    file,
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(InstanceLockError::Held {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(io_error(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
