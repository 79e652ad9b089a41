use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use fc_core::clipboard::ClipboardSnapshot;
use fc_core::ports::SystemClipboardPort;
use tracing::{debug, debug_span};

use super::common;

/// System clipboard backed by `clipboard-rs`.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_snapshot(&self, include_images: bool) -> Result<Option<ClipboardSnapshot>> {
        let span = debug_span!("platform.read_clipboard", include_images);
        span.in_scope(|| {
            let mut ctx = self.lock()?;
            let snapshot = common::read_snapshot(&mut ctx, include_images)?;

            if let Some(snapshot) = &snapshot {
                debug!(
                    kind = %snapshot.kind(),
                    size_bytes = snapshot.size_bytes(),
                    "Read system clipboard"
                );
            }

            Ok(snapshot)
        })
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let span = debug_span!("platform.write_clipboard", kind = "text");
        span.in_scope(|| {
            let mut ctx = self.lock()?;
            common::write_text(&mut ctx, text)?;

            debug!(chars = text.chars().count(), "Wrote text to system clipboard");
            Ok(())
        })
    }

    fn write_image(&self, png: &[u8]) -> Result<()> {
        let span = debug_span!("platform.write_clipboard", kind = "image");
        span.in_scope(|| {
            let mut ctx = self.lock()?;
            common::write_image(&mut ctx, png)?;

            debug!(size_bytes = png.len(), "Wrote image to system clipboard");
            Ok(())
        })
    }
}
