use anyhow::{bail, Result};
use fc_core::clipboard::ClipboardSnapshot;
use fc_core::ports::SystemClipboardPort;

/// Stands in for the OS clipboard in commands that never touch it
/// (`list`, `search`, `clear`, `capacity`), so they work without a display.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl SystemClipboardPort for UnavailableClipboard {
    fn read_snapshot(&self, _include_images: bool) -> Result<Option<ClipboardSnapshot>> {
        bail!("system clipboard is not opened by this command")
    }

    fn write_text(&self, _text: &str) -> Result<()> {
        bail!("system clipboard is not opened by this command")
    }

    fn write_image(&self, _png: &[u8]) -> Result<()> {
        bail!("system clipboard is not opened by this command")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_fails() {
        let clipboard = UnavailableClipboard;
        assert!(clipboard.read_snapshot(true).is_err());
        assert!(clipboard.write_text("x").is_err());
        assert!(clipboard.write_image(&[]).is_err());
    }
}
