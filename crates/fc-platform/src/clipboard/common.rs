use anyhow::{anyhow, Result};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat, RustImageData};
use fc_core::clipboard::ClipboardSnapshot;
use tracing::debug;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Reads the clipboard with a locked context.
///
/// Non-blank text wins. Blank text falls through to the image check, the
/// same as an empty clipboard would.
pub(super) fn read_snapshot(
    ctx: &mut ClipboardContext,
    include_images: bool,
) -> Result<Option<ClipboardSnapshot>> {
    if ctx.has(ContentFormat::Text) {
        let text = map_clipboard_err(ctx.get_text())?;
        if !text.trim().is_empty() {
            return Ok(Some(ClipboardSnapshot::Text(text)));
        }
    }

    if include_images && ctx.has(ContentFormat::Image) {
        let image = map_clipboard_err(ctx.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        let bytes = png.get_bytes().to_vec();
        if !bytes.is_empty() {
            return Ok(Some(ClipboardSnapshot::Image { png: bytes }));
        }
        debug!("Clipboard image encoded to an empty PNG, ignoring");
    }

    Ok(None)
}

pub(super) fn write_text(ctx: &mut ClipboardContext, text: &str) -> Result<()> {
    map_clipboard_err(ctx.set_text(text.to_string()))
}

pub(super) fn write_image(ctx: &mut ClipboardContext, png: &[u8]) -> Result<()> {
    let image = map_clipboard_err(RustImageData::from_bytes(png))?;
    map_clipboard_err(ctx.set_image(image))
}
