use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use fc_app::{items_footer, render_rows};
use fc_core::clipboard::ClipboardEntry;
use fc_core::ports::UiPort;
use tracing::{debug, info, warn};

/// Terminal rendition of the popup.
///
/// Every notification is logged. With echo on (interactive `run`), the
/// visible popup is printed as rows followed by the item count, and restores
/// print a "Copied to clipboard" line.
pub struct TerminalUi {
    echo: bool,
    visible: AtomicBool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalUi {
    /// Logs notifications and prints nothing.
    pub fn quiet() -> Self {
        Self {
            echo: false,
            visible: AtomicBool::new(false),
            out: Mutex::new(Box::new(io::sink())),
        }
    }

    /// Prints to stdout.
    pub fn interactive() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            echo: true,
            visible: AtomicBool::new(false),
            out: Mutex::new(out),
        }
    }

    fn print(&self, text: &str) {
        if !self.echo {
            return;
        }
        let Ok(mut out) = self.out.lock() else {
            warn!("Terminal output lock poisoned");
            return;
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl UiPort for TerminalUi {
    fn history_changed(&self, entries: &[ClipboardEntry]) {
        debug!(entries = entries.len(), "History changed");
        if !self.visible.load(Ordering::Relaxed) {
            return;
        }

        let mut text = String::new();
        for row in render_rows(entries.iter().enumerate()) {
            text.push_str(&row.to_string());
            text.push('\n');
        }
        text.push_str(&items_footer(entries.len()));
        text.push('\n');
        self.print(&text);
    }

    fn visibility_changed(&self, visible: bool) {
        info!(visible, "Popup visibility changed");
        self.visible.store(visible, Ordering::Relaxed);
        if !visible {
            self.print("(hidden)\n");
        }
    }

    fn entry_restored(&self, summary: &str) {
        info!("Copied to clipboard: {summary}");
        self.print(&format!("Copied to clipboard: {summary}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn entries() -> Vec<ClipboardEntry> {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 15, 30).unwrap();
        vec![
            ClipboardEntry::text("second\nline", at),
            ClipboardEntry::text("first", at),
        ]
    }

    #[test]
    fn hidden_popup_prints_nothing() {
        let buffer = SharedBuffer::default();
        let ui = TerminalUi::with_writer(Box::new(buffer.clone()));

        ui.history_changed(&entries());

        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn visible_popup_prints_rows_and_footer() {
        let buffer = SharedBuffer::default();
        let ui = TerminalUi::with_writer(Box::new(buffer.clone()));

        ui.visibility_changed(true);
        ui.history_changed(&entries());

        let printed = buffer.contents();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  0  "));
        assert!(lines[0].ends_with("second line"));
        assert!(lines[1].ends_with("first"));
        assert_eq!(lines[2], "Items: 2");
    }

    #[test]
    fn restore_is_announced() {
        let buffer = SharedBuffer::default();
        let ui = TerminalUi::with_writer(Box::new(buffer.clone()));

        ui.entry_restored("hello");

        assert_eq!(buffer.contents(), "Copied to clipboard: hello\n");
    }

    #[test]
    fn quiet_ui_accepts_everything() {
        let ui = TerminalUi::quiet();
        ui.visibility_changed(true);
        ui.history_changed(&entries());
        ui.entry_restored("hello");
    }
}
