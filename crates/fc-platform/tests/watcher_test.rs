use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use fc_core::clipboard::ClipboardSnapshot;
use fc_core::ports::SystemClipboardPort;
use fc_platform::{platform_event_channel, PlatformEvent, PollingClipboardWatcher, WatcherConfig};

/// Clipboard whose next reads can be scripted. Once the script is drained it
/// returns whatever `set` stored last.
#[derive(Default)]
struct ScriptedClipboard {
    script: Mutex<VecDeque<Result<Option<ClipboardSnapshot>>>>,
    current: Mutex<Option<ClipboardSnapshot>>,
    include_images_seen: Mutex<Vec<bool>>,
}

impl ScriptedClipboard {
    fn holding(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(ClipboardSnapshot::Text(text.into()));
        clipboard
    }

    fn set(&self, snapshot: ClipboardSnapshot) {
        *self.current.lock().unwrap() = Some(snapshot);
    }

    fn push(&self, read: Result<Option<ClipboardSnapshot>>) {
        self.script.lock().unwrap().push_back(read);
    }
}

impl SystemClipboardPort for ScriptedClipboard {
    fn read_snapshot(&self, include_images: bool) -> Result<Option<ClipboardSnapshot>> {
        self.include_images_seen.lock().unwrap().push(include_images);
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }
        Ok(self.current.lock().unwrap().clone())
    }

    fn write_text(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn write_image(&self, _png: &[u8]) -> Result<()> {
        Ok(())
    }
}

fn config() -> WatcherConfig {
    WatcherConfig {
        poll_interval: Duration::from_millis(500),
        capture_images: true,
    }
}

#[tokio::test]
async fn test_unchanged_clipboard_is_reported_once() {
    let clipboard = Arc::new(ScriptedClipboard::holding("first"));
    let (tx, _rx) = platform_event_channel();
    let mut watcher = PollingClipboardWatcher::new(clipboard.clone(), tx, config());

    assert_eq!(
        watcher.poll_once().unwrap(),
        Some(ClipboardSnapshot::Text("first".into()))
    );
    assert_eq!(watcher.poll_once().unwrap(), None);

    clipboard.set(ClipboardSnapshot::Text("second".into()));
    assert!(watcher.poll_once().unwrap().is_some());

    clipboard.set(ClipboardSnapshot::Text("first".into()));
    assert!(
        watcher.poll_once().unwrap().is_some(),
        "going back to an older value is a change"
    );
}

#[tokio::test]
async fn test_empty_clipboard_does_not_reset_change_detection() {
    let clipboard = Arc::new(ScriptedClipboard::holding("same"));
    let (tx, _rx) = platform_event_channel();
    let mut watcher = PollingClipboardWatcher::new(clipboard.clone(), tx, config());

    assert!(watcher.poll_once().unwrap().is_some());
    clipboard.push(Ok(None));
    assert_eq!(watcher.poll_once().unwrap(), None);
    assert_eq!(watcher.poll_once().unwrap(), None);
}

#[tokio::test]
async fn test_capture_images_setting_reaches_the_clipboard() {
    let clipboard = Arc::new(ScriptedClipboard::default());
    let (tx, _rx) = platform_event_channel();
    let mut watcher = PollingClipboardWatcher::new(
        clipboard.clone(),
        tx,
        WatcherConfig {
            capture_images: false,
            ..config()
        },
    );

    watcher.poll_once().unwrap();

    assert_eq!(*clipboard.include_images_seen.lock().unwrap(), vec![false]);
}

#[tokio::test]
async fn test_failures_are_counted_and_reset_on_success() {
    let clipboard = Arc::new(ScriptedClipboard::holding("ok"));
    for _ in 0..3 {
        clipboard.push(Err(anyhow::anyhow!("clipboard owner went away")));
    }
    let (tx, _rx) = platform_event_channel();
    let mut watcher = PollingClipboardWatcher::new(clipboard, tx, config());

    for _ in 0..3 {
        assert!(watcher.poll_once().is_err());
    }
    assert_eq!(watcher.consecutive_failures(), 3);

    assert!(watcher.poll_once().unwrap().is_some());
    assert_eq!(watcher.consecutive_failures(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_spawned_watcher_emits_captures_and_stops() {
    let clipboard = Arc::new(ScriptedClipboard::holding("hello"));
    let (tx, mut rx) = platform_event_channel();
    let handle = PollingClipboardWatcher::new(clipboard.clone(), tx, config()).spawn();

    assert_eq!(
        rx.recv().await,
        Some(PlatformEvent::ClipboardCaptured(ClipboardSnapshot::Text(
            "hello".into()
        )))
    );

    clipboard.set(ClipboardSnapshot::Image {
        png: vec![0x89, b'P', b'N', b'G'],
    });
    assert_eq!(
        rx.recv().await,
        Some(PlatformEvent::ClipboardCaptured(ClipboardSnapshot::Image {
            png: vec![0x89, b'P', b'N', b'G'],
        }))
    );

    handle.stop().await;
    assert_eq!(rx.recv().await, Some(PlatformEvent::WatcherStopped));
}

#[tokio::test(start_paused = true)]
async fn test_watcher_keeps_running_through_read_errors() {
    let clipboard = Arc::new(ScriptedClipboard::holding("after errors"));
    for _ in 0..12 {
        clipboard.push(Err(anyhow::anyhow!("busy")));
    }
    let (tx, mut rx) = platform_event_channel();
    let handle = PollingClipboardWatcher::new(clipboard, tx, config()).spawn();

    let event = tokio::time::timeout(Duration::from_secs(60), rx.recv())
        .await
        .expect("watcher should recover within the back-off cap");
    assert_eq!(
        event,
        Some(PlatformEvent::ClipboardCaptured(ClipboardSnapshot::Text(
            "after errors".into()
        )))
    );

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_watcher_exits_when_receiver_is_dropped() {
    let clipboard = Arc::new(ScriptedClipboard::holding("nobody listens"));
    let (tx, rx) = platform_event_channel();
    drop(rx);

    let handle = PollingClipboardWatcher::new(clipboard, tx, config()).spawn();
    for _ in 0..600 {
        if handle.is_finished() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    assert!(handle.is_finished());
}

/// Records which thread each read ran on.
#[derive(Default)]
struct ThreadRecordingClipboard {
    readers: Mutex<Vec<std::thread::ThreadId>>,
}

impl SystemClipboardPort for ThreadRecordingClipboard {
    fn read_snapshot(&self, _include_images: bool) -> Result<Option<ClipboardSnapshot>> {
        self.readers
            .lock()
            .unwrap()
            .push(std::thread::current().id());
        Ok(Some(ClipboardSnapshot::Text("from the pool".into())))
    }

    fn write_text(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn write_image(&self, _png: &[u8]) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_async_poll_reads_on_the_blocking_pool() {
    let clipboard = Arc::new(ThreadRecordingClipboard::default());
    let (tx, _rx) = platform_event_channel();
    let mut watcher = PollingClipboardWatcher::new(clipboard.clone(), tx, config());

    let first = watcher.poll().await.unwrap();
    let second = watcher.poll().await.unwrap();

    assert_eq!(first, Some(ClipboardSnapshot::Text("from the pool".into())));
    assert_eq!(second, None, "same value is still deduplicated");
    let runtime_thread = std::thread::current().id();
    let readers = clipboard.readers.lock().unwrap();
    assert_eq!(readers.len(), 2);
    assert!(readers.iter().all(|id| *id != runtime_thread));
}
