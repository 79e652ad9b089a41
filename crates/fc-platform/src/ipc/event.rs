// A PlatformEvent states a fact about the OS side. It never says what the
// application should do about it.

use fc_core::clipboard::ClipboardSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The system clipboard holds a value different from the previous poll.
    ClipboardCaptured(ClipboardSnapshot),

    /// The watcher task exited.
    WatcherStopped,
}
