use tokio::sync::mpsc;

use crate::ipc::PlatformEvent;

/// Buffer size for the watcher-to-runtime channel.
pub const PLATFORM_EVENT_BUFFER: usize = 64;

pub type PlatformEventSender = mpsc::Sender<PlatformEvent>;
pub type PlatformEventReceiver = mpsc::Receiver<PlatformEvent>;

pub fn platform_event_channel() -> (PlatformEventSender, PlatformEventReceiver) {
    mpsc::channel(PLATFORM_EVENT_BUFFER)
}
