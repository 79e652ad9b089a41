//! # fc-platform
//!
//! Platform-specific implementations for FluentClip.
//!
//! This crate contains the adapters that talk to the operating system: the
//! system clipboard, per-user directory resolution and the polling watcher
//! that turns clipboard changes into platform events.

pub mod app_dirs;
pub mod clipboard;
pub mod ipc;
pub mod runtime;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::LocalClipboard;
pub use ipc::PlatformEvent;
pub use runtime::event_bus::{platform_event_channel, PlatformEventReceiver, PlatformEventSender};
pub use runtime::watcher::{PollingClipboardWatcher, WatcherConfig, WatcherHandle};
