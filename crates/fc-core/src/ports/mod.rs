//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the history logic to remain independent of the file
//! system, the OS clipboard and whatever front end renders the list.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it represents a capability the use cases depend
//! on and that is implemented by the infrastructure or platform layer.

pub mod app_dirs;
mod clock;
pub mod errors;
mod history_repository;
pub mod settings;
mod system_clipboard;
pub mod ui_port;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use history_repository::HistoryRepositoryPort;
pub use settings::SettingsPort;
pub use system_clipboard::SystemClipboardPort;
pub use ui_port::UiPort;
