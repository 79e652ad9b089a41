//! # fc-infra
//!
//! Infrastructure implementations of the `fc-core` ports: the JSON history
//! file, the settings file, the TOML config loader and the system clock.

pub mod config;
pub mod fs;
pub mod history;
pub mod settings;
pub mod time;

pub use config::load_config;
pub use fs::{InstanceLock, InstanceLockError};
pub use history::JsonHistoryRepository;
pub use settings::FileSettingsRepository;
pub use time::SystemClock;
