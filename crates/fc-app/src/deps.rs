//! # Application Dependencies
//!
//! Groups the ports the application is built from. This is not a builder:
//! no defaults, no optional fields and no construction logic.

use std::sync::Arc;

use fc_core::ports::{
    ClockPort, HistoryRepositoryPort, SettingsPort, SystemClipboardPort, UiPort,
};

pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub history_repo: Arc<dyn HistoryRepositoryPort>,

    // Settings
    pub settings: Arc<dyn SettingsPort>,

    // UI
    pub ui_port: Arc<dyn UiPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
