//! Process startup: config, directories, logging and dependency wiring.

mod context;
pub mod tracing;
pub mod wiring;

pub use context::{load_app_config, resolve_app_dirs, AppContext};
