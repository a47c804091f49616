//! Process-wide plumbing: logging setup and run settings.
pub mod logging;
pub mod settings;

pub use settings::{Settings, DEFAULT_SETTINGS_PATH};
