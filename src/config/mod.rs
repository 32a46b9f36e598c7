//! Settings configuration
//!
//! - **settings**: the `EmulationSettings` record
//! - **store**: layered global/profile store and effective-settings resolution
//! - **file**: read-only JSON settings file loader

pub mod file;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use file::SettingsFile;
pub use settings::EmulationSettings;
pub use store::{resolve_effective, SettingsRepository, SettingsStore};
