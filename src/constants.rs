//! Application-wide constants
//!
//! String literals and default values shared by the settings store,
//! the snapshot formatter and the CLI.

/// Settings file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "emu-settings-snapshot";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}

/// Settings scope names
pub mod scope {
    /// Reserved name of the default scope
    pub const GLOBAL: &str = "global";
}

/// Default values for a freshly created settings record
pub mod defaults {
    pub const IS_DOCKED: bool = true;

    /// Driver identifier meaning "whatever the system ships"
    pub const GPU_DRIVER: &str = "default";

    pub const EXECUTOR_SLOT_COUNT_SCALE: u32 = 4;

    pub const EXECUTOR_FLUSH_THRESHOLD: u32 = 10;

    pub const USE_DIRECT_MEMORY_IMPORT: bool = true;
}

/// Snapshot section headers, in output order
pub mod snapshot {
    pub const SYSTEM: &str = "SYSTEM";
    pub const GPU: &str = "GPU";
    pub const HACKS: &str = "HACKS";

    /// Prefix of every field line
    pub const LINE_PREFIX: &str = "- ";
}

/// Logging
pub mod logging {
    /// Environment variable selecting the max log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    pub const DEFAULT_LEVEL: &str = "info";
}
