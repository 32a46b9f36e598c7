//! Emulation settings record
//!
//! One named configuration scope: either the global defaults or a
//! per-profile set of custom settings.

use serde::Deserialize;

use crate::constants::{defaults, scope};

/// A complete set of emulation settings for one scope
///
/// Records are always whole. Resolution picks one of them, it never
/// merges fields from two records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmulationSettings {
    /// Scope name, `global` for the default scope
    #[serde(default)]
    pub name: String,

    /// Whether this profile's values override global.
    /// Ignored on the global record.
    #[serde(default)]
    pub use_custom_settings: bool,

    // System
    #[serde(default = "default_is_docked")]
    pub is_docked: bool,

    // GPU
    #[serde(default = "default_gpu_driver")]
    pub gpu_driver: String,
    #[serde(default)]
    pub force_triple_buffering: bool,
    #[serde(default = "default_executor_slot_count_scale")]
    pub executor_slot_count_scale: u32,
    #[serde(default = "default_executor_flush_threshold")]
    pub executor_flush_threshold: u32,
    #[serde(default = "default_use_direct_memory_import")]
    pub use_direct_memory_import: bool,
    #[serde(default)]
    pub free_guest_texture_memory: bool,
    #[serde(default)]
    pub disable_shader_cache: bool,
    #[serde(default)]
    pub force_max_gpu_clocks: bool,

    // Hacks
    #[serde(default)]
    pub enable_fast_gpu_readback_hack: bool,
    #[serde(default)]
    pub enable_fast_readback_writes: bool,
    #[serde(default)]
    pub disable_subgroup_shuffle: bool,
}

fn default_is_docked() -> bool {
    defaults::IS_DOCKED
}

fn default_gpu_driver() -> String {
    defaults::GPU_DRIVER.to_string()
}

fn default_executor_slot_count_scale() -> u32 {
    defaults::EXECUTOR_SLOT_COUNT_SCALE
}

fn default_executor_flush_threshold() -> u32 {
    defaults::EXECUTOR_FLUSH_THRESHOLD
}

fn default_use_direct_memory_import() -> bool {
    defaults::USE_DIRECT_MEMORY_IMPORT
}

impl EmulationSettings {
    /// Create a record with default values and the given name
    pub fn default_with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Default global scope
    pub fn global() -> Self {
        Self::default_with_name(scope::GLOBAL)
    }

    pub fn is_global(&self) -> bool {
        self.name == scope::GLOBAL
    }
}

impl Default for EmulationSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            use_custom_settings: false,
            is_docked: default_is_docked(),
            gpu_driver: default_gpu_driver(),
            force_triple_buffering: false,
            executor_slot_count_scale: default_executor_slot_count_scale(),
            executor_flush_threshold: default_executor_flush_threshold(),
            use_direct_memory_import: default_use_direct_memory_import(),
            free_guest_texture_memory: false,
            disable_shader_cache: false,
            force_max_gpu_clocks: false,
            enable_fast_gpu_readback_hack: false,
            enable_fast_readback_writes: false,
            disable_subgroup_shuffle: false,
        }
    }
}
