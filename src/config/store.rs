//! Layered settings store
//!
//! Holds the global record plus any number of named profile records and
//! resolves which one is effective for a given profile name.

use tracing::{debug, warn};

use super::settings::EmulationSettings;
use crate::constants::scope;

/// Read-only access to settings records by name
pub trait SettingsRepository: Send + Sync {
    /// The global record
    fn global(&self) -> &EmulationSettings;

    /// Record stored under `name`, or a default record carrying that name.
    /// Never creates anything in the backing store.
    fn get_or_default(&self, name: &str) -> EmulationSettings;
}

/// Pick the record that applies to `profile_name`
///
/// The profile's own record is returned only when it opts into custom
/// settings. Anything else, including unknown names, falls through to the
/// global record. The result is always one whole record.
pub fn resolve_effective<R>(repository: &R, profile_name: &str) -> EmulationSettings
where
    R: SettingsRepository + ?Sized,
{
    let settings = repository.get_or_default(profile_name);

    if settings.is_global() || !settings.use_custom_settings {
        debug!(profile = %profile_name, "Using global settings");
        return repository.global().clone();
    }

    debug!(profile = %profile_name, "Using custom profile settings");
    settings
}

/// In-memory settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    global: EmulationSettings,
    profiles: Vec<EmulationSettings>,
}

impl SettingsStore {
    /// Create a store around the given global record
    pub fn new(mut global: EmulationSettings) -> Self {
        global.name = scope::GLOBAL.to_string();
        Self {
            global,
            profiles: Vec::new(),
        }
    }

    /// Builder form of [`SettingsStore::insert_profile`]
    pub fn with_profile(mut self, profile: EmulationSettings) -> Self {
        self.insert_profile(profile);
        self
    }

    /// Add a profile record, replacing any record with the same name.
    /// A profile named `global` is rejected; there is only one global scope.
    pub fn insert_profile(&mut self, profile: EmulationSettings) {
        if profile.is_global() {
            warn!(
                "Ignoring profile named '{}', use the global section instead",
                scope::GLOBAL
            );
            return;
        }

        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => {
                warn!(profile = %profile.name, "Duplicate profile, replacing earlier entry");
                *existing = profile;
            }
            None => self.profiles.push(profile),
        }
    }

    /// Profile records in insertion order (global excluded)
    pub fn profiles(&self) -> &[EmulationSettings] {
        &self.profiles
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// Effective settings for `profile_name`
    pub fn resolve_effective(&self, profile_name: &str) -> EmulationSettings {
        resolve_effective(self, profile_name)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(EmulationSettings::global())
    }
}

impl SettingsRepository for SettingsStore {
    fn global(&self) -> &EmulationSettings {
        &self.global
    }

    fn get_or_default(&self, name: &str) -> EmulationSettings {
        if name == scope::GLOBAL {
            return self.global.clone();
        }

        self.profiles
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .unwrap_or_else(|| EmulationSettings::default_with_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_global() -> EmulationSettings {
        EmulationSettings {
            is_docked: false,
            gpu_driver: "turnip".to_string(),
            executor_slot_count_scale: 6,
            executor_flush_threshold: 256,
            force_max_gpu_clocks: false,
            ..EmulationSettings::global()
        }
    }

    fn custom_profile(name: &str) -> EmulationSettings {
        EmulationSettings {
            use_custom_settings: true,
            force_max_gpu_clocks: true,
            disable_shader_cache: true,
            ..EmulationSettings::default_with_name(name)
        }
    }

    #[test]
    fn test_unknown_profile_resolves_to_global() {
        let store = SettingsStore::new(test_global());
        assert_eq!(store.resolve_effective("slot3"), test_global());
    }

    #[test]
    fn test_default_global_example() {
        let store = SettingsStore::default();
        let effective = store.resolve_effective("slot3");

        assert_eq!(effective, EmulationSettings::global());
        assert!(effective.is_docked);
        assert_eq!(effective.gpu_driver, "default");
        assert_eq!(effective.executor_slot_count_scale, 4);
        assert_eq!(effective.executor_flush_threshold, 10);
        assert!(effective.use_direct_memory_import);
    }

    #[test]
    fn test_profile_without_custom_settings_ignored() {
        let mut inert = custom_profile("slot2");
        inert.use_custom_settings = false;
        let store = SettingsStore::new(test_global()).with_profile(inert);

        let effective = store.resolve_effective("slot2");
        assert_eq!(effective, test_global());
        // Record-level: none of slot2's values leak through
        assert!(!effective.force_max_gpu_clocks);
        assert!(!effective.disable_shader_cache);
    }

    #[test]
    fn test_custom_profile_resolves_to_itself() {
        let store = SettingsStore::new(test_global()).with_profile(custom_profile("slot1"));

        let effective = store.resolve_effective("slot1");
        assert_eq!(effective, custom_profile("slot1"));
        // No blending with global
        assert!(effective.is_docked);
        assert_eq!(effective.gpu_driver, "default");
        assert_eq!(effective.executor_slot_count_scale, 4);
    }

    #[test]
    fn test_custom_max_clocks_independent_of_global() {
        for global_max_clocks in [false, true] {
            let global = EmulationSettings {
                force_max_gpu_clocks: global_max_clocks,
                ..EmulationSettings::global()
            };
            let store = SettingsStore::new(global).with_profile(custom_profile("slot1"));
            assert!(store.resolve_effective("slot1").force_max_gpu_clocks);
        }
    }

    #[test]
    fn test_global_name_resolves_to_global() {
        let mut global = test_global();
        global.use_custom_settings = false;
        let store = SettingsStore::new(global.clone());
        assert_eq!(store.resolve_effective("global"), global);
    }

    #[test]
    fn test_profile_named_global_rejected() {
        let mut impostor = custom_profile("x");
        impostor.name = "global".to_string();
        let store = SettingsStore::new(test_global()).with_profile(impostor);

        assert!(store.profiles().is_empty());
        assert_eq!(store.resolve_effective("global"), test_global());
    }

    #[test]
    fn test_duplicate_profile_replaces_previous() {
        let mut first = custom_profile("slot1");
        first.gpu_driver = "first".to_string();
        let mut second = custom_profile("slot1");
        second.gpu_driver = "second".to_string();

        let store = SettingsStore::new(test_global())
            .with_profile(first)
            .with_profile(second);

        assert_eq!(store.profile_names().collect::<Vec<_>>(), vec!["slot1"]);
        assert_eq!(store.resolve_effective("slot1").gpu_driver, "second");
    }

    #[test]
    fn test_get_or_default_does_not_create() {
        let store = SettingsStore::new(test_global());
        let record = store.get_or_default("slot9");

        assert_eq!(record, EmulationSettings::default_with_name("slot9"));
        assert!(store.profiles().is_empty());
    }

    #[test]
    fn test_new_forces_global_name() {
        let store = SettingsStore::new(EmulationSettings::default_with_name("whatever"));
        assert_eq!(store.global().name, "global");
    }

    #[test]
    fn test_resolve_through_trait_object() {
        let store = SettingsStore::new(test_global()).with_profile(custom_profile("slot1"));
        let repository: &dyn SettingsRepository = &store;

        assert_eq!(resolve_effective(repository, "slot1"), custom_profile("slot1"));
        assert_eq!(resolve_effective(repository, "empty"), test_global());
    }

    #[test]
    fn test_concurrent_resolution() {
        let store = SettingsStore::new(test_global()).with_profile(custom_profile("slot1"));

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| store.resolve_effective("slot1")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), custom_profile("slot1"));
            }
        });
    }
}
