use super::store::{SettingsStore, StoreError};
use crate::plugin::PluginCatalog;
use world_settings::WorldSettings;

/// Applies toggle intents to one world's settings and writes every change
/// through to the store.
///
/// A failed save is returned to the caller and the in-memory change is kept;
/// the next successful save persists it.
pub struct ToggleController<S, C> {
    world: String,
    settings: WorldSettings,
    store: S,
    catalog: C,
}

impl<S: SettingsStore, C: PluginCatalog> ToggleController<S, C> {
    pub fn open(world: &str, store: S, catalog: C) -> Result<Self, StoreError> {
        let settings = store.load(world)?;
        Ok(Self::new(world, settings, store, catalog))
    }

    pub fn new(world: &str, settings: WorldSettings, store: S, catalog: C) -> Self {
        Self {
            world: world.to_string(),
            settings,
            store,
            catalog,
        }
    }

    pub fn world(&self) -> &str {
        &self.world
    }

    pub fn state(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    pub fn enable_check(&mut self) -> Result<(), StoreError> {
        self.set_check(true)
    }

    pub fn disable_check(&mut self) -> Result<(), StoreError> {
        self.set_check(false)
    }

    pub fn set_check(&mut self, check: bool) -> Result<(), StoreError> {
        self.settings.check = check;
        self.persist()
    }

    /// Switches between whitelist and blacklist. The listed set is untouched,
    /// so the effective state of every listed plugin flips.
    pub fn set_mode(&mut self, whitelist: bool) -> Result<(), StoreError> {
        self.settings.whitelist = whitelist;
        self.persist()
    }

    pub fn set_plugin_enabled(&mut self, name: &str, enabled: bool) -> Result<(), StoreError> {
        self.settings.set_plugin_enabled(name, enabled);
        self.persist()
    }

    /// Applies `enabled` to every plugin in a fresh catalog snapshot and saves
    /// once. Listed names of plugins no longer loaded are left alone.
    pub fn set_all_enabled(&mut self, enabled: bool) -> Result<(), StoreError> {
        let plugins = self.catalog.list();
        let mut changed = 0;
        for plugin in &plugins {
            if self.settings.set_plugin_enabled(&plugin.name, enabled) {
                changed += 1;
            }
        }
        log::debug!(
            "world '{}': set {} plugins {} ({changed} changed)",
            self.world,
            plugins.len(),
            if enabled { "enabled" } else { "disabled" }
        );
        self.persist()
    }

    pub fn is_plugin_enabled(&self, name: &str) -> bool {
        self.settings.plugin_enabled(name)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        if let Err(err) = self.store.save(&self.world, &self.settings) {
            log::warn!("world '{}' changed but was not saved: {err}", self.world);
            return Err(err);
        }
        Ok(())
    }
}
