use super::io::{save_world_file, scan_world_entries, world_file_path_for, WorldEntry};
use crate::validation::Validator;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use world_settings::{WorldError, WorldSettings};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("settings store unavailable for world '{world}': {source}")]
    Unavailable {
        world: String,
        #[source]
        source: WorldError,
    },
    #[error("no settings stored for world '{world}'")]
    NotFound { world: String },
    #[error("invalid world name: {0}")]
    InvalidName(String),
}

impl StoreError {
    fn unavailable(world: &str, source: impl Into<WorldError>) -> Self {
        Self::Unavailable {
            world: world.to_string(),
            source: source.into(),
        }
    }
}

/// Durable per-world settings keyed by world name.
pub trait SettingsStore {
    /// Returns the stored record, or the store's default when none exists.
    fn load(&self, world: &str) -> Result<WorldSettings, StoreError>;

    fn save(&mut self, world: &str, settings: &WorldSettings) -> Result<(), StoreError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &mut T {
    fn load(&self, world: &str) -> Result<WorldSettings, StoreError> {
        (**self).load(world)
    }

    fn save(&mut self, world: &str, settings: &WorldSettings) -> Result<(), StoreError> {
        (**self).save(world, settings)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Box<T> {
    fn load(&self, world: &str) -> Result<WorldSettings, StoreError> {
        (**self).load(world)
    }

    fn save(&mut self, world: &str, settings: &WorldSettings) -> Result<(), StoreError> {
        (**self).save(world, settings)
    }
}

/// One pretty-printed `<world>.json` file per world.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    settings_dir: PathBuf,
    defaults: WorldSettings,
}

impl JsonFileStore {
    pub fn new(settings_dir: PathBuf) -> Self {
        Self::with_defaults(settings_dir, WorldSettings::default())
    }

    pub fn with_defaults(settings_dir: PathBuf, defaults: WorldSettings) -> Self {
        Self {
            settings_dir,
            defaults,
        }
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    pub fn world_file_path(&self, world: &str) -> Result<PathBuf, StoreError> {
        Validator::validate_world_name(world).map_err(StoreError::InvalidName)?;
        Ok(world_file_path_for(&self.settings_dir, world))
    }

    /// Like [`SettingsStore::load`] but without falling back to the defaults.
    pub fn load_existing(&self, world: &str) -> Result<WorldSettings, StoreError> {
        let path = self.world_file_path(world)?;
        if !path.is_file() {
            return Err(StoreError::NotFound {
                world: world.to_string(),
            });
        }
        WorldSettings::load_from_file(&path).map_err(|e| StoreError::unavailable(world, e))
    }

    pub fn list_worlds(&self) -> Vec<WorldEntry> {
        scan_world_entries(&self.settings_dir)
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self, world: &str) -> Result<WorldSettings, StoreError> {
        match self.load_existing(world) {
            Err(StoreError::NotFound { .. }) => {
                log::debug!("no settings for world '{world}', using defaults");
                Ok(self.defaults.clone())
            }
            other => other,
        }
    }

    fn save(&mut self, world: &str, settings: &WorldSettings) -> Result<(), StoreError> {
        let path = self.world_file_path(world)?;
        save_world_file(settings, &path).map_err(|e| StoreError::unavailable(world, e))?;
        log::debug!("saved world '{world}' to '{}'", path.display());
        Ok(())
    }
}

/// Volatile store keeping records in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    worlds: HashMap<String, WorldSettings>,
    defaults: WorldSettings,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: WorldSettings) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, world: &str, settings: WorldSettings) {
        self.worlds.insert(world.to_string(), settings);
    }

    pub fn get(&self, world: &str) -> Option<&WorldSettings> {
        self.worlds.get(world)
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, world: &str) -> Result<WorldSettings, StoreError> {
        Ok(self
            .worlds
            .get(world)
            .cloned()
            .unwrap_or_else(|| self.defaults.clone()))
    }

    fn save(&mut self, world: &str, settings: &WorldSettings) -> Result<(), StoreError> {
        self.worlds.insert(world.to_string(), settings.clone());
        self.saves += 1;
        Ok(())
    }
}
