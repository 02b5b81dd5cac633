use crate::plugin::DirectoryCatalog;
use crate::world::JsonFileStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use world_settings::WorldSettings;

pub const DEFAULT_CONFIG_FILE: &str = "pwp.toml";
pub const DEFAULT_SELF_NAME: &str = "HPWP";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwpConfig {
    /// Directory holding one `<world>.json` per world.
    #[serde(default = "default_settings_dir")]
    pub settings_dir: PathBuf,
    /// Directories scanned for `<plugin>/plugin.toml`.
    #[serde(default = "default_plugin_dirs")]
    pub plugin_dirs: Vec<PathBuf>,
    /// Name of the managing plugin, never offered as a toggle target.
    #[serde(default = "default_self_name")]
    pub self_name: String,
    /// `check` for worlds that have no stored settings yet.
    #[serde(default)]
    pub default_check: bool,
}

fn default_settings_dir() -> PathBuf {
    PathBuf::from("worlds")
}

fn default_plugin_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("plugins")]
}

fn default_self_name() -> String {
    DEFAULT_SELF_NAME.to_string()
}

impl Default for PwpConfig {
    fn default() -> Self {
        Self {
            settings_dir: default_settings_dir(),
            plugin_dirs: default_plugin_dirs(),
            self_name: default_self_name(),
            default_check: false,
        }
    }
}

impl PwpConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Missing file means defaults; anything else unreadable is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("config '{}' not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Resolves relative paths against `base`, normally the config file's
    /// directory.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.settings_dir.is_relative() {
            self.settings_dir = base.join(&self.settings_dir);
        }
        for dir in &mut self.plugin_dirs {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        self
    }

    pub fn world_defaults(&self) -> WorldSettings {
        WorldSettings::with_check(self.default_check)
    }

    pub fn settings_store(&self) -> JsonFileStore {
        JsonFileStore::with_defaults(self.settings_dir.clone(), self.world_defaults())
    }

    pub fn plugin_catalog(&self) -> DirectoryCatalog {
        DirectoryCatalog::new(self.plugin_dirs.clone())
    }
}
