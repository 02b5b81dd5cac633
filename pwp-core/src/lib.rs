pub mod config;
pub mod plugin;
pub mod validation;
pub mod world;

pub use config::{ConfigError, PwpConfig};
pub use plugin::{DirectoryCatalog, PluginCatalog, PluginInfo, StaticCatalog};
pub use crate::world::{
    CheckState, JsonFileStore, ListMode, MemoryStore, MenuError, PluginEntry, SettingsStore,
    StoreError, ToggleController, WorldMenu,
};
