pub mod controller;
pub mod io;
pub mod menu;
pub mod store;

pub use controller::ToggleController;
pub use io::{world_file_path_for, WorldEntry};
pub use menu::{CheckState, ListMode, MenuError, PluginEntry, WorldMenu};
pub use store::{JsonFileStore, MemoryStore, SettingsStore, StoreError};
