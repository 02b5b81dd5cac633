use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use world_settings::{WorldError, WorldSettings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldEntry {
    pub name: String,
    pub check: bool,
    pub whitelist: bool,
    pub listed: usize,
    pub path: PathBuf,
}

/// The world name is the file stem, unchanged.
pub fn world_file_name(name: &str) -> String {
    format!("{name}.json")
}

pub fn world_file_path_for(settings_dir: &Path, name: &str) -> PathBuf {
    settings_dir.join(world_file_name(name))
}

/// Lists the stored world files. Unreadable or malformed files are skipped.
pub fn scan_world_entries(settings_dir: &Path) -> Vec<WorldEntry> {
    let mut entries = Vec::new();
    let Ok(dir_entries) = std::fs::read_dir(settings_dir) else {
        return entries;
    };
    for entry in dir_entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match WorldSettings::load_from_file(&path) {
            Ok(settings) => entries.push(WorldEntry {
                name: name.to_string(),
                check: settings.check,
                whitelist: settings.whitelist,
                listed: settings.disabled_plugins.len(),
                path,
            }),
            Err(err) => log::warn!("skipping world file '{}': {err}", path.display()),
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

pub fn save_world_file(settings: &WorldSettings, path: &Path) -> Result<(), WorldError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    settings.save_to_file(path)
}
