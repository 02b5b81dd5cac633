use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of a `plugin.toml` manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// One loaded plugin as reported by a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl PluginInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            description: None,
        }
    }
}

impl From<PluginManifest> for PluginInfo {
    fn from(manifest: PluginManifest) -> Self {
        Self {
            name: manifest.name,
            version: manifest.version,
            description: manifest.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetectedPlugin {
    pub manifest: PluginManifest,
    pub path: PathBuf,
}
