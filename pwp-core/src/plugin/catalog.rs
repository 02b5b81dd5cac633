use super::types::{DetectedPlugin, PluginInfo, PluginManifest};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Source of the currently loaded plugins.
///
/// Every call returns a fresh snapshot; callers must not assume two calls
/// agree, since the host may load or unload plugins in between.
pub trait PluginCatalog {
    fn list(&self) -> Vec<PluginInfo>;
}

impl<T: PluginCatalog + ?Sized> PluginCatalog for &T {
    fn list(&self) -> Vec<PluginInfo> {
        (**self).list()
    }
}

impl<T: PluginCatalog + ?Sized> PluginCatalog for Box<T> {
    fn list(&self) -> Vec<PluginInfo> {
        (**self).list()
    }
}

/// Fixed in-memory plugin list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    plugins: Vec<PluginInfo>,
}

impl StaticCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plugins: names.into_iter().map(PluginInfo::named).collect(),
        }
    }

    pub fn insert(&mut self, plugin: PluginInfo) {
        if !self.plugins.iter().any(|p| p.name == plugin.name) {
            self.plugins.push(plugin);
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<PluginInfo> {
        let index = self.plugins.iter().position(|p| p.name == name)?;
        Some(self.plugins.remove(index))
    }
}

impl PluginCatalog for StaticCatalog {
    fn list(&self) -> Vec<PluginInfo> {
        self.plugins.clone()
    }
}

/// Discovers plugins by scanning directories for `<dir>/<plugin>/plugin.toml`.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    bases: Vec<PathBuf>,
}

impl DirectoryCatalog {
    const MANIFEST_FILE: &'static str = "plugin.toml";

    pub fn new(bases: Vec<PathBuf>) -> Self {
        Self { bases }
    }

    pub fn bases(&self) -> &[PathBuf] {
        &self.bases
    }

    pub fn scan_detected_plugins(&self) -> Vec<DetectedPlugin> {
        let mut detected = Vec::new();
        let mut seen = HashSet::new();
        for base in &self.bases {
            let Ok(entries) = fs::read_dir(base) else {
                log::debug!("plugin directory '{}' is not readable", base.display());
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }
                let manifest_path = path.join(Self::MANIFEST_FILE);
                if !manifest_path.is_file() {
                    continue;
                }
                let data = match fs::read_to_string(&manifest_path) {
                    Ok(content) => content,
                    Err(err) => {
                        log::warn!("failed to read '{}': {err}", manifest_path.display());
                        continue;
                    }
                };
                let manifest: PluginManifest = match toml::from_str(&data) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        log::warn!("ignoring malformed '{}': {err}", manifest_path.display());
                        continue;
                    }
                };
                if manifest.name.trim().is_empty() {
                    log::warn!("ignoring unnamed plugin at '{}'", path.display());
                    continue;
                }
                if !seen.insert(manifest.name.clone()) {
                    log::warn!(
                        "duplicate plugin '{}' at '{}' ignored",
                        manifest.name,
                        path.display()
                    );
                    continue;
                }
                detected.push(DetectedPlugin { manifest, path });
            }
        }
        detected.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        detected
    }
}

impl PluginCatalog for DirectoryCatalog {
    fn list(&self) -> Vec<PluginInfo> {
        self.scan_detected_plugins()
            .into_iter()
            .map(|detected| detected.manifest.into())
            .collect()
    }
}
