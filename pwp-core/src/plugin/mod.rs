pub mod catalog;
pub mod types;

pub use catalog::{DirectoryCatalog, PluginCatalog, StaticCatalog};
pub use types::{DetectedPlugin, PluginInfo, PluginManifest};

/// Plugin names in display order with `self_name` left out.
pub fn display_plugins(catalog: &impl PluginCatalog, self_name: &str) -> Vec<PluginInfo> {
    let mut plugins: Vec<PluginInfo> = catalog
        .list()
        .into_iter()
        .filter(|plugin| plugin.name != self_name)
        .collect();
    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    plugins
}
