use pwp_core::config::DEFAULT_SELF_NAME;
use pwp_core::plugin::display_plugins;
use pwp_core::{DirectoryCatalog, PluginCatalog, PluginInfo, StaticCatalog};
use std::path::Path;

fn write_plugin_manifest(base: &Path, folder: &str, name: &str) {
    let dir = base.join(folder);
    std::fs::create_dir_all(&dir).expect("create plugin dir");
    let manifest = format!("name = \"{name}\"\nversion = \"1.0.0\"\n");
    std::fs::write(dir.join("plugin.toml"), manifest).expect("write plugin.toml");
}

fn names(plugins: &[PluginInfo]) -> Vec<&str> {
    plugins.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn directory_catalog_reads_manifests_sorted() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_plugin_manifest(temp.path(), "we", "WorldEdit");
    write_plugin_manifest(temp.path(), "ess", "Essentials");

    let catalog = DirectoryCatalog::new(vec![temp.path().to_path_buf()]);
    let plugins = catalog.list();

    assert_eq!(names(&plugins), vec!["Essentials", "WorldEdit"]);
    assert_eq!(plugins[0].version.as_deref(), Some("1.0.0"));
}

#[test]
fn directory_catalog_skips_broken_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_plugin_manifest(temp.path(), "good", "Good");
    write_plugin_manifest(temp.path(), "template", "Template");

    let broken = temp.path().join("broken");
    std::fs::create_dir_all(&broken).expect("create dir");
    std::fs::write(broken.join("plugin.toml"), "name = ").expect("write");

    std::fs::create_dir_all(temp.path().join("no_manifest")).expect("create dir");
    std::fs::write(temp.path().join("loose.toml"), "name = \"Loose\"").expect("write");

    let catalog = DirectoryCatalog::new(vec![temp.path().to_path_buf()]);
    assert_eq!(names(&catalog.list()), vec!["Good", "Template"]);
}

#[test]
fn directory_catalog_deduplicates_across_bases() {
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");
    write_plugin_manifest(first.path(), "a", "Shared");
    write_plugin_manifest(second.path(), "b", "Shared");
    write_plugin_manifest(second.path(), "c", "Other");

    let catalog = DirectoryCatalog::new(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
        first.path().join("missing"),
    ]);
    let detected = catalog.scan_detected_plugins();
    assert_eq!(detected.len(), 2);
    let shared = detected
        .iter()
        .find(|p| p.manifest.name == "Shared")
        .expect("shared plugin");
    assert!(shared.path.starts_with(first.path()));
}

#[test]
fn directory_catalog_rescans_on_every_list() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_plugin_manifest(temp.path(), "a", "A");
    let catalog = DirectoryCatalog::new(vec![temp.path().to_path_buf()]);
    assert_eq!(catalog.list().len(), 1);

    write_plugin_manifest(temp.path(), "b", "B");
    assert_eq!(names(&catalog.list()), vec!["A", "B"]);

    std::fs::remove_dir_all(temp.path().join("a")).expect("remove plugin");
    assert_eq!(names(&catalog.list()), vec!["B"]);
}

#[test]
fn static_catalog_insert_and_remove() {
    let mut catalog = StaticCatalog::new(["A"]);
    catalog.insert(PluginInfo::named("B"));
    catalog.insert(PluginInfo::named("A"));
    assert_eq!(names(&catalog.list()), vec!["A", "B"]);

    assert!(catalog.remove("A").is_some());
    assert!(catalog.remove("A").is_none());
    assert_eq!(names(&catalog.list()), vec!["B"]);
}

#[test]
fn display_plugins_sorts_and_hides_self() {
    let catalog = StaticCatalog::new(["Zeta", "HPWP", "alpha", "Beta"]);
    let plugins = display_plugins(&catalog, DEFAULT_SELF_NAME);
    assert_eq!(names(&plugins), vec!["Beta", "Zeta", "alpha"]);
}
