use std::collections::BTreeSet;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};
use world_settings::WorldSettings;

#[test]
fn save_and_load_world_settings() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("pwp_world_{unique}.json"));

    let settings = WorldSettings {
        check: true,
        whitelist: true,
        disabled_plugins: ["Essentials", "WorldEdit"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    settings.save_to_file(&path).unwrap();
    let loaded = WorldSettings::load_from_file(&path).unwrap();

    assert_eq!(loaded, settings);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let loaded: WorldSettings = serde_json::from_str(r#"{"check": true}"#).unwrap();
    assert!(loaded.check);
    assert!(!loaded.whitelist);
    assert!(loaded.disabled_plugins.is_empty());
}

#[test]
fn file_layout_uses_plain_field_names() {
    let settings = WorldSettings {
        check: false,
        whitelist: false,
        disabled_plugins: BTreeSet::from(["B".to_string(), "A".to_string()]),
    };
    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "check": false,
            "whitelist": false,
            "disabled_plugins": ["A", "B"],
        })
    );
}

#[test]
fn load_reports_missing_file() {
    let dir = std::env::temp_dir().join("pwp_world_does_not_exist");
    let err = WorldSettings::load_from_file(dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, world_settings::WorldError::Io(_)));
}

#[test]
fn mode_switch_reinterprets_listed_plugins() {
    let mut settings = WorldSettings::default();
    settings.set_plugin_enabled("A", false);
    assert!(!settings.plugin_enabled("A"));
    assert!(settings.plugin_enabled("B"));

    settings.whitelist = true;
    assert_eq!(settings.disabled_plugins, BTreeSet::from(["A".to_string()]));
    assert!(settings.plugin_enabled("A"));
    assert!(!settings.plugin_enabled("B"));
}
