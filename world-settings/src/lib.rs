use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Per-world plugin restrictions as stored on disk.
///
/// `disabled_plugins` is always the literal listed set. In blacklist mode the
/// listed plugins are off; in whitelist mode they are the only ones on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSettings {
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub whitelist: bool,
    #[serde(default)]
    pub disabled_plugins: BTreeSet<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum WorldError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorldSettings {
    pub fn with_check(check: bool) -> Self {
        Self {
            check,
            ..Self::default()
        }
    }

    pub fn is_listed(&self, name: &str) -> bool {
        self.disabled_plugins.contains(name)
    }

    pub fn plugin_enabled(&self, name: &str) -> bool {
        if self.whitelist {
            self.is_listed(name)
        } else {
            !self.is_listed(name)
        }
    }

    /// Applies the membership rule for the current mode. Returns whether the
    /// listed set changed.
    pub fn set_plugin_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if enabled == self.whitelist {
            self.disabled_plugins.insert(name.to_string())
        } else {
            self.disabled_plugins.remove(name)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WorldError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WorldError> {
        let data = fs::read(path)?;
        let settings = serde_json::from_slice(&data)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_disable_lists_the_plugin() {
        let mut settings = WorldSettings::default();
        assert!(settings.set_plugin_enabled("Foo", false));
        assert!(settings.is_listed("Foo"));
        assert!(!settings.plugin_enabled("Foo"));
    }

    #[test]
    fn whitelist_enable_lists_the_plugin() {
        let mut settings = WorldSettings {
            whitelist: true,
            ..WorldSettings::default()
        };
        assert!(settings.set_plugin_enabled("Foo", true));
        assert!(settings.is_listed("Foo"));
        assert!(settings.plugin_enabled("Foo"));
    }

    #[test]
    fn repeated_toggle_reports_no_change() {
        let mut settings = WorldSettings::default();
        settings.set_plugin_enabled("Foo", false);
        assert!(!settings.set_plugin_enabled("Foo", false));
        assert!(!settings.set_plugin_enabled("Bar", true));
    }
}
