//! Presentation-side model of a world's plugin menu.
//!
//! Holds the displayed plugin snapshot and maps clicks onto the controller.
//! Rendering is left to whichever front end owns the menu.

use super::controller::ToggleController;
use super::store::{SettingsStore, StoreError};
use crate::plugin::{display_plugins, PluginCatalog, PluginInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("plugin '{0}' is not listed in this menu")]
    UnknownPlugin(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Enabled,
    Disabled,
}

impl CheckState {
    pub const fn from_check(check: bool) -> Self {
        if check {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CheckState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" | "on" | "true" => Ok(Self::Enabled),
            "disabled" | "off" | "false" => Ok(Self::Disabled),
            other => Err(format!(
                "unknown check state '{other}', expected 'enabled' or 'disabled'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    Blacklist,
    Whitelist,
}

impl ListMode {
    pub const fn from_whitelist(whitelist: bool) -> Self {
        if whitelist {
            Self::Whitelist
        } else {
            Self::Blacklist
        }
    }

    pub const fn is_whitelist(self) -> bool {
        matches!(self, Self::Whitelist)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blacklist => "blacklist",
            Self::Whitelist => "whitelist",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blacklist" => Ok(Self::Blacklist),
            "whitelist" => Ok(Self::Whitelist),
            other => Err(format!(
                "unknown list mode '{other}', expected 'blacklist' or 'whitelist'"
            )),
        }
    }
}

pub struct WorldMenu<S, C> {
    controller: ToggleController<S, C>,
    self_name: String,
    plugins: Vec<PluginInfo>,
}

impl<S: SettingsStore, C: PluginCatalog> WorldMenu<S, C> {
    pub fn open(world: &str, store: S, catalog: C, self_name: &str) -> Result<Self, MenuError> {
        let controller = ToggleController::open(world, store, catalog)?;
        Ok(Self::from_controller(controller, self_name))
    }

    pub fn from_controller(controller: ToggleController<S, C>, self_name: &str) -> Self {
        let plugins = display_plugins(controller.catalog(), self_name);
        Self {
            controller,
            self_name: self_name.to_string(),
            plugins,
        }
    }

    pub fn controller(&self) -> &ToggleController<S, C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToggleController<S, C> {
        &mut self.controller
    }

    pub fn world(&self) -> &str {
        self.controller.world()
    }

    pub fn plugins(&self) -> &[PluginInfo] {
        &self.plugins
    }

    /// Displayed plugins with their effective state in this world.
    pub fn entries(&self) -> Vec<PluginEntry> {
        self.plugins
            .iter()
            .map(|plugin| PluginEntry {
                name: plugin.name.clone(),
                enabled: self.controller.is_plugin_enabled(&plugin.name),
            })
            .collect()
    }

    /// Picks up plugins loaded or unloaded since the last snapshot.
    pub fn refresh(&mut self) -> Vec<PluginEntry> {
        self.plugins = display_plugins(self.controller.catalog(), &self.self_name);
        self.entries()
    }

    pub fn check_state(&self) -> CheckState {
        CheckState::from_check(self.controller.state().check)
    }

    pub fn list_mode(&self) -> ListMode {
        ListMode::from_whitelist(self.controller.state().whitelist)
    }

    pub fn set_check_state(&mut self, state: CheckState) -> Result<(), MenuError> {
        self.controller.set_check(state.is_enabled())?;
        Ok(())
    }

    pub fn set_list_mode(&mut self, mode: ListMode) -> Result<(), MenuError> {
        self.controller.set_mode(mode.is_whitelist())?;
        Ok(())
    }

    pub fn toggle_check(&mut self) -> Result<CheckState, MenuError> {
        let next = CheckState::from_check(!self.controller.state().check);
        self.set_check_state(next)?;
        Ok(next)
    }

    pub fn toggle_mode(&mut self) -> Result<ListMode, MenuError> {
        let next = ListMode::from_whitelist(!self.controller.state().whitelist);
        self.set_list_mode(next)?;
        Ok(next)
    }

    pub fn set_plugin_enabled(&mut self, name: &str, enabled: bool) -> Result<(), MenuError> {
        self.ensure_listed(name)?;
        self.controller.set_plugin_enabled(name, enabled)?;
        Ok(())
    }

    /// Flips one plugin and returns its new effective state.
    pub fn toggle_plugin(&mut self, name: &str) -> Result<bool, MenuError> {
        let next = !self.controller.is_plugin_enabled(name);
        self.set_plugin_enabled(name, next)?;
        Ok(next)
    }

    pub fn enable_all(&mut self) -> Result<Vec<PluginEntry>, MenuError> {
        self.set_all_enabled(true)
    }

    pub fn disable_all(&mut self) -> Result<Vec<PluginEntry>, MenuError> {
        self.set_all_enabled(false)
    }

    fn set_all_enabled(&mut self, enabled: bool) -> Result<Vec<PluginEntry>, MenuError> {
        self.controller.set_all_enabled(enabled)?;
        Ok(self.refresh())
    }

    fn ensure_listed(&self, name: &str) -> Result<(), MenuError> {
        if self.plugins.iter().any(|plugin| plugin.name == name) {
            Ok(())
        } else {
            Err(MenuError::UnknownPlugin(name.to_string()))
        }
    }
}
