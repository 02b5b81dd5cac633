use crate::commands::*;
use crate::output::*;
use pwp_core::plugin::display_plugins;
use pwp_core::{DirectoryCatalog, JsonFileStore, MenuError, PwpConfig, WorldMenu};
use std::error::Error;
use std::path::Path;

type Menu = WorldMenu<JsonFileStore, DirectoryCatalog>;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli.config)?;
    match cli.command {
        Commands::Plugins { json_query } => {
            let plugins = display_plugins(&config.plugin_catalog(), &config.self_name);
            if json_query {
                println!("{}", serde_json::to_string_pretty(&plugins)?);
            } else {
                print_plugin_list(&plugins);
            }
        }
        Commands::Worlds { json_query } => {
            let worlds = config.settings_store().list_worlds();
            if json_query {
                println!("{}", serde_json::to_string_pretty(&worlds)?);
            } else {
                print_world_list(&worlds);
            }
        }
        Commands::World { command } => handle_world_command(&config, command)?,
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<PwpConfig, Box<dyn Error>> {
    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let config = PwpConfig::load_or_default(path)?.resolve_paths(&base);
    log::debug!(
        "settings in '{}', plugins from {:?}",
        config.settings_dir.display(),
        config.plugin_dirs
    );
    Ok(config)
}

fn open_menu(config: &PwpConfig, world: &str) -> Result<Menu, MenuError> {
    WorldMenu::open(
        world,
        config.settings_store(),
        config.plugin_catalog(),
        &config.self_name,
    )
}

fn handle_world_command(config: &PwpConfig, command: WorldCommands) -> Result<(), Box<dyn Error>> {
    match command {
        WorldCommands::Show { world, json_query } => {
            let menu = open_menu(config, &world)?;
            if json_query {
                let value = serde_json::json!({
                    "world": world,
                    "check": menu.check_state(),
                    "mode": menu.list_mode(),
                    "plugins": menu.entries(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_world_state(&world, menu.check_state(), menu.list_mode(), &menu.entries());
            }
        }
        WorldCommands::Check { world, state } => {
            let mut menu = open_menu(config, &world)?;
            menu.set_check_state(state)
                .map_err(|err| not_saved(&world, err))?;
            print_info(&format!("Check {state} in world '{world}'"));
        }
        WorldCommands::Mode { world, mode } => {
            let mut menu = open_menu(config, &world)?;
            menu.set_list_mode(mode)
                .map_err(|err| not_saved(&world, err))?;
            print_info(&format!("World '{world}' now uses a {mode}"));
        }
        WorldCommands::Enable { world, plugin } => {
            set_plugin(config, &world, &plugin, true)?;
        }
        WorldCommands::Disable { world, plugin } => {
            set_plugin(config, &world, &plugin, false)?;
        }
        WorldCommands::EnableAll { world } => {
            let mut menu = open_menu(config, &world)?;
            let entries = menu.enable_all().map_err(|err| not_saved(&world, err))?;
            print_info(&format!(
                "Enabled {} plugins in world '{world}'",
                entries.len()
            ));
        }
        WorldCommands::DisableAll { world } => {
            let mut menu = open_menu(config, &world)?;
            let entries = menu.disable_all().map_err(|err| not_saved(&world, err))?;
            print_info(&format!(
                "Disabled {} plugins in world '{world}'",
                entries.len()
            ));
        }
        WorldCommands::Toggle { world, plugin } => {
            let mut menu = open_menu(config, &world)?;
            let enabled = menu
                .toggle_plugin(&plugin)
                .map_err(|err| not_saved(&world, err))?;
            print_plugin_state(&world, &plugin, enabled);
        }
    }
    Ok(())
}

fn set_plugin(
    config: &PwpConfig,
    world: &str,
    plugin: &str,
    enabled: bool,
) -> Result<(), Box<dyn Error>> {
    let mut menu = open_menu(config, world)?;
    menu.set_plugin_enabled(plugin, enabled)
        .map_err(|err| not_saved(world, err))?;
    print_plugin_state(world, plugin, enabled);
    Ok(())
}

fn print_plugin_state(world: &str, plugin: &str, enabled: bool) {
    let state = if enabled { "enabled" } else { "disabled" };
    print_info(&format!("{plugin} {state} in world '{world}'"));
}

fn not_saved(world: &str, err: MenuError) -> Box<dyn Error> {
    match err {
        MenuError::Store(err) => format!("changes to world '{world}' were not saved: {err}").into(),
        other => other.into(),
    }
}
