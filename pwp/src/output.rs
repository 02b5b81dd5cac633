use pwp_core::world::WorldEntry;
use pwp_core::{CheckState, ListMode, PluginEntry, PluginInfo};

pub fn print_info(message: &str) {
    println!("[PWP][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[PWP][ERROR]: {message}");
}

pub fn print_plugin_list(plugins: &[PluginInfo]) {
    if plugins.is_empty() {
        print_info("No plugins found");
    } else {
        print_info("List of plugins:");
        for plugin in plugins {
            let version = plugin.version.as_deref().unwrap_or("unknown");
            match &plugin.description {
                Some(description) => println!("{} v{} - {}", plugin.name, version, description),
                None => println!("{} v{}", plugin.name, version),
            }
        }
    }
}

pub fn print_world_list(worlds: &[WorldEntry]) {
    if worlds.is_empty() {
        print_info("No worlds configured");
    } else {
        print_info("List of worlds:");
        for world in worlds {
            let plugins = if world.listed == 1 { "plugin" } else { "plugins" };
            println!(
                "{} - check {} - {} ({} {} listed)",
                world.name,
                CheckState::from_check(world.check),
                ListMode::from_whitelist(world.whitelist),
                world.listed,
                plugins
            );
        }
    }
}

pub fn print_world_state(world: &str, check: CheckState, mode: ListMode, entries: &[PluginEntry]) {
    print_info(&format!("World '{world}'"));
    println!("check: {check}");
    println!("mode: {mode}");
    println!("plugins:");
    if entries.is_empty() {
        println!("\t(none)");
    }
    for entry in entries {
        let state = if entry.enabled { "enabled" } else { "disabled" };
        println!("\t{}: {state}", entry.name);
    }
}
