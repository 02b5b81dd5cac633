use clap::{Parser, Subcommand};
use pwp_core::config::DEFAULT_CONFIG_FILE;
use pwp_core::{CheckState, ListMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pwp", version, about = "Per-world plugin toggles")]
pub struct Cli {
    /// Configuration file; relative paths inside it resolve against its directory
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the plugins the catalog currently reports
    Plugins {
        #[arg(long, alias = "jq")]
        json_query: bool,
    },
    /// List worlds that have stored settings
    Worlds {
        #[arg(long, alias = "jq")]
        json_query: bool,
    },
    World {
        #[command(subcommand)]
        command: WorldCommands,
    },
}

#[derive(Subcommand)]
pub enum WorldCommands {
    Show {
        world: String,
        #[arg(long, alias = "jq")]
        json_query: bool,
    },
    Check {
        world: String,
        /// enabled|disabled (on|off)
        state: CheckState,
    },
    Mode {
        world: String,
        /// whitelist|blacklist
        mode: ListMode,
    },
    Enable {
        world: String,
        plugin: String,
    },
    Disable {
        world: String,
        plugin: String,
    },
    EnableAll {
        world: String,
    },
    DisableAll {
        world: String,
    },
    Toggle {
        world: String,
        plugin: String,
    },
}
