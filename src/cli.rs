use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Terminal to-do list.
#[derive(Debug, Parser)]
#[command(name = "ticklist", version)]
pub struct Cli {
    /// Config file (default: ~/.config/ticklist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override where items are saved
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Override the log filter (e.g. "debug")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Keep items in memory only; nothing is saved
    #[arg(long)]
    pub in_memory: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.data_file {
            config.storage.data_file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
