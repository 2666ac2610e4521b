use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Greet by name on the terminal and wait for a key press.
#[derive(Debug, Parser)]
#[command(name = "greeter", version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config named on the command line, or the default one.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}
