use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lessons::Pacing;

#[derive(Parser, Debug, Default)]
#[command(name = "bytewise", version, about = "Interactive course about bits, bytes and file sizes")]
pub struct Cli {
    /// Seed for the introduction question order
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the course content as JSON and exit
    #[arg(long)]
    pub json: bool,
    /// Start with the help panel open
    #[arg(long)]
    pub help_panel: bool,
    /// Save the effective settings as the new defaults
    #[arg(long)]
    pub save_config: bool,
    /// Delete the saved configuration and exit
    #[arg(long)]
    pub reset: bool,
}

fn default_advance_delay_ms() -> u64 {
    1000
}

fn default_complete_delay_ms() -> u64 {
    1500
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    #[serde(default = "default_complete_delay_ms")]
    pub complete_delay_ms: u64,
    #[serde(default)]
    pub show_help: bool,
}

impl Default for SavedConfig {
    fn default() -> Self {
        SavedConfig {
            seed: None,
            advance_delay_ms: default_advance_delay_ms(),
            complete_delay_ms: default_complete_delay_ms(),
            show_help: false,
        }
    }
}

impl SavedConfig {
    /// Apply command-line overrides on top of the saved values
    pub fn merged_with(mut self, cli: &Cli) -> Self {
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.help_panel {
            self.show_help = true;
        }
        self
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            advance_delay: Duration::from_millis(self.advance_delay_ms),
            complete_delay: Duration::from_millis(self.complete_delay_ms),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
    Ok(dir.join("bytewise").join("config.json"))
}

pub fn load_config_from(path: &Path) -> Result<Option<SavedConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    debug!("loaded configuration from {}", path.display());
    Ok(Some(config))
}

pub fn save_config_to(path: &Path, config: &SavedConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    info!("saved configuration to {}", path.display());
    Ok(())
}

/// Remove the saved configuration; returns whether a file was deleted
pub fn reset_config_at(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Saved configuration, or defaults when it is missing or unreadable
pub fn load_config() -> SavedConfig {
    config_or_default(config_path().and_then(|path| load_config_from(&path)))
}

/// Unreadable configs are reported on stderr so they show without RUST_LOG
fn config_or_default(loaded: Result<Option<SavedConfig>>) -> SavedConfig {
    match loaded {
        Ok(Some(config)) => config,
        Ok(None) => SavedConfig::default(),
        Err(e) => {
            eprintln!("⚠️  Ignoring saved configuration: {}", e);
            warn!("ignoring saved configuration: {}", e);
            SavedConfig::default()
        }
    }
}

pub fn save_config(config: &SavedConfig) -> Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn reset_config() -> Result<bool> {
    reset_config_at(&config_path()?)
}
