//! Terminal configuration
//!
//! Loaded from TOML or JSON (chosen by file extension). Every field has a
//! default, so a partial file or no file at all is fine; command-line flags
//! are applied on top by the binary.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::scroll_buffer::DEFAULT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Name shown in the prompt and checked by `whoami`.
    pub user: String,
    /// Seed file replacing the embedded one.
    pub seed_path: Option<PathBuf>,
    pub history: HistoryConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Opt-in cap: oldest entries are dropped beyond this many. Unset keeps
    /// every line for the life of the process.
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: bool,
    pub banner: bool,
    pub scrollback: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `crtsh_core=debug`.
    pub level: String,
    pub json: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            seed_path: None,
            history: HistoryConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
            scrollback: DEFAULT_CAPACITY,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl TerminalConfig {
    /// Load configuration from a `.toml` or `.json` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content).context("Failed to parse TOML config file"),
            Some("json") => {
                serde_json::from_str(&content).context("Failed to parse JSON config file")
            }
            _ => bail!(
                "Unsupported config format for {} (expected .toml or .json)",
                path.display()
            ),
        }
    }

    /// `<config_dir>/crtsh/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crtsh").join("config.toml"))
    }

    /// Load configuration from default location
    pub fn load_default() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load `path` when given, otherwise the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }
}
