use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tvmaze_core::ClientConfig;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered list for terminals
    #[default]
    Text,
    /// Display records as JSON
    Json,
    /// Widget markup
    Html,
}

/// Configuration loaded from `~/.config/tvmaze/config.toml`.
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP client settings (`[client]` table).
    pub client: ClientConfig,
    /// Default output format when `--format` is not given.
    pub output: OutputFormat,
}

/// XDG location of the config file, whether or not it exists.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tvmaze")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the XDG location is used if a
/// file is there and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = config_path()?;
            if !path.exists() {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let cfg = load_from(&path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(cfg)
}
