//! Configuration loading and artifacts folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default port for the dashboard service
pub const DEFAULT_PORT: u16 = 5740;

/// Default host binding (local dashboard, single session)
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default cosmetic delay before revealing a forecast, in milliseconds.
/// Signals "processing" to the user; has no effect on the computed value.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

/// Optional TOML configuration file contents (`flightcast.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub artifacts_folder: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub reveal_delay_ms: Option<u64>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub artifacts_folder: PathBuf,
    pub host: String,
    pub port: u16,
    pub reveal_delay_ms: u64,
}

/// Resolve service configuration following the priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (FLIGHTCAST_ARTIFACTS, FLIGHTCAST_PORT)
/// 3. TOML config file
/// 4. Compiled default (fallback)
pub fn resolve(cli_artifacts: Option<&str>, cli_port: Option<u16>) -> Result<ServiceConfig> {
    let toml_config = match find_config_file() {
        Some(path) => load_toml_config(&path)?,
        None => TomlConfig::default(),
    };

    let artifacts_folder = if let Some(path) = cli_artifacts {
        PathBuf::from(path)
    } else if let Ok(path) = std::env::var("FLIGHTCAST_ARTIFACTS") {
        PathBuf::from(path)
    } else if let Some(path) = &toml_config.artifacts_folder {
        PathBuf::from(path)
    } else {
        PathBuf::from("./artifacts")
    };

    let port = if let Some(port) = cli_port {
        port
    } else if let Ok(raw) = std::env::var("FLIGHTCAST_PORT") {
        raw.parse::<u16>()
            .map_err(|_| Error::Config(format!("FLIGHTCAST_PORT is not a valid port: {}", raw)))?
    } else {
        toml_config.port.unwrap_or(DEFAULT_PORT)
    };

    Ok(ServiceConfig {
        artifacts_folder,
        host: toml_config.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        reveal_delay_ms: toml_config.reveal_delay_ms.unwrap_or(DEFAULT_REVEAL_DELAY_MS),
    })
}

/// Parse a TOML config file. A malformed file is a startup-fatal error;
/// a missing file is not (caller falls through to defaults).
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Locate the config file: ./flightcast.toml first, then the
/// platform config directory (~/.config/flightcast/flightcast.toml on Linux)
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("flightcast.toml");
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir().map(|d| d.join("flightcast").join("flightcast.toml"))?;
    if user.exists() {
        Some(user)
    } else {
        None
    }
}
