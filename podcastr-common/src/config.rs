//! Configuration file resolution and loading
//!
//! Config path priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. Platform config directory (`<config_dir>/podcastr/config.toml`)
//! 4. Compiled defaults (fallback)

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "PODCASTR_CONFIG";

/// Where the config file path came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line; must exist
    CommandLine(PathBuf),
    /// Given through the environment; must exist
    Environment(PathBuf),
    /// Platform default location; may be absent
    PlatformDefault(PathBuf),
    /// No location available on this platform
    CompiledDefaults,
}

impl ConfigSource {
    /// Path to read, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::CommandLine(path)
            | ConfigSource::Environment(path)
            | ConfigSource::PlatformDefault(path) => Some(path),
            ConfigSource::CompiledDefaults => None,
        }
    }

    /// Whether a missing file at this location is an error
    fn is_explicit(&self) -> bool {
        matches!(
            self,
            ConfigSource::CommandLine(_) | ConfigSource::Environment(_)
        )
    }
}

/// Resolve which config file to load
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> ConfigSource {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return ConfigSource::CommandLine(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Some(path) = std::env::var_os(env_var_name).filter(|v| !v.is_empty()) {
        return ConfigSource::Environment(PathBuf::from(path));
    }

    // Priority 3: Platform config directory
    match default_config_file() {
        Some(path) => ConfigSource::PlatformDefault(path),
        None => ConfigSource::CompiledDefaults,
    }
}

/// Get default configuration file path for the platform
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("podcastr").join("config.toml"))
}

/// Load a TOML config from the resolved source
///
/// Falls back to `T::default()` when the platform default file does not
/// exist. Explicitly named files must exist and parse.
pub fn load_toml_config<T>(source: &ConfigSource) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = source.path() else {
        info!("No config location on this platform, using defaults");
        return Ok(T::default());
    };

    if !path.exists() {
        if source.is_explicit() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        warn!("No config file at {}, using defaults", path.display());
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<T>(&content)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Resolve a path setting: command line, then environment, then config file
pub fn resolve_path_setting(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config_value: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(env_var_name).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    config_value.map(Path::to_path_buf)
}
