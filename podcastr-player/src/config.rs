//! podcastr-player configuration
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [events]
//! capacity = 100
//!
//! [playback]
//! shuffle_seed = 42
//!
//! [catalog]
//! episodes_file = "/home/me/podcasts/episodes.json"
//! ```
//!
//! Every section and key is optional.

use crate::{Error, Result};
use podcastr_common::config::{load_toml_config, ConfigSource};
use podcastr_common::events::DEFAULT_EVENT_CAPACITY;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming the episode catalog file
pub const EPISODES_ENV_VAR: &str = "PODCASTR_EPISODES";

/// Player configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub logging: LoggingConfig,
    pub events: EventsConfig,
    pub playback: PlaybackConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// EventBus buffer size
    pub capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Fixed seed for shuffle selection; entropy-seeded when absent
    pub shuffle_seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of episodes, in playback order
    pub episodes_file: Option<PathBuf>,
}

impl PlayerConfig {
    /// Load and validate the config named by `source`
    pub fn load(source: &ConfigSource) -> Result<Self> {
        let config: PlayerConfig = load_toml_config(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // tokio's broadcast channel panics on zero capacity
        if self.events.capacity == 0 {
            return Err(Error::Common(podcastr_common::Error::Config(
                "events.capacity must be greater than 0".to_string(),
            )));
        }
        Ok(())
    }
}
