//! Tracing setup for the console driver
//!
//! The subscriber is installed before config is read, at `info`, so config
//! resolution diagnostics are visible. Once the config is loaded its
//! `logging.level` is swapped in through a reload handle, unless RUST_LOG
//! was set.

use crate::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

/// Level used until the config file has been read
pub const STARTUP_LOG_LEVEL: &str = "info";

/// Handle for replacing the active filter
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter enabling `level` for the podcastr crates
pub fn default_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!("podcastr_player={level},podcastr_common={level}"))
        .map_err(|e| config_error(format!("Invalid log level '{}': {}", level, e)))
}

/// Filter from RUST_LOG, None when unset or unparsable
fn env_filter() -> Option<EnvFilter> {
    EnvFilter::try_from_default_env().ok()
}

/// Reloadable filter layer: RUST_LOG if set, the startup level otherwise
pub fn startup_filter_layer() -> Result<(reload::Layer<EnvFilter, Registry>, FilterHandle)> {
    let filter = match env_filter() {
        Some(filter) => filter,
        None => default_filter(STARTUP_LOG_LEVEL)?,
    };
    Ok(reload::Layer::new(filter))
}

/// Install the global subscriber
pub fn init() -> Result<FilterHandle> {
    let (filter, handle) = startup_filter_layer()?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(handle)
}

/// Switch to the configured level; RUST_LOG keeps precedence
pub fn apply_config_level(handle: &FilterHandle, level: &str) -> Result<()> {
    if env_filter().is_some() {
        return Ok(());
    }

    let filter = default_filter(level)?;
    handle
        .reload(filter)
        .map_err(|e| config_error(format!("Failed to apply log level: {}", e)))
}

fn config_error(message: String) -> Error {
    Error::Common(podcastr_common::Error::Config(message))
}
