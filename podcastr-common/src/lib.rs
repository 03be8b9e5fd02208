//! # Podcastr Common Library
//!
//! Shared code for the podcastr player crates:
//! - Episode and player snapshot models
//! - Event types (PlayerEvent enum) and the EventBus
//! - Configuration file resolution and loading
//! - Duration formatting for episode listings

pub mod config;
pub mod error;
pub mod events;
pub mod human_time;
pub mod models;

pub use error::{Error, Result};
pub use models::{Episode, PlayerSnapshot};
