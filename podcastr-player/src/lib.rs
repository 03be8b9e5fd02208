//! # Podcastr Player Library (podcastr-player)
//!
//! Shared player state for a podcast application.
//!
//! **Purpose:** Track the active episode list, the current position in it and
//! the playing/looping/shuffling flags, and notify every subscriber after each
//! change so presentation code can re-render from a fresh snapshot.
//!
//! **Architecture:** `PlayerStore` owns all state and is passed explicitly
//! (`&mut PlayerStore`) to whatever drives it. Synchronous observers see each
//! change in registration order; the EventBus carries the same changes to
//! asynchronous listeners.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod state;

pub use commands::{apply_command, PlayerCommand};
pub use config::PlayerConfig;
pub use error::{Error, Result};
pub use observer::{LoggingObserver, PlayerObserver, SubscriptionId};
pub use state::PlayerStore;
