//! Player data models
//!
//! Value types shared between the player store, its observers and the
//! event bus.

use crate::human_time::format_duration;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A playable podcast episode
///
/// Immutable once placed in a list; the store only ever replaces whole lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode title
    pub title: String,
    /// Credited participants
    pub members: String,
    /// Cover art reference
    pub thumbnail: String,
    /// Length in seconds
    pub duration: u64,
    /// Playable media reference
    pub url: String,
}

impl Episode {
    /// Duration in the `HH:MM:SS` form used by episode listings
    pub fn duration_as_time_string(&self) -> String {
        format_duration(self.duration)
    }
}

/// Point-in-time copy of the player state, derived fields included
///
/// Handed to observers and embedded in events so that readers never hold a
/// reference into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PlayerSnapshot {
    /// Episode at the current index, None when the list is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }
}

/// Load an ordered episode catalog from a JSON array file
///
/// File order is playback order.
pub fn load_episodes(path: &Path) -> Result<Vec<Episode>> {
    let content = std::fs::read_to_string(path)?;
    let episodes: Vec<Episode> = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} episodes from {}", episodes.len(), path.display());
    Ok(episodes)
}
