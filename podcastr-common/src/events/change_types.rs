//! Player change type definitions
//!
//! Names the store operation that produced a notification.

use serde::{Deserialize, Serialize};

/// Which player operation produced a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PlayerChange {
    Play,
    PlayList,
    TogglePlay,
    ToggleLoop,
    ToggleShuffle,
    SetPlayingState,
    PlayNext,
    PlayPrev,
    Clear,
}

impl std::fmt::Display for PlayerChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerChange::Play => write!(f, "Play"),
            PlayerChange::PlayList => write!(f, "PlayList"),
            PlayerChange::TogglePlay => write!(f, "TogglePlay"),
            PlayerChange::ToggleLoop => write!(f, "ToggleLoop"),
            PlayerChange::ToggleShuffle => write!(f, "ToggleShuffle"),
            PlayerChange::SetPlayingState => write!(f, "SetPlayingState"),
            PlayerChange::PlayNext => write!(f, "PlayNext"),
            PlayerChange::PlayPrev => write!(f, "PlayPrev"),
            PlayerChange::Clear => write!(f, "Clear"),
        }
    }
}
