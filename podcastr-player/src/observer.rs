//! Player observers
//!
//! Observers are called synchronously by `PlayerStore`, once per operation,
//! in registration order, after the operation has been applied.

use podcastr_common::events::PlayerChange;
use podcastr_common::PlayerSnapshot;
use tracing::info;

/// Handle returned by `PlayerStore::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Receives player state changes
pub trait PlayerObserver {
    /// Called after `change` has been applied; `snapshot` is the new state
    fn on_change(&self, change: PlayerChange, snapshot: &PlayerSnapshot);
}

impl<F> PlayerObserver for F
where
    F: Fn(PlayerChange, &PlayerSnapshot),
{
    fn on_change(&self, change: PlayerChange, snapshot: &PlayerSnapshot) {
        self(change, snapshot)
    }
}

/// Observer that logs every change at info level
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl PlayerObserver for LoggingObserver {
    fn on_change(&self, change: PlayerChange, snapshot: &PlayerSnapshot) {
        info!("{}: {}", change, describe(snapshot));
    }
}

/// One-line summary of a snapshot
pub fn describe(snapshot: &PlayerSnapshot) -> String {
    let flag = |on: bool, name: &str| if on { name.to_string() } else { "-".to_string() };

    let now_playing = match snapshot.current_episode() {
        Some(episode) => format!(
            "[{}/{}] {} ({})",
            snapshot.current_episode_index + 1,
            snapshot.episode_list.len(),
            episode.title,
            episode.duration_as_time_string()
        ),
        None => "nothing queued".to_string(),
    };

    format!(
        "{} | {} {} {} | prev:{} next:{}",
        now_playing,
        if snapshot.is_playing { "playing" } else { "paused" },
        flag(snapshot.is_looping, "loop"),
        flag(snapshot.is_shuffling, "shuffle"),
        snapshot.has_prev,
        snapshot.has_next
    )
}
