//! Player state store
//!
//! Single source of truth for the active episode list, the current position
//! in it and the playback flags. All mutation goes through the operations
//! below; each one notifies every observer exactly once and emits one event
//! on the bus, even when it leaves the state unchanged.

use crate::config::PlayerConfig;
use crate::observer::{PlayerObserver, SubscriptionId};
use podcastr_common::events::{EventBus, PlayerChange, PlayerEvent, DEFAULT_EVENT_CAPACITY};
use podcastr_common::{Episode, PlayerSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Player state plus the operations that may change it
pub struct PlayerStore {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    observers: Vec<(SubscriptionId, Box<dyn PlayerObserver>)>,
    next_subscription: u64,
    event_bus: EventBus,
    rng: StdRng,
}

impl std::fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStore")
            .field("episodes", &self.episode_list.len())
            .field("current_episode_index", &self.current_episode_index)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PlayerStore {
    /// Empty store: no episodes, index 0, all flags off
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_EVENT_CAPACITY, StdRng::from_entropy())
    }

    /// Empty store with a deterministic shuffle sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(DEFAULT_EVENT_CAPACITY, StdRng::seed_from_u64(seed))
    }

    /// Empty store sized and seeded from config
    ///
    /// An event capacity of 0 (rejected by `PlayerConfig::validate`) is
    /// raised to 1, since the broadcast channel needs room for one event.
    pub fn with_config(config: &PlayerConfig) -> Self {
        let rng = match config.playback.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_parts(config.events.capacity.max(1), rng)
    }

    fn from_parts(event_capacity: usize, rng: StdRng) -> Self {
        Self {
            episode_list: Vec::new(),
            current_episode_index: 0,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
            observers: Vec::new(),
            next_subscription: 0,
            event_bus: EventBus::new(event_capacity),
            rng,
        }
    }

    // ========================================
    // Reads
    // ========================================

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// True when there is an earlier episode to go back to
    pub fn has_prev(&self) -> bool {
        self.current_episode_index > 0
    }

    /// True when shuffling, or when a later episode exists
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    /// Episode the playback driver should load, None when nothing is queued
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    /// Owned copy of the state, derived fields included
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.episode_list.clone(),
            current_episode_index: self.current_episode_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }

    // ========================================
    // Subscriptions
    // ========================================

    /// Register an observer; it is called after every later operation
    pub fn subscribe(&mut self, observer: Box<dyn PlayerObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Receive every later change as a `PlayerEvent`
    pub fn subscribe_events(&self) -> broadcast::Receiver<PlayerEvent> {
        self.event_bus.subscribe()
    }

    // ========================================
    // Operations
    // ========================================

    /// Play a single episode, replacing the list
    pub fn play(&mut self, episode: Episode) {
        debug!("play: {}", episode.title);
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
        self.notify(PlayerChange::Play);
    }

    /// Play `list` starting at `index`
    ///
    /// An index past the end is clamped to the last episode (0 for an empty
    /// list) so the current index always stays in bounds.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        let last = list.len().saturating_sub(1);
        let index = if index > last {
            warn!(
                "play_list: index {} out of range for {} episodes, clamping to {}",
                index,
                list.len(),
                last
            );
            last
        } else {
            index
        };

        debug!("play_list: {} episodes from index {}", list.len(), index);
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
        self.notify(PlayerChange::PlayList);
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        debug!("toggle_play: is_playing={}", self.is_playing);
        self.notify(PlayerChange::TogglePlay);
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!("toggle_loop: is_looping={}", self.is_looping);
        self.notify(PlayerChange::ToggleLoop);
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!("toggle_shuffle: is_shuffling={}", self.is_shuffling);
        self.notify(PlayerChange::ToggleShuffle);
    }

    /// Set the playing flag unconditionally
    ///
    /// Called by the playback driver, e.g. with `false` when audio ends.
    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
        debug!("set_playing_state: is_playing={}", state);
        self.notify(PlayerChange::SetPlayingState);
    }

    /// Advance to the next episode
    ///
    /// While shuffling, picks a uniformly random position, which may be the
    /// current one. Otherwise moves forward one position if there is one.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                debug!("play_next: shuffle with empty list, nothing to pick");
            } else {
                self.current_episode_index = self.rng.gen_range(0..self.episode_list.len());
                debug!("play_next: shuffled to index {}", self.current_episode_index);
            }
        } else if self.has_next() {
            self.current_episode_index += 1;
            debug!("play_next: index {}", self.current_episode_index);
        } else {
            debug!("play_next: already at last episode");
        }
        self.notify(PlayerChange::PlayNext);
    }

    /// Go back one episode if there is one
    pub fn play_prev(&mut self) {
        if self.has_prev() {
            self.current_episode_index -= 1;
            debug!("play_prev: index {}", self.current_episode_index);
        } else {
            debug!("play_prev: already at first episode");
        }
        self.notify(PlayerChange::PlayPrev);
    }

    /// Empty the list and reset the index
    ///
    /// The playing, looping and shuffling flags keep their values.
    pub fn clear_player_state(&mut self) {
        debug!("clear_player_state");
        self.episode_list.clear();
        self.current_episode_index = 0;
        self.notify(PlayerChange::Clear);
    }

    fn notify(&self, change: PlayerChange) {
        let snapshot = self.snapshot();
        for (_, observer) in &self.observers {
            observer.on_change(change, &snapshot);
        }
        self.event_bus
            .emit_lossy(PlayerEvent::state_changed(change, snapshot));
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}
