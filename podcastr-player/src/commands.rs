//! Textual player commands
//!
//! Maps the words a user types (or a UI button would send) onto store
//! operations. Catalog positions are zero-based.

use crate::state::PlayerStore;
use crate::{Error, Result};
use podcastr_common::Episode;
use std::str::FromStr;
use tracing::debug;

/// A single user gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Play one catalog episode on its own
    Play(usize),
    /// Play the whole catalog starting at a position
    PlayList(usize),
    Toggle,
    Pause,
    Resume,
    Loop,
    Shuffle,
    Next,
    Prev,
    Clear,
    /// Read-only; handled by the caller
    Status,
}

impl FromStr for PlayerCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| Error::InvalidCommand("empty command".to_string()))?
            .to_ascii_lowercase();

        let command = match verb.as_str() {
            "play" => PlayerCommand::Play(parse_position(&verb, words.next())?),
            "playlist" => PlayerCommand::PlayList(parse_position(&verb, words.next())?),
            "toggle" => PlayerCommand::Toggle,
            "pause" => PlayerCommand::Pause,
            "resume" => PlayerCommand::Resume,
            "loop" => PlayerCommand::Loop,
            "shuffle" => PlayerCommand::Shuffle,
            "next" => PlayerCommand::Next,
            "prev" => PlayerCommand::Prev,
            "clear" => PlayerCommand::Clear,
            "status" => PlayerCommand::Status,
            other => return Err(Error::InvalidCommand(format!("unknown command '{}'", other))),
        };

        if let Some(extra) = words.next() {
            return Err(Error::InvalidCommand(format!(
                "unexpected argument '{}' after '{}'",
                extra, verb
            )));
        }

        Ok(command)
    }
}

fn parse_position(verb: &str, arg: Option<&str>) -> Result<usize> {
    let arg = arg.ok_or_else(|| Error::InvalidCommand(format!("'{}' needs a position", verb)))?;
    arg.parse::<usize>()
        .map_err(|_| Error::InvalidCommand(format!("'{}' is not a valid position", arg)))
}

/// Apply `command` to `store`, taking episodes from `catalog`
pub fn apply_command(store: &mut PlayerStore, catalog: &[Episode], command: PlayerCommand) -> Result<()> {
    debug!("Applying {:?}", command);

    match command {
        PlayerCommand::Play(position) => {
            let episode = catalog_entry(catalog, position)?;
            store.play(episode.clone());
        }
        PlayerCommand::PlayList(position) => {
            catalog_entry(catalog, position)?;
            store.play_list(catalog.to_vec(), position);
        }
        PlayerCommand::Toggle => store.toggle_play(),
        PlayerCommand::Pause => store.set_playing_state(false),
        PlayerCommand::Resume => store.set_playing_state(true),
        PlayerCommand::Loop => store.toggle_loop(),
        PlayerCommand::Shuffle => store.toggle_shuffle(),
        PlayerCommand::Next => store.play_next(),
        PlayerCommand::Prev => store.play_prev(),
        PlayerCommand::Clear => store.clear_player_state(),
        PlayerCommand::Status => {}
    }

    Ok(())
}

fn catalog_entry(catalog: &[Episode], position: usize) -> Result<&Episode> {
    catalog.get(position).ok_or_else(|| {
        Error::NotFound(format!(
            "episode {} (catalog has {} episodes)",
            position,
            catalog.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("next".parse::<PlayerCommand>().unwrap(), PlayerCommand::Next);
        assert_eq!("  PREV ".parse::<PlayerCommand>().unwrap(), PlayerCommand::Prev);
        assert_eq!("shuffle".parse::<PlayerCommand>().unwrap(), PlayerCommand::Shuffle);
        assert_eq!("status".parse::<PlayerCommand>().unwrap(), PlayerCommand::Status);
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!("play 3".parse::<PlayerCommand>().unwrap(), PlayerCommand::Play(3));
        assert_eq!(
            "playlist 0".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::PlayList(0)
        );
    }

    #[test]
    fn test_parse_errors() {
        for input in ["", "   ", "rewind", "play", "play -1", "play x", "next 2"] {
            let result = input.parse::<PlayerCommand>();
            assert!(
                matches!(result, Err(Error::InvalidCommand(_))),
                "expected InvalidCommand for {:?}",
                input
            );
        }
    }
}
