//! Podcastr Player (podcastr-player) - Main entry point
//!
//! Console front end for the player store: reads one command per line from
//! stdin and applies it, the way a UI would on each click.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use podcastr_common::config::{resolve_config_path, resolve_path_setting, CONFIG_ENV_VAR};
use podcastr_common::events::PlayerEvent;
use podcastr_common::models::load_episodes;
use podcastr_player::config::EPISODES_ENV_VAR;
use podcastr_player::observer::describe;
use podcastr_player::{apply_command, logging, LoggingObserver, PlayerCommand, PlayerConfig, PlayerStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// Command-line arguments for podcastr-player
#[derive(Parser, Debug)]
#[command(name = "podcastr-player")]
#[command(about = "Console driver for the podcastr player state")]
#[command(version)]
struct Args {
    /// Config file (overrides PODCASTR_CONFIG and the platform default)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Episode catalog, a JSON array (overrides PODCASTR_EPISODES and config)
    #[arg(short, long)]
    episodes: Option<PathBuf>,

    /// Fixed shuffle seed (overrides playback.shuffle_seed)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing before config so resolution diagnostics are logged
    let filter_handle = logging::init().context("Failed to initialize logging")?;

    let source = resolve_config_path(args.config.as_deref(), CONFIG_ENV_VAR);
    let mut config = PlayerConfig::load(&source).context("Failed to load configuration")?;
    if args.seed.is_some() {
        config.playback.shuffle_seed = args.seed;
    }
    logging::apply_config_level(&filter_handle, &config.logging.level)
        .context("Failed to apply configured log level")?;

    info!("Starting podcastr player ({:?})", source);

    let catalog = match resolve_path_setting(
        args.episodes.as_deref(),
        EPISODES_ENV_VAR,
        config.catalog.episodes_file.as_deref(),
    ) {
        Some(path) => load_episodes(&path)
            .with_context(|| format!("Failed to load episodes from {}", path.display()))?,
        None => {
            warn!("No episode catalog configured; only status and toggles will do anything");
            Vec::new()
        }
    };
    info!("Catalog has {} episodes", catalog.len());

    let mut store = PlayerStore::with_config(&config);
    store.subscribe(Box::new(LoggingObserver));

    let mut events = store.subscribe_events();
    let listener = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match &event {
                    PlayerEvent::StateChanged { change, timestamp, .. } => {
                        debug!("{} {} at {}", event.event_type(), change, timestamp);
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event listener lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        match line.parse::<PlayerCommand>() {
            Ok(PlayerCommand::Status) => println!("{}", describe(&store.snapshot())),
            Ok(command) => {
                if let Err(e) = apply_command(&mut store, &catalog, command) {
                    warn!("{}", e);
                }
            }
            Err(e) => warn!("{}", e),
        }
    }

    // Dropping the store closes the event bus and ends the listener
    drop(store);
    listener.await.context("Event listener task failed")?;

    info!("Player shutdown complete");
    Ok(())
}
