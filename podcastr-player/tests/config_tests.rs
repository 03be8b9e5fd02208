//! Player config resolution tests
//!
//! Tests that manipulate PODCASTR_EPISODES are marked with #[serial].

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use podcastr_common::config::resolve_path_setting;
use podcastr_common::models::load_episodes;
use podcastr_player::config::EPISODES_ENV_VAR;
use serial_test::serial;

#[test]
#[serial]
fn test_episodes_env_var_overrides_config_file() {
    let mut catalog = tempfile::NamedTempFile::new().unwrap();
    write!(
        catalog,
        r#"[{{"title": "from-env", "members": "Host", "thumbnail": "t.png", "duration": 42, "url": "e.mp3"}}]"#
    )
    .unwrap();

    env::set_var(EPISODES_ENV_VAR, catalog.path());
    let resolved = resolve_path_setting(
        None,
        EPISODES_ENV_VAR,
        Some(Path::new("/srv/podcastr/configured.json")),
    );
    env::remove_var(EPISODES_ENV_VAR);

    let resolved = resolved.unwrap();
    assert_eq!(resolved, catalog.path().to_path_buf());
    let episodes = load_episodes(&resolved).unwrap();
    assert_eq!(episodes[0].title, "from-env");
}

#[test]
#[serial]
fn test_episodes_cli_arg_overrides_env_var() {
    env::set_var(EPISODES_ENV_VAR, "/tmp/env-catalog.json");
    let resolved = resolve_path_setting(
        Some(Path::new("/tmp/cli-catalog.json")),
        EPISODES_ENV_VAR,
        None,
    );
    env::remove_var(EPISODES_ENV_VAR);

    assert_eq!(resolved, Some(PathBuf::from("/tmp/cli-catalog.json")));
}

#[test]
#[serial]
fn test_empty_episodes_env_var_falls_back_to_config() {
    env::set_var(EPISODES_ENV_VAR, "");
    let resolved = resolve_path_setting(
        None,
        EPISODES_ENV_VAR,
        Some(Path::new("/srv/podcastr/configured.json")),
    );
    env::remove_var(EPISODES_ENV_VAR);

    assert_eq!(resolved, Some(PathBuf::from("/srv/podcastr/configured.json")));
}
