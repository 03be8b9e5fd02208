//! Tests for config path resolution and loading
//!
//! Tests that manipulate environment variables are marked with #[serial]
//! so they do not race each other.

use podcastr_common::config::{
    load_toml_config, resolve_config_path, resolve_path_setting, ConfigSource,
};
use podcastr_common::Error;
use serde::Deserialize;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEST_ENV_VAR: &str = "PODCASTR_TEST_CONFIG";
const TEST_EPISODES_VAR: &str = "PODCASTR_TEST_EPISODES";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
struct SampleConfig {
    level: String,
    capacity: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: 100,
        }
    }
}

#[test]
#[serial]
fn test_cli_arg_wins_over_env() {
    env::set_var(TEST_ENV_VAR, "/tmp/from-env.toml");

    let source = resolve_config_path(Some(Path::new("/tmp/from-cli.toml")), TEST_ENV_VAR);
    assert_eq!(
        source,
        ConfigSource::CommandLine(PathBuf::from("/tmp/from-cli.toml"))
    );

    env::remove_var(TEST_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_without_cli_arg() {
    env::set_var(TEST_ENV_VAR, "/tmp/from-env.toml");

    let source = resolve_config_path(None, TEST_ENV_VAR);
    assert_eq!(
        source,
        ConfigSource::Environment(PathBuf::from("/tmp/from-env.toml"))
    );

    env::remove_var(TEST_ENV_VAR);
}

#[test]
#[serial]
fn test_falls_back_to_platform_default() {
    env::remove_var(TEST_ENV_VAR);

    let source = resolve_config_path(None, TEST_ENV_VAR);
    match source {
        ConfigSource::PlatformDefault(path) => {
            assert!(path.ends_with("podcastr/config.toml"));
        }
        ConfigSource::CompiledDefaults => {}
        other => panic!("Unexpected source: {:?}", other),
    }
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "level = \"debug\"").unwrap();

    let source = ConfigSource::CommandLine(file.path().to_path_buf());
    let config: SampleConfig = load_toml_config(&source).unwrap();
    assert_eq!(config.level, "debug");
    assert_eq!(config.capacity, 100);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let source = ConfigSource::CommandLine(PathBuf::from("/nonexistent/podcastr.toml"));
    let result: podcastr_common::Result<SampleConfig> = load_toml_config(&source);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_missing_default_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let source = ConfigSource::PlatformDefault(dir.path().join("config.toml"));
    let config: SampleConfig = load_toml_config(&source).unwrap();
    assert_eq!(config, SampleConfig::default());
}

#[test]
fn test_malformed_file_is_toml_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "capacity = \"lots\"").unwrap();

    let source = ConfigSource::PlatformDefault(file.path().to_path_buf());
    let result: podcastr_common::Result<SampleConfig> = load_toml_config(&source);
    assert!(matches!(result, Err(Error::Toml(_))));
}

#[test]
#[serial]
fn test_path_setting_priority() {
    let from_config = Path::new("/tmp/config-episodes.json");

    env::remove_var(TEST_EPISODES_VAR);
    assert_eq!(
        resolve_path_setting(None, TEST_EPISODES_VAR, Some(from_config)),
        Some(from_config.to_path_buf())
    );
    assert_eq!(resolve_path_setting(None, TEST_EPISODES_VAR, None), None);

    env::set_var(TEST_EPISODES_VAR, "/tmp/env-episodes.json");
    assert_eq!(
        resolve_path_setting(None, TEST_EPISODES_VAR, Some(from_config)),
        Some(PathBuf::from("/tmp/env-episodes.json"))
    );

    assert_eq!(
        resolve_path_setting(
            Some(Path::new("/tmp/cli-episodes.json")),
            TEST_EPISODES_VAR,
            Some(from_config)
        ),
        Some(PathBuf::from("/tmp/cli-episodes.json"))
    );

    env::remove_var(TEST_EPISODES_VAR);
}
