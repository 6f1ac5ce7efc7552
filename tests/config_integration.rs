//! Integration tests for config storage and the branch name pipeline.
//!
//! These run against a temporary config directory and never touch the
//! network or the real per-user data directory.

use std::io::Cursor;

use jbranch::branch::branch_name;
use jbranch::config::{Config, ConfigError};
use tempfile::TempDir;

fn sample_config() -> Config {
    Config {
        jira_base_url: "https://example.atlassian.net".to_string(),
        username: "dev@example.com".to_string(),
        token: "s3cret".to_string(),
        short_name: "APP".to_string(),
    }
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();

    let config = sample_config();
    config.save(dir.path()).unwrap();

    let loaded = Config::load(dir.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_is_detected() {
    let dir = TempDir::new().unwrap();

    let err = Config::load(dir.path()).unwrap_err();
    match err {
        ConfigError::NotFound(path) => {
            assert_eq!(path, Config::file_path(dir.path()));
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn test_config_file_key_casing() {
    let dir = TempDir::new().unwrap();
    sample_config().save(dir.path()).unwrap();

    let contents = std::fs::read_to_string(Config::file_path(dir.path())).unwrap();
    assert!(contents.contains("jiraBaseURL: https://example.atlassian.net"));
    assert!(contents.contains("username: dev@example.com"));
    assert!(contents.contains("token: s3cret"));
    assert!(contents.contains("shortName: APP"));
}

#[cfg(unix)]
#[test]
fn test_config_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    sample_config().save(dir.path()).unwrap();

    let file_mode = std::fs::metadata(Config::file_path(dir.path()))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(file_mode & 0o777, 0o600);
}

#[test]
fn test_prompt_capture_feeds_branch_derivation() {
    let dir = TempDir::new().unwrap();

    let mut input = Cursor::new("https://example.atlassian.net\ndev@example.com\ns3cret\nAPP\n");
    let mut output = Vec::new();
    let config = Config::from_prompts(&mut input, &mut output).unwrap();
    config.save(dir.path()).unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(
        branch_name(&config.short_name, "APP-42", "Fix the login page crash!!"),
        "APP-APP-42-Fix-the-login-page-crash__"
    );
}
