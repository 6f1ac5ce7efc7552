//! Per-user configuration for the Jira connection.
//!
//! Stored as YAML at `<data_dir>/jbranch/config.yml` and created by the
//! interactive `jbranch config` flow. The config directory is resolved
//! once in the CLI layer and passed in, so load/save never touch the
//! environment themselves.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file has not been created yet
    #[error("config file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Malformed(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Jira instance, e.g. "https://company.atlassian.net"
    #[serde(rename = "jiraBaseURL")]
    pub jira_base_url: String,
    pub username: String,
    pub token: String,
    /// Project abbreviation used as the branch name prefix
    #[serde(rename = "shortName")]
    pub short_name: String,
}

impl Config {
    /// Default per-user config directory: `<data_dir>/jbranch`
    /// (`~/.local/share/jbranch` on Linux).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("jbranch"))
    }

    /// Path of the config file inside `dir`.
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Load the config from `<dir>/config.yml`.
    ///
    /// An absent file is reported as [`ConfigError::NotFound`] so the
    /// caller can direct the user to `jbranch config`.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::file_path(dir);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path));
            }
            Err(err) => return Err(ConfigError::Io(err)),
        };

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Save the config to `<dir>/config.yml`, creating the directory.
    ///
    /// The directory and the file are restricted to the owner on unix;
    /// the token is a credential.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).context("Failed to create config directory")?;
        restrict_to_owner(dir, 0o700)?;

        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        let path = Self::file_path(dir);
        std::fs::write(&path, yaml).context("Failed to write config file")?;
        restrict_to_owner(&path, 0o600)?;

        Ok(())
    }

    /// Capture a config interactively by prompting on `output` and
    /// reading answers from `input`. Every answer is trimmed.
    pub fn from_prompts(input: &mut impl BufRead, output: &mut impl Write) -> Result<Self> {
        let jira_base_url = prompt_line(input, output, "Jira base URL: ")?;
        let username = prompt_line(input, output, "Jira user name: ")?;
        let token = prompt_line(input, output, "Jira API token: ")?;
        let short_name = prompt_line(input, output, "Short name: ")?;

        Ok(Self {
            jira_base_url,
            username,
            token,
            short_name,
        })
    }
}

fn prompt_line(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read answer for {prompt:?}"))?;

    Ok(line.trim().to_string())
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
