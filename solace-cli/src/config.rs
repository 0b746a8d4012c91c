//! File-backed configuration, overridden by command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use solace_client::client::DEFAULT_ENDPOINT;
use solace_types::ReplyMode;

use crate::cli::Cli;

const DEFAULT_GREETING: &str = "Hello! I am your AI Therapist. How are you feeling today?";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Chat endpoint URL.
    pub endpoint: String,
    /// `stream` or `json`.
    pub mode: ReplyMode,
    /// Where the client identity is persisted.
    pub state_dir: PathBuf,
    /// First line shown before any input. Empty disables it.
    pub greeting: String,
    /// `EnvFilter` directive.
    pub log_level: String,
    /// TCP connect timeout. The reply itself is never timed out.
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            mode: ReplyMode::Stream,
            state_dir: default_state_dir(),
            greeting: DEFAULT_GREETING.into(),
            log_level: "warn".into(),
            connect_timeout_secs: 10,
        }
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("solace"))
        .unwrap_or_else(|| PathBuf::from(".solace"))
}

/// Load the config file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig, anyhow::Error> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: CliConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

impl CliConfig {
    /// Apply command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if cli.json {
            self.mode = ReplyMode::Json;
        }
        if let Some(dir) = &cli.state_dir {
            self.state_dir = dir.clone();
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let url = reqwest::Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Endpoint must be http or https, got '{}'", url.scheme());
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
