//! Environment-driven configuration
//!
//! All configuration comes from environment variables (optionally loaded
//! from a `.env` file by the binary). Required values are validated up
//! front so a misconfigured deployment fails before any network call.

use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Default path for the snapshot file
const DEFAULT_STATE_FILE: &str = "state.json";

/// Runtime configuration for a monitoring run
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the AI summarization service
    pub claude_api_key: String,

    /// Pushover application token
    pub pushover_token: String,

    /// Pushover user key to deliver notifications to
    pub pushover_user: String,

    /// URL of the page to monitor
    pub target_url: String,

    /// Path of the JSON snapshot file
    pub state_file: PathBuf,
}

impl Config {
    /// Build configuration from environment variables
    ///
    /// Required: `CLAUDE_API_KEY`, `PUSHOVER_TOKEN`, `PUSHOVER_USER`,
    /// `TARGET_URL`. Optional: `STATE_FILE` (defaults to `state.json`).
    /// Every missing required variable is named in the error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Empty and whitespace-only values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let claude_api_key = read("CLAUDE_API_KEY");
        let pushover_token = read("PUSHOVER_TOKEN");
        let pushover_user = read("PUSHOVER_USER");
        let target_url = read("TARGET_URL");

        let required = [
            ("CLAUDE_API_KEY", &claude_api_key),
            ("PUSHOVER_TOKEN", &pushover_token),
            ("PUSHOVER_USER", &pushover_user),
            ("TARGET_URL", &target_url),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let state_file = read("STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));

        let config = Self {
            claude_api_key: claude_api_key.unwrap_or_default(),
            pushover_token: pushover_token.unwrap_or_default(),
            pushover_user: pushover_user.unwrap_or_default(),
            target_url: target_url.unwrap_or_default(),
            state_file,
        };
        config.validate()?;

        Ok(config)
    }

    /// Check values that must be well-formed, not just present
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.target_url)
            .map_err(|e| Error::Config(format!("Invalid TARGET_URL: {}", e)))?;
        Ok(())
    }
}
