//! Player configuration
//!
//! Loaded from a JSON file. Every field has a default, so an empty object
//! is a valid configuration:
//!
//! ```json
//! { "playback": { "enabled": true, "interval": "1500ms" }, "start_playing": false }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::playback::{AutoplayPolicy, DEFAULT_AUTOPLAY_INTERVAL};

/// Autoplay settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether navigators get an autoplay timer at all
    pub enabled: bool,

    /// Delay between two autoplay steps, as a humantime string ("1.5s", "250ms")
    pub interval: String,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: humantime::format_duration(DEFAULT_AUTOPLAY_INTERVAL).to_string(),
        }
    }
}

impl PlaybackSettings {
    /// Parsed autoplay interval
    pub fn interval(&self) -> Result<Duration, ConfigError> {
        parse_interval(&self.interval)
    }

    /// Autoplay policy, or `None` when autoplay is disabled
    pub fn policy(&self) -> Result<Option<AutoplayPolicy>, ConfigError> {
        if !self.enabled {
            return Ok(None);
        }
        AutoplayPolicy::new(self.interval()?).map(Some)
    }
}

/// Top-level configuration of the terminal player
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub playback: PlaybackSettings,

    /// Start autoplay as soon as a walkthrough opens
    pub start_playing: bool,
}

impl PlayerConfig {
    /// Load configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Parse configuration from JSON text and validate it
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.playback.policy()?;
        Ok(config)
    }
}

/// Parse a humantime duration such as "1500ms" or "2s"
pub fn parse_interval(value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value.trim()).map_err(|source| ConfigError::InvalidDuration {
        value: value.to_string(),
        source,
    })
}
