//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/cubefolio/config.json`.
//! Every section is optional; missing sections and fields fall back to the
//! compiled-in defaults, and unknown keys are ignored.
//!
//! # Example
//!
//! ```json
//! {
//!   "gestures": {
//!     "noise_threshold": 5.0,
//!     "cooldown_ms": 500,
//!     "jitter_threshold": 10.0,
//!     "min_swipe_distance": 40.0,
//!     "max_swipe_ms": null
//!   },
//!   "swipe_axes": { "main": "Horizontal", "project": "Both" },
//!   "render": { "clear_screen": true }
//! }
//! ```

use crate::gesture::GestureConfig;
use crate::input::ScopeAxes;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gesture thresholds, shared by the main cube and the project cube.
    #[serde(default)]
    pub gestures: GestureConfig,

    /// Which swipe axes each cube honours.
    #[serde(default)]
    pub swipe_axes: ScopeAxes,

    /// Text renderer settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Text renderer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Clear the terminal before each frame.
    pub clear_screen: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
