//! Configuration for swatch

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::Color;
use crate::gradient::Gradient;

/// Color configuration, passed explicitly to whatever renders with it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Progress bar ramp
    #[serde(default)]
    pub progress: ProgressConfig,

    /// Three-anchor gradient used for heat scales
    #[serde(default)]
    pub tri_stop: TriStopConfig,
}

/// Progress bar ramp anchors and width
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Color of the first cell
    #[serde(default = "default_progress_start")]
    pub start: Color,

    /// Color the ramp heads toward (never reached)
    #[serde(default = "default_progress_end")]
    pub end: Color,

    /// Bar width in cells
    #[serde(default = "default_progress_width")]
    pub width: usize,
}

/// Anchors and lightening for a tri-stop gradient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TriStopConfig {
    /// First anchor
    #[serde(default = "default_tri_start")]
    pub start: Color,

    /// Anchor reached at the halfway cell
    #[serde(default = "default_tri_mid")]
    pub mid: Color,

    /// Last anchor
    #[serde(default = "default_tri_end")]
    pub end: Color,

    /// Lighten factor applied to every color
    #[serde(default)]
    pub lighten: f64,
}

const fn default_progress_start() -> Color {
    Color::rgb(0xB1, 0x4F, 0xFF)
}

const fn default_progress_end() -> Color {
    Color::rgb(0x00, 0xFF, 0xA3)
}

const fn default_progress_width() -> usize {
    71
}

const fn default_tri_start() -> Color {
    Color::rgb(0xF8, 0xD4, 0x95)
}

const fn default_tri_mid() -> Color {
    Color::rgb(0xF8, 0xAD, 0x58)
}

const fn default_tri_end() -> Color {
    Color::rgb(0xFF, 0x00, 0x00)
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            start: default_progress_start(),
            end: default_progress_end(),
            width: default_progress_width(),
        }
    }
}

impl Default for TriStopConfig {
    fn default() -> Self {
        Self {
            start: default_tri_start(),
            mid: default_tri_mid(),
            end: default_tri_end(),
            lighten: 0.0,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, including any
    /// color that is not a `#RRGGBB` string
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swatch")
            .join("config.json")
    }

    /// The progress bar ramp, one color per cell
    #[must_use]
    pub fn progress_gradient(&self) -> Gradient {
        Gradient::ramp(self.progress.start, self.progress.end, self.progress.width)
    }

    /// The configured tri-stop gradient with `steps` colors
    #[must_use]
    pub fn tri_stop_gradient(&self, steps: usize) -> Gradient {
        let TriStopConfig {
            start,
            mid,
            end,
            lighten,
        } = self.tri_stop;
        Gradient::tri_stop(start, mid, end, steps, lighten)
    }
}
