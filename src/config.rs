//! Application configuration
//!
//! Settings are read from an optional TOML file. Every field has a default,
//! so a missing file or a partial file is fine.

use crate::error::{Result, SampleTaskError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete application configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Noise gate settings
    pub noise: NoiseConfig,
    /// Task screen settings
    pub tasks: TaskConfig,
    /// Window settings
    pub window: WindowConfig,
}

/// Noise gate configuration.
///
/// The meter range and pass threshold are fixed (see
/// [`crate::noise::LEVEL_RANGE`]); only the sampling cadence is tunable.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Delay between two draws in milliseconds
    pub cadence_ms: u64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { cadence_ms: 400 }
    }
}

impl NoiseConfig {
    /// Delay between two draws
    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.cadence_ms)
    }
}

/// Task screen configuration.
///
/// Durations are the simulated recordings; submission still only accepts
/// [`crate::task::ACCEPTED_DURATION`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Simulated recording duration of the text reading task
    pub text_duration: u32,
    /// Simulated recording duration of the image description task
    pub image_duration: u32,
    /// Simulated recording duration of the photo capture task
    pub photo_duration: u32,
    /// Passage shown on the text reading task
    pub passage: String,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            text_duration: 12,
            image_duration: 11,
            photo_duration: 15,
            passage: "This is a sample passage to read.".to_string(),
        }
    }
}

/// Window configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Use the dark colour scheme
    pub dark: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 720.0,
            title: "Sample Task".to_string(),
            dark: false,
        }
    }
}

impl AppConfig {
    /// Default location: `<config dir>/sampletask/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sampletask").join("config.toml"))
    }

    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SampleTaskError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            SampleTaskError::ConfigError(msg) => {
                SampleTaskError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| SampleTaskError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists.
    ///
    /// Falls back to defaults when nothing is found or loading fails.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No configuration file found, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{} ({})", e, e.user_message());
                Self::default()
            }
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.noise.cadence_ms == 0 {
            return Err(SampleTaskError::ConfigError(
                "noise.cadence_ms must be greater than zero".to_string(),
            ));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(SampleTaskError::ConfigError(format!(
                "window size {}x{} must be positive",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    /// Set the noise sampling cadence
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.noise.cadence_ms = u64::try_from(cadence.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self
    }

    /// Set the simulated durations of the three task screens
    pub fn with_durations(mut self, text: u32, image: u32, photo: u32) -> Self {
        self.tasks.text_duration = text;
        self.tasks.image_duration = image;
        self.tasks.photo_duration = photo;
        self
    }

    /// Set the passage shown on the text reading task
    pub fn with_passage(mut self, passage: impl Into<String>) -> Self {
        self.tasks.passage = passage.into();
        self
    }
}
