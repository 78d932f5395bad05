//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `PIPKIN_`
//!
//! Example environment variable: `PIPKIN_STAGE__SPLASH_DURATION_SECS=0.5`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub stage: StageConfig,

    #[serde(default)]
    pub care: CareConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
        }
    }
}

/// Stage (scene) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Background color, red channel (0-255)
    pub background_red: u8,
    /// Background color, green channel (0-255)
    pub background_green: u8,
    /// Background color, blue channel (0-255)
    pub background_blue: u8,
    /// How long the splash screen stays up before transitioning
    pub splash_duration_secs: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            background_red: 226,
            background_green: 232,
            background_blue: 254,
            splash_duration_secs: 3.0,
        }
    }
}

impl StageConfig {
    /// Background color as linear RGB in `0.0..=1.0`.
    pub fn background_rgb(&self) -> [f64; 3] {
        [
            self.background_red as f64 / 255.0,
            self.background_green as f64 / 255.0,
            self.background_blue as f64 / 255.0,
        ]
    }
}

/// Care loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareConfig {
    /// Autosave interval in seconds
    pub autosave_interval_secs: u64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: 60,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log frame timing once in a while
    pub log_fps: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_fps: true }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `PIPKIN_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("window.width", 800_i64)?
            .set_default("window.height", 480_i64)?
            .set_default("stage.background_red", 226_i64)?
            .set_default("stage.background_green", 232_i64)?
            .set_default("stage.background_blue", 254_i64)?
            .set_default("stage.splash_duration_secs", 3.0)?
            .set_default("care.autosave_interval_secs", 60_i64)?
            .set_default("debug.log_fps", true)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("config")
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (PIPKIN_WINDOW__WIDTH, etc.)
            .add_source(Environment::with_prefix("PIPKIN").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.stage.splash_duration_secs, 3.0);
        assert_eq!(config.care.autosave_interval_secs, 60);
        assert!(config.debug.log_fps);
    }

    #[test]
    fn test_background_rgb() {
        let stage = StageConfig::default();
        let [r, g, b] = stage.background_rgb();
        assert!((r - 226.0 / 255.0).abs() < 1e-6);
        assert!((g - 232.0 / 255.0).abs() < 1e-6);
        assert!((b - 254.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = GameConfig::load().expect("Failed to load config");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 480);
    }
}
