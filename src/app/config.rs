//! Configuration Management

use crate::analysis::kinematics::ChannelLimits;
use crate::parse::{CHANNEL_LEFT_ARM, CHANNEL_RIGHT_ARM, CHANNEL_ROTATION};
use crate::resample::PolicyKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-channel derivative limits
    pub limits: LimitsConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Speed/acceleration limits per channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Structure rotation limits
    pub rotation: ChannelLimits,
    /// Left arm limits
    pub left_arm: ChannelLimits,
    /// Right arm limits
    pub right_arm: ChannelLimits,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default resampling policy
    pub policy: PolicyKind,
    /// Target rate for the rate-floor policy (frames per second)
    pub target_rate: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            rotation: ChannelLimits {
                speed: 60.0,
                accel: 800.0,
            },
            left_arm: ChannelLimits {
                speed: 90.0,
                accel: 1200.0,
            },
            right_arm: ChannelLimits {
                speed: 90.0,
                accel: 1200.0,
            },
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::PairAveraging,
            target_rate: 25.0,
        }
    }
}

impl LimitsConfig {
    /// Limits for a channel by its log section name.
    pub fn for_channel(&self, name: &str) -> Option<&ChannelLimits> {
        match name {
            CHANNEL_ROTATION => Some(&self.rotation),
            CHANNEL_LEFT_ARM => Some(&self.left_arm),
            CHANNEL_RIGHT_ARM => Some(&self.right_arm),
            _ => None,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), crate::Error> {
        for (name, limits) in [
            ("rotation", &self.limits.rotation),
            ("left_arm", &self.limits.left_arm),
            ("right_arm", &self.limits.right_arm),
        ] {
            if limits.speed <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "limits.{}.speed must be positive, got {}",
                    name, limits.speed
                )));
            }
            if limits.accel <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "limits.{}.accel must be positive, got {}",
                    name, limits.accel
                )));
            }
        }
        if self.export.target_rate <= 0.0 {
            return Err(crate::Error::Config(format!(
                "export.target_rate must be positive, got {}",
                self.export.target_rate
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location, falling back to defaults.
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".choreo_lab").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
