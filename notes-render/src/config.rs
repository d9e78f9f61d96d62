//! Typography configuration: base size, scale ratio and font files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::font_matrix::FontPaths;
use crate::scale::{SizeTierTable, compute_sizes};

pub const DEFAULT_BASE_SIZE: f32 = 16.0;
pub const DEFAULT_RATIO: f32 = 1.125;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    /// Body text size in pixels.
    pub base_size: f32,
    /// Ratio between neighbouring size tiers.
    pub ratio: f32,
    pub fonts: FontPaths,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            ratio: DEFAULT_RATIO,
            fonts: FontPaths::default(),
        }
    }
}

impl TypographyConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no typography config, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_size.is_finite() && self.base_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_size must be positive, got {}",
                self.base_size
            )));
        }
        if !(self.ratio.is_finite() && self.ratio > 1.0) {
            return Err(ConfigError::Invalid(format!("ratio must exceed 1, got {}", self.ratio)));
        }
        Ok(())
    }

    pub fn size_table(&self) -> SizeTierTable {
        compute_sizes(self.base_size, self.ratio)
    }
}
