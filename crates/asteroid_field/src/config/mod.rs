//! Configuration system
//!
//! Generator parameters live in [`FieldConfig`]. Its `Default` holds the
//! values the `spawn_asteroids` binary runs with; the file layer is for
//! library users who want a different field.

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::{Bounds, Region, SizePolicy};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            ConfigFormat::Ron => {
                ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Parameters of one generated asteroid field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of asteroids to generate
    pub count: usize,

    /// Chance that an asteroid is placed in the favored region
    pub favored_probability: f64,

    /// Dense placement rectangle around the flight path
    pub favored_region: Region,

    /// Full placement rectangle
    pub total_region: Region,

    /// Depth band shared by all asteroids
    pub depth: Bounds,

    /// Scale interval for favored asteroids
    pub favored_scale: Bounds,

    /// Scale interval for asteroids outside the favored branch
    pub spread_scale: Bounds,

    /// How the scale interval is chosen
    pub size_policy: SizePolicy,

    /// Where the field document is written
    pub output_path: PathBuf,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            favored_probability: 0.35,
            favored_region: Region::new(Bounds::new(-7.0, 12.0), Bounds::new(-6.0, 7.0)),
            total_region: Region::new(Bounds::new(-15.0, 20.0), Bounds::new(-10.0, 10.0)),
            depth: Bounds::new(-400.0, -800.0),
            favored_scale: Bounds::new(0.3, 1.2),
            spread_scale: Bounds::new(0.3, 2.2),
            size_policy: SizePolicy::ByPlacement,
            output_path: PathBuf::from("asteroids.json"),
        }
    }
}

impl Config for FieldConfig {}

impl FieldConfig {
    /// Check that every parameter can be sampled from
    pub fn validate(&self) -> Result<(), FieldError> {
        if !(0.0..=1.0).contains(&self.favored_probability) {
            return Err(FieldError::InvalidConfig(format!(
                "favored_probability must be within [0, 1], got {}",
                self.favored_probability
            )));
        }

        if !self.favored_region.is_sampleable() || !self.total_region.is_sampleable() {
            return Err(FieldError::InvalidConfig(
                "placement regions must have finite bounds and width".to_string(),
            ));
        }

        if !self.depth.is_sampleable() {
            return Err(FieldError::InvalidConfig(
                "depth band must have finite bounds and width".to_string(),
            ));
        }

        for (label, scale) in [
            ("favored_scale", &self.favored_scale),
            ("spread_scale", &self.spread_scale),
        ] {
            if !scale.is_sampleable() || scale.min() <= 0.0 {
                return Err(FieldError::InvalidConfig(format!(
                    "{label} must be positive and finite, got [{}, {}]",
                    scale.min(),
                    scale.max()
                )));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(FieldError::InvalidConfig(
                "output_path must not be empty".to_string(),
            ));
        }

        if !self.favored_region_within_total() {
            log::warn!(
                "Favored region {:?} extends past the total region {:?}",
                self.favored_region,
                self.total_region
            );
        }

        Ok(())
    }

    fn favored_region_within_total(&self) -> bool {
        let favored = &self.favored_region;
        let total = &self.total_region;
        total.x.contains(favored.x.min())
            && total.x.contains(favored.x.max())
            && total.y.contains(favored.y.min())
            && total.y.contains(favored.y.max())
    }
}
