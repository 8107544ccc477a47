//! Configuration structures for the smart_palette pipeline.
//!
//! This module defines all tunable parameters for palette extraction,
//! organized into groups for sampling, categorization, and export.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use smart_palette::PipelineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PipelineConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = PipelineConfig::default();
//! # Ok::<(), smart_palette::PaletteError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: sampling strides, transparency threshold
//! - [`CategoryConfig`]: HSL thresholds and caps per palette category
//! - [`ExportConfig`]: swatch tile size and raster quality

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{categories, export, sampling};
use crate::{PaletteError, Result};

/// Complete pipeline configuration.
///
/// Can be serialized to/from JSON for reproducible runs. Missing sections
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Pixel sampling configuration
    pub extraction: ExtractionConfig,

    /// Palette categorization configuration
    pub categories: CategoryConfig,

    /// Export rendering configuration
    pub export: ExportConfig,
}

/// Pixel sampling parameters.
///
/// Strides are counted in pixels: a stride of 5 visits every 20th byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Stride for the frequency-ranked extraction
    pub ranked_stride: usize,

    /// Stride for the classification pool (finer than `ranked_stride`)
    pub pool_stride: usize,

    /// Pixels with alpha below this value are skipped
    pub alpha_threshold: u8,

    /// Maximum number of ranked colors
    pub ranked_count: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ranked_stride: sampling::RANKED_STRIDE,
            pool_stride: sampling::POOL_STRIDE,
            alpha_threshold: sampling::ALPHA_THRESHOLD,
            ranked_count: sampling::RANKED_COUNT,
        }
    }
}

/// Exclusive lightness bounds (HSL percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightnessBounds {
    /// Lightness must be strictly above this
    pub min: u8,

    /// Lightness must be strictly below this
    pub max: u8,
}

impl LightnessBounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Check `min < lightness < max`
    pub fn contains(&self, lightness: u8) -> bool {
        self.min < lightness && lightness < self.max
    }
}

/// Palette categorization parameters.
///
/// All comparisons are strict, matching the category table:
/// vibrant `s > 60 && 20 < l < 80`, muted `s < 50 && 30 < l < 70`,
/// light `l > 70`, dark `l < 30`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub dominant_cap: usize,
    pub vibrant_cap: usize,
    pub muted_cap: usize,
    pub light_cap: usize,
    pub dark_cap: usize,

    pub vibrant_min_saturation: u8,
    pub vibrant_lightness: LightnessBounds,

    pub muted_max_saturation: u8,
    pub muted_lightness: LightnessBounds,

    pub light_min_lightness: u8,
    pub dark_max_lightness: u8,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        let (vibrant_min, vibrant_max) = categories::VIBRANT_LIGHTNESS;
        let (muted_min, muted_max) = categories::MUTED_LIGHTNESS;
        Self {
            dominant_cap: categories::DOMINANT_CAP,
            vibrant_cap: categories::VIBRANT_CAP,
            muted_cap: categories::MUTED_CAP,
            light_cap: categories::LIGHT_CAP,
            dark_cap: categories::DARK_CAP,
            vibrant_min_saturation: categories::VIBRANT_MIN_SATURATION,
            vibrant_lightness: LightnessBounds::new(vibrant_min, vibrant_max),
            muted_max_saturation: categories::MUTED_MAX_SATURATION,
            muted_lightness: LightnessBounds::new(muted_min, muted_max),
            light_min_lightness: categories::LIGHT_MIN_LIGHTNESS,
            dark_max_lightness: categories::DARK_MAX_LIGHTNESS,
        }
    }
}

/// Export rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Edge length of one swatch tile in image exports (pixels)
    pub swatch_size: u32,

    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            swatch_size: export::SWATCH_SIZE,
            jpeg_quality: export::JPEG_QUALITY,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::storage(format!("Failed to read config: {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PaletteError::serialization("Invalid config JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::serialization("Failed to serialize config", e))?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::storage(format!("Failed to write config: {}", path.display()), e)
        })
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidParameter`] for zero strides, zero
    /// tile size, JPEG quality outside 1-100 or inverted lightness bounds.
    pub fn validate(&self) -> Result<()> {
        let extraction = &self.extraction;
        if extraction.ranked_stride == 0 {
            return Err(PaletteError::invalid_parameter("extraction.ranked_stride", 0));
        }
        if extraction.pool_stride == 0 {
            return Err(PaletteError::invalid_parameter("extraction.pool_stride", 0));
        }

        for (name, bounds) in [
            ("categories.vibrant_lightness", self.categories.vibrant_lightness),
            ("categories.muted_lightness", self.categories.muted_lightness),
        ] {
            if bounds.min >= bounds.max || bounds.max > 100 {
                return Err(PaletteError::invalid_parameter(
                    name,
                    format!("{}..{}", bounds.min, bounds.max),
                ));
            }
        }

        if self.export.swatch_size == 0 {
            return Err(PaletteError::invalid_parameter("export.swatch_size", 0));
        }
        if !(1..=100).contains(&self.export.jpeg_quality) {
            return Err(PaletteError::invalid_parameter(
                "export.jpeg_quality",
                self.export.jpeg_quality,
            ));
        }
        Ok(())
    }
}
