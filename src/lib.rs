//! # Smart Palette
//!
//! A Rust crate for extracting color palettes from images and exporting
//! them to design, web and print formats.
//!
//! This library provides:
//! - Frequency-ranked color extraction from RGBA pixel buffers
//! - Categorization into dominant, vibrant, muted, light and dark palettes
//! - Color harmony generation on the HSL wheel
//! - A palette export codec covering swatch files, stylesheets, source
//!   code, tabular data and swatch images
//!
//! ## Example
//!
//! ```rust,no_run
//! use smart_palette::{analyze_image, export_palette, ExportFormat, PaletteCategory};
//! use std::path::Path;
//!
//! let analysis = analyze_image(Path::new("photo.jpg"))?;
//! let vibrant = analysis.palette(PaletteCategory::Vibrant);
//! let payload = export_palette(&vibrant, ExportFormat::CssCustomProperties)?;
//! println!("{}", payload.as_text().unwrap_or_default());
//! # Ok::<(), smart_palette::PaletteError>(())
//! ```

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod image_loader;
pub mod palettes;
pub mod store;

pub use color::{ColorExtractor, ColorSample, Hsl, PixelBuffer, Rgb};
pub use config::{CategoryConfig, ExportConfig, ExtractionConfig, PipelineConfig};
pub use error::{PaletteError, Result};
pub use export::{
    export_palette, export_palette_named, ExportData, ExportFormat, ExportPayload,
    PaletteExporter,
};
pub use palettes::{
    generate_harmony, CategorizedPalettes, Categorizer, HarmonyKind, Palette, PaletteCategory,
};
pub use store::{ImageHistory, JsonFilePaletteStore, MemoryPaletteStore, PaletteStore};

/// Result of analyzing one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteAnalysis {
    /// Most frequent colors, from the coarse sampling pass
    pub ranked: Vec<ColorSample>,
    /// Category palettes, from the fine sampling pass
    pub palettes: CategorizedPalettes,
}

impl PaletteAnalysis {
    /// Wrap one category as a [`Palette`] named "<category> Palette"
    pub fn palette(&self, category: PaletteCategory) -> Palette {
        Palette::with_generated_id(
            Palette::default_name(category.name()),
            self.palettes.get(category).to_vec(),
            category.name(),
        )
    }

    /// Palettes for every non-empty category, in display order
    pub fn non_empty_palettes(&self) -> Vec<Palette> {
        self.palettes
            .iter()
            .filter(|(_, colors)| !colors.is_empty())
            .map(|(category, _)| self.palette(category))
            .collect()
    }

    /// Hex strings of the leading dominant colors, for history records
    pub fn dominant_hexes(&self, count: usize) -> Vec<String> {
        self.palettes
            .dominant
            .iter()
            .take(count)
            .map(|c| c.hex.clone())
            .collect()
    }
}

/// Run ranked extraction and categorization over a decoded image
///
/// # Errors
///
/// Returns [`PaletteError::InvalidParameter`] if `config` fails validation.
pub fn analyze_pixels(buffer: &PixelBuffer, config: &PipelineConfig) -> Result<PaletteAnalysis> {
    config.validate()?;

    let extractor = ColorExtractor::from_config(&config.extraction);
    let ranked = extractor.extract_ranked(buffer);
    let pool = extractor.sample_pool(buffer);
    debug!(
        "Sampled {} ranked colors and a pool of {} from {}x{} image",
        ranked.len(),
        pool.len(),
        buffer.width(),
        buffer.height()
    );

    let palettes = Categorizer::with_config(config.categories.clone()).categorize(&pool);
    info!(
        "Categorized {} colors into {} non-empty palettes",
        palettes.total_colors(),
        palettes.non_empty_count()
    );

    Ok(PaletteAnalysis { ranked, palettes })
}

/// Load an image file and analyze it with default settings
///
/// # Errors
///
/// Returns [`PaletteError::ImageLoadError`] if the file cannot be decoded.
pub fn analyze_image(image_path: &Path) -> Result<PaletteAnalysis> {
    let buffer = image_loader::load_pixel_buffer(image_path)?;
    analyze_pixels(&buffer, &PipelineConfig::default())
}
