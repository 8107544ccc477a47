//! Calibration constants and reference values for palette extraction
//!
//! Defaults for sampling strides, category thresholds and export rendering.
//! Every value here can be overridden through [`crate::config::PipelineConfig`].

/// Pixel sampling parameters
pub mod sampling {
    /// Bytes per RGBA pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Ranked extraction visits every 5th pixel (every 20 bytes)
    pub const RANKED_STRIDE: usize = 5;

    /// Classification pool visits every 4th pixel (every 16 bytes)
    pub const POOL_STRIDE: usize = 4;

    /// Pixels with alpha below this value are treated as background
    pub const ALPHA_THRESHOLD: u8 = 125;

    /// Maximum number of colors in the ranked extraction
    pub const RANKED_COUNT: usize = 20;
}

/// Category thresholds and caps (HSL integer units)
pub mod categories {
    /// Maximum colors in the dominant palette
    pub const DOMINANT_CAP: usize = 12;
    /// Maximum colors in the vibrant palette
    pub const VIBRANT_CAP: usize = 10;
    /// Maximum colors in the muted palette
    pub const MUTED_CAP: usize = 8;
    /// Maximum colors in the light palette
    pub const LIGHT_CAP: usize = 8;
    /// Maximum colors in the dark palette
    pub const DARK_CAP: usize = 8;

    /// Vibrant colors need saturation strictly above this
    pub const VIBRANT_MIN_SATURATION: u8 = 60;
    /// Vibrant lightness range (exclusive)
    pub const VIBRANT_LIGHTNESS: (u8, u8) = (20, 80);

    /// Muted colors need saturation strictly below this
    pub const MUTED_MAX_SATURATION: u8 = 50;
    /// Muted lightness range (exclusive)
    pub const MUTED_LIGHTNESS: (u8, u8) = (30, 70);

    /// Light colors need lightness strictly above this
    pub const LIGHT_MIN_LIGHTNESS: u8 = 70;

    /// Dark colors need lightness strictly below this
    pub const DARK_MAX_LIGHTNESS: u8 = 30;
}

/// Harmony generation parameters
pub mod harmony {
    /// Lightness step between monochromatic shades
    pub const MONOCHROMATIC_STEP: u8 = 15;

    /// Monochromatic lightness is clamped to this range (inclusive)
    pub const MONOCHROMATIC_LIGHTNESS: (u8, u8) = (10, 90);

    /// Number of derived shades for monochromatic and analogous harmonies
    pub const DERIVED_SHADES: u16 = 4;

    /// Hue step between analogous colors in degrees
    pub const ANALOGOUS_STEP: u16 = 30;
}

/// Export rendering parameters
pub mod export {
    /// Width and height of one swatch tile in image exports (pixels)
    pub const SWATCH_SIZE: u32 = 100;

    /// JPEG quality used for raster strips
    pub const JPEG_QUALITY: u8 = 90;

    /// Number of columns declared in GIMP palettes
    pub const GIMP_COLUMNS: u32 = 3;
}

/// Persistence limits
pub mod history {
    /// Maximum number of images kept in history
    pub const MAX_ITEMS: usize = 20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_ranges() {
        assert!(categories::VIBRANT_LIGHTNESS.0 < categories::VIBRANT_LIGHTNESS.1);
        assert!(categories::MUTED_LIGHTNESS.0 < categories::MUTED_LIGHTNESS.1);
        assert!(harmony::MONOCHROMATIC_LIGHTNESS.0 < harmony::MONOCHROMATIC_LIGHTNESS.1);
    }

    #[test]
    fn test_sampling_strides() {
        // the pool samples more densely than the ranked extraction
        assert!(sampling::POOL_STRIDE < sampling::RANKED_STRIDE);
        assert_eq!(sampling::RANKED_STRIDE * sampling::BYTES_PER_PIXEL, 20);
        assert_eq!(sampling::POOL_STRIDE * sampling::BYTES_PER_PIXEL, 16);
    }
}
