//! Frequency-ranked color extraction from RGBA pixel buffers
//!
//! Extracts representative colors with:
//! - Strided sampling (every Nth pixel) instead of a full scan
//! - Transparency filtering against an alpha threshold
//! - Exact-HEX frequency ranking with first-seen tie breaking
//!
//! Extraction is deterministic: the same buffer and parameters always
//! produce the same output.

use std::collections::HashMap;

use log::{debug, trace, warn};

use super::conversion::Rgb;
use super::sample::ColorSample;
use crate::config::ExtractionConfig;
use crate::constants::sampling::BYTES_PER_PIXEL;
use crate::{PaletteError, Result};

/// Row-major RGBA8 pixel buffer with no row padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidParameter`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(PaletteError::invalid_parameter(
                "pixel buffer length",
                format!("{} (expected {} for {}x{})", data.len(), expected, width, height),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from a list of RGBA pixels laid out as a single row
    pub fn from_pixels(pixels: &[[u8; 4]]) -> Self {
        Self {
            width: pixels.len() as u32,
            height: if pixels.is_empty() { 0 } else { 1 },
            data: pixels.iter().flatten().copied().collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Color extractor implementing strided frequency ranking
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    ranked_stride: usize,
    pool_stride: usize,
    alpha_threshold: u8,
    ranked_count: usize,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorExtractor {
    /// Create an extractor with default calibration
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from configuration
    ///
    /// Zero strides are clamped to 1 so extraction stays total.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_params(
            config.ranked_stride,
            config.pool_stride,
            config.alpha_threshold,
            config.ranked_count,
        )
    }

    /// Create an extractor with custom parameters
    pub fn with_params(
        ranked_stride: usize,
        pool_stride: usize,
        alpha_threshold: u8,
        ranked_count: usize,
    ) -> Self {
        if ranked_stride == 0 || pool_stride == 0 {
            warn!(
                "zero sampling stride clamped to 1 (ranked={}, pool={})",
                ranked_stride, pool_stride
            );
        }
        Self {
            ranked_stride: ranked_stride.max(1),
            pool_stride: pool_stride.max(1),
            alpha_threshold,
            ranked_count,
        }
    }

    /// Extract up to `ranked_count` colors ordered by descending frequency
    ///
    /// Samples every `ranked_stride`-th pixel, skips pixels whose alpha is
    /// below the threshold, and breaks count ties by first appearance.
    pub fn extract_ranked(&self, buffer: &PixelBuffer) -> Vec<ColorSample> {
        let opaque = self.sample_opaque(buffer, self.ranked_stride);
        let ranked = rank_by_frequency(opaque, self.ranked_count);
        debug!(
            "ranked extraction: {} colors from {}x{} buffer",
            ranked.len(),
            buffer.width(),
            buffer.height()
        );
        ranked
    }

    /// Collect the classification pool in encounter order
    ///
    /// Samples every `pool_stride`-th opaque pixel. Duplicates are kept so
    /// the pool also carries frequency information.
    pub fn sample_pool(&self, buffer: &PixelBuffer) -> Vec<ColorSample> {
        let mut cache: HashMap<Rgb, ColorSample> = HashMap::new();
        let pool: Vec<ColorSample> = self
            .sample_opaque(buffer, self.pool_stride)
            .map(|rgb| {
                cache
                    .entry(rgb)
                    .or_insert_with(|| ColorSample::from(rgb))
                    .clone()
            })
            .collect();
        debug!(
            "classification pool: {} samples, {} distinct",
            pool.len(),
            cache.len()
        );
        pool
    }

    /// Iterate the opaque pixels visited with the given stride
    fn sample_opaque<'a>(
        &self,
        buffer: &'a PixelBuffer,
        stride: usize,
    ) -> impl Iterator<Item = Rgb> + 'a {
        let threshold = self.alpha_threshold;
        buffer
            .as_bytes()
            .chunks_exact(BYTES_PER_PIXEL)
            .step_by(stride)
            .filter(move |px| px[3] >= threshold)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }
}

/// Rank colors by descending occurrence count, keeping at most `count`
///
/// Ties keep first-seen order (stable sort over insertion order).
pub fn rank_by_frequency<I>(colors: I, count: usize) -> Vec<ColorSample>
where
    I: IntoIterator<Item = Rgb>,
{
    rank_first_seen(colors, count, |rgb| *rgb)
        .into_iter()
        .map(ColorSample::from)
        .collect()
}

/// Rank samples by how often their RGB value occurs, keeping at most `count`
///
/// Each returned sample is the first occurrence of its color in `samples`.
pub fn rank_samples(samples: &[ColorSample], count: usize) -> Vec<ColorSample> {
    rank_first_seen(samples.iter(), count, |sample| sample.rgb)
        .into_iter()
        .cloned()
        .collect()
}

fn rank_first_seen<T, I, F>(items: I, count: usize, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Rgb,
{
    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        let rgb = key(&item);
        match index.get(&rgb) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(rgb, counts.len());
                counts.push((item, 1));
            }
        }
    }

    trace!("ranking {} distinct colors", counts.len());
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(count)
        .map(|(item, _)| item)
        .collect()
}
