//! Swatch strip rendering: SVG text and PNG/JPEG rasters
//!
//! Each color becomes one square tile, left to right in palette order.

use std::fmt::Write;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb as ImageRgb, RgbImage};
use log::debug;

use crate::color::Rgb;
use crate::palettes::Palette;
use crate::{PaletteError, Result};

/// Raster container produced by a [`RasterSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterEncoding {
    Png,
    /// Lossy, with quality 1-100
    Jpeg { quality: u8 },
}

/// Drawing surface that paints a horizontal strip of color tiles and
/// encodes it to bytes
pub trait RasterSurface {
    /// Render `colors` as `tile`-sized squares and encode the strip
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::RasterSurfaceError`] when the surface cannot
    /// be allocated or encoded.
    fn render_strip(&self, colors: &[Rgb], tile: u32, encoding: RasterEncoding) -> Result<Vec<u8>>;
}

/// In-memory surface backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSurface;

impl ImageSurface {
    fn paint(colors: &[Rgb], tile: u32) -> Result<RgbImage> {
        if colors.is_empty() || tile == 0 {
            return Err(PaletteError::RasterSurfaceError {
                message: format!(
                    "Could not get drawing surface for {} colors at tile size {}",
                    colors.len(),
                    tile
                ),
                source: None,
            });
        }
        let width = u32::try_from(colors.len())
            .ok()
            .and_then(|n| n.checked_mul(tile))
            .ok_or_else(|| PaletteError::RasterSurfaceError {
                message: format!("Swatch strip too wide: {} colors", colors.len()),
                source: None,
            })?;

        Ok(RgbImage::from_fn(width, tile, |x, _| {
            let rgb = colors[(x / tile) as usize];
            ImageRgb([rgb.r, rgb.g, rgb.b])
        }))
    }
}

impl RasterSurface for ImageSurface {
    fn render_strip(&self, colors: &[Rgb], tile: u32, encoding: RasterEncoding) -> Result<Vec<u8>> {
        let strip = Self::paint(colors, tile)?;
        let (width, height) = strip.dimensions();
        debug!("Encoding {}x{} swatch strip as {:?}", width, height, encoding);

        let mut bytes = Vec::new();
        match encoding {
            RasterEncoding::Png => PngEncoder::new(&mut bytes)
                .write_image(strip.as_raw(), width, height, ExtendedColorType::Rgb8)
                .map_err(|e| PaletteError::raster("PNG encoding failed", e))?,
            RasterEncoding::Jpeg { quality } => {
                JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100))
                    .write_image(strip.as_raw(), width, height, ExtendedColorType::Rgb8)
                    .map_err(|e| PaletteError::raster("JPEG encoding failed", e))?
            }
        }
        Ok(bytes)
    }
}

/// SVG document with one `tile`-sized `rect` per color
pub fn svg_strip(palette: &Palette, tile: u32) -> String {
    let width = palette.len() as u64 * u64::from(tile);
    let mut out = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        width, tile
    );
    for (i, color) in palette.colors.iter().enumerate() {
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" />",
            i as u64 * u64::from(tile),
            tile,
            tile,
            color.hex
        );
    }
    out.push_str("</svg>");
    out
}
