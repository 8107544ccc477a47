//! Image decoding into RGBA pixel buffers
//!
//! This module is the decode capability the extraction pipeline depends on.
//! Every supported format is decoded by the `image` crate and converted to
//! straight-alpha RGBA8, row-major, so transparent regions survive into
//! sampling.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, GIF (first frame), WebP, TIFF, BMP

use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::debug;

use crate::color::PixelBuffer;
use crate::error::{PaletteError, Result};

/// Source image formats accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    /// First frame only
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl SourceFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<SourceFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            "gif" => Some(SourceFormat::Gif),
            "webp" => Some(SourceFormat::WebP),
            "tiff" | "tif" => Some(SourceFormat::Tiff),
            "bmp" => Some(SourceFormat::Bmp),
            _ => None,
        }
    }

    fn decoder_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
            SourceFormat::Png => image::ImageFormat::Png,
            SourceFormat::Gif => image::ImageFormat::Gif,
            SourceFormat::WebP => image::ImageFormat::WebP,
            SourceFormat::Tiff => image::ImageFormat::Tiff,
            SourceFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Load an image from disk as an RGBA pixel buffer
///
/// # Errors
///
/// Returns [`PaletteError::ImageLoadError`] if:
/// - The extension is not a supported format
/// - The file cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use smart_palette::image_loader::load_pixel_buffer;
/// use std::path::Path;
///
/// let pixels = load_pixel_buffer(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", pixels.width(), pixels.height());
/// # Ok::<(), smart_palette::PaletteError>(())
/// ```
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let format = SourceFormat::from_extension(path).ok_or_else(|| PaletteError::ImageLoadError {
        message: format!("Unknown image format for file: {}", path.display()),
        source: None,
    })?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        PaletteError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format.decoder_format());

    let img = reader.decode().map_err(|e| {
        PaletteError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;
    debug!("Decoded {} as {:?}", path.display(), format);
    into_pixel_buffer(img)
}

/// Decode in-memory image bytes, guessing the format from the content
///
/// # Errors
///
/// Returns [`PaletteError::ImageLoadError`] if the bytes are not a
/// decodable image.
pub fn decode_pixel_buffer(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| PaletteError::image_load("Failed to decode image bytes", e))?;
    into_pixel_buffer(img)
}

fn into_pixel_buffer(img: DynamicImage) -> Result<PixelBuffer> {
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
