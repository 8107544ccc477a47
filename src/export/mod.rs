//! Palette export codec
//!
//! Turns a [`Palette`] into one of the [`ExportFormat`] payloads. Dispatch
//! is over a closed enum, so every format has exactly one encoder; formats
//! without an encoder fail with [`PaletteError::NotImplemented`].
//!
//! ```
//! use smart_palette::{export_palette, ColorSample, ExportFormat, Palette};
//!
//! let palette = Palette::new("p1", "Ink", vec![ColorSample::from_rgb(51, 102, 153)], "dominant");
//! let payload = export_palette(&palette, ExportFormat::CsvData)?;
//! assert_eq!(payload.as_text(), Some("Hex,R,G,B,Name\n#336699,51,102,153,\n"));
//! # Ok::<(), smart_palette::PaletteError>(())
//! ```

pub mod format;
pub mod raster;
pub mod structured;
pub mod swatch;
pub mod text;

use log::{debug, warn};

pub use format::{ExportFormat, FormatGroup};
pub use raster::{ImageSurface, RasterEncoding, RasterSurface};

use crate::color::Rgb;
use crate::config::ExportConfig;
use crate::palettes::Palette;
use crate::{PaletteError, Result};

/// Encoded bytes or text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportData {
    Text(String),
    Binary(Vec<u8>),
}

/// Encoder output with its delivery metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub format: ExportFormat,
    pub data: ExportData,
}

impl ExportPayload {
    fn text(format: ExportFormat, text: String) -> Self {
        Self {
            format,
            data: ExportData::Text(text),
        }
    }

    fn binary(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            data: ExportData::Binary(bytes),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// Text content, `None` for binary formats
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            ExportData::Text(text) => Some(text),
            ExportData::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            ExportData::Text(text) => text.as_bytes(),
            ExportData::Binary(bytes) => bytes,
        }
    }

    /// Owned bytes, UTF-8 for text formats
    pub fn into_bytes(self) -> Vec<u8> {
        match self.data {
            ExportData::Text(text) => text.into_bytes(),
            ExportData::Binary(bytes) => bytes,
        }
    }

    /// Suggested download file name for `palette_name`
    pub fn file_name(&self, palette_name: &str) -> String {
        self.format.file_name(palette_name)
    }
}

/// Export codec bound to a drawing surface and rendering settings
pub struct PaletteExporter<S: RasterSurface = ImageSurface> {
    surface: S,
    config: ExportConfig,
}

impl PaletteExporter<ImageSurface> {
    pub fn new() -> Self {
        Self::with_surface(ImageSurface, ExportConfig::default())
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self::with_surface(ImageSurface, config)
    }
}

impl Default for PaletteExporter<ImageSurface> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RasterSurface> PaletteExporter<S> {
    pub fn with_surface(surface: S, config: ExportConfig) -> Self {
        Self { surface, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Encode `palette` in `format`
    ///
    /// # Errors
    ///
    /// - [`PaletteError::NotImplemented`] for formats without an encoder
    /// - [`PaletteError::InvalidParameter`] when an ASE name or ACO color
    ///   count overflows its binary field
    /// - [`PaletteError::RasterSurfaceError`] when a PNG/JPEG strip cannot
    ///   be drawn, including for an empty palette
    /// - [`PaletteError::SerializationError`] if a JSON encoder fails
    pub fn export(&self, palette: &Palette, format: ExportFormat) -> Result<ExportPayload> {
        use ExportFormat::*;

        debug!(
            "Exporting palette '{}' ({} colors) as {}",
            palette.name,
            palette.len(),
            format
        );

        let payload = match format {
            AdobeAse => ExportPayload::binary(format, swatch::adobe_ase(palette)?),
            AdobeAco => ExportPayload::binary(format, swatch::adobe_aco(palette)?),
            FigmaJson => ExportPayload::text(format, structured::figma_json(palette)?),
            SketchPalette => ExportPayload::text(format, structured::sketch_palette(palette)?),
            GimpGpl => ExportPayload::text(format, text::gimp_gpl(palette)),
            CssCustomProperties => ExportPayload::text(format, text::css_custom_properties(palette)),
            ScssVariables => ExportPayload::text(format, text::scss_variables(palette)),
            TailwindConfig => ExportPayload::text(format, text::tailwind_config(palette)),
            BootstrapTheme => ExportPayload::text(format, text::bootstrap_theme(palette)),
            MaterialDesignJson => ExportPayload::text(format, structured::material_json(palette)?),
            CssClasses => ExportPayload::text(format, text::css_classes(palette)),
            JsonObject => ExportPayload::text(format, structured::json_object(palette)?),
            JavaScriptArray => ExportPayload::text(format, structured::javascript_array(palette)?),
            PythonDictionary => ExportPayload::text(format, text::python_dictionary(palette)),
            XmlFormat => ExportPayload::text(format, text::xml(palette)),
            CmykValuesCsv => ExportPayload::text(format, text::cmyk_csv(palette)),
            LabColorValues => ExportPayload::text(format, text::lab_values(palette)),
            ExcelSpreadsheet | CsvData => ExportPayload::text(format, text::csv_data(palette)),
            PlainTextList => ExportPayload::text(format, text::plain_text(palette)),
            SvgImage => {
                ExportPayload::text(format, raster::svg_strip(palette, self.config.swatch_size))
            }
            format if format.needs_surface() => {
                let encoding = match format {
                    JpegImage => RasterEncoding::Jpeg {
                        quality: self.config.jpeg_quality,
                    },
                    _ => RasterEncoding::Png,
                };
                ExportPayload::binary(format, self.raster(palette, encoding)?)
            }
            _ => {
                warn!("Export requested for unimplemented format {}", format);
                return Err(PaletteError::NotImplemented {
                    format: format.name().to_string(),
                });
            }
        };
        Ok(payload)
    }

    /// Encode by display name, e.g. `"GIMP GPL"`
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnsupportedFormat`] when `name` is not an
    /// exact format name, otherwise as [`PaletteExporter::export`].
    pub fn export_named(&self, palette: &Palette, name: &str) -> Result<ExportPayload> {
        let format: ExportFormat = name.parse()?;
        self.export(palette, format)
    }

    fn raster(&self, palette: &Palette, encoding: RasterEncoding) -> Result<Vec<u8>> {
        let colors: Vec<Rgb> = palette.colors.iter().map(|c| c.rgb).collect();
        self.surface
            .render_strip(&colors, self.config.swatch_size, encoding)
    }
}

/// Encode with the default in-memory surface and settings
pub fn export_palette(palette: &Palette, format: ExportFormat) -> Result<ExportPayload> {
    PaletteExporter::new().export(palette, format)
}

/// Encode by display name with the default surface and settings
pub fn export_palette_named(palette: &Palette, name: &str) -> Result<ExportPayload> {
    PaletteExporter::new().export_named(palette, name)
}
