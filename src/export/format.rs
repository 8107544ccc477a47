//! Export format identifiers and delivery metadata
//!
//! The set of formats is closed. Each variant maps to exactly one encoder,
//! one MIME type and one file extension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PaletteError;

/// Supported export formats, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    AdobeAse,
    AdobeAco,
    FigmaJson,
    SketchPalette,
    GimpGpl,
    CorelDrawCpl,
    Procreate,
    AdobeIllustratorAi,
    CssCustomProperties,
    ScssVariables,
    TailwindConfig,
    BootstrapTheme,
    MaterialDesignJson,
    CssClasses,
    JsonObject,
    JavaScriptArray,
    PythonDictionary,
    XmlFormat,
    PantoneColorList,
    CmykValuesCsv,
    LabColorValues,
    PrintReadyPdf,
    ExcelSpreadsheet,
    CsvData,
    PlainTextList,
    PngImage,
    JpegImage,
    SvgImage,
}

/// Menu groups for export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatGroup {
    DesignSoftware,
    WebDevelopment,
    ProgrammingApi,
    PrintProduction,
    DataDocumentation,
    ImageExports,
}

impl FormatGroup {
    pub fn label(self) -> &'static str {
        match self {
            FormatGroup::DesignSoftware => "Design Software",
            FormatGroup::WebDevelopment => "Web Development",
            FormatGroup::ProgrammingApi => "Programming & API",
            FormatGroup::PrintProduction => "Print & Production",
            FormatGroup::DataDocumentation => "Data & Documentation",
            FormatGroup::ImageExports => "Image Exports",
        }
    }
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 28] = [
        ExportFormat::AdobeAse,
        ExportFormat::AdobeAco,
        ExportFormat::FigmaJson,
        ExportFormat::SketchPalette,
        ExportFormat::GimpGpl,
        ExportFormat::CorelDrawCpl,
        ExportFormat::Procreate,
        ExportFormat::AdobeIllustratorAi,
        ExportFormat::CssCustomProperties,
        ExportFormat::ScssVariables,
        ExportFormat::TailwindConfig,
        ExportFormat::BootstrapTheme,
        ExportFormat::MaterialDesignJson,
        ExportFormat::CssClasses,
        ExportFormat::JsonObject,
        ExportFormat::JavaScriptArray,
        ExportFormat::PythonDictionary,
        ExportFormat::XmlFormat,
        ExportFormat::PantoneColorList,
        ExportFormat::CmykValuesCsv,
        ExportFormat::LabColorValues,
        ExportFormat::PrintReadyPdf,
        ExportFormat::ExcelSpreadsheet,
        ExportFormat::CsvData,
        ExportFormat::PlainTextList,
        ExportFormat::PngImage,
        ExportFormat::JpegImage,
        ExportFormat::SvgImage,
    ];

    /// Exact display name, also the recognized identifier
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::AdobeAse => "Adobe ASE",
            ExportFormat::AdobeAco => "Adobe ACO",
            ExportFormat::FigmaJson => "Figma JSON",
            ExportFormat::SketchPalette => "Sketch Palette",
            ExportFormat::GimpGpl => "GIMP GPL",
            ExportFormat::CorelDrawCpl => "CorelDRAW CPL",
            ExportFormat::Procreate => "Procreate",
            ExportFormat::AdobeIllustratorAi => "Adobe Illustrator AI",
            ExportFormat::CssCustomProperties => "CSS Custom Properties",
            ExportFormat::ScssVariables => "SCSS/SASS Variables",
            ExportFormat::TailwindConfig => "Tailwind CSS Config",
            ExportFormat::BootstrapTheme => "Bootstrap Theme",
            ExportFormat::MaterialDesignJson => "Material Design JSON",
            ExportFormat::CssClasses => "CSS Classes",
            ExportFormat::JsonObject => "JSON Object",
            ExportFormat::JavaScriptArray => "JavaScript Array",
            ExportFormat::PythonDictionary => "Python Dictionary",
            ExportFormat::XmlFormat => "XML Format",
            ExportFormat::PantoneColorList => "Pantone Color List",
            ExportFormat::CmykValuesCsv => "CMYK Values CSV",
            ExportFormat::LabColorValues => "LAB Color Values",
            ExportFormat::PrintReadyPdf => "Print-Ready PDF",
            ExportFormat::ExcelSpreadsheet => "Excel Spreadsheet",
            ExportFormat::CsvData => "CSV Data",
            ExportFormat::PlainTextList => "Plain Text List",
            ExportFormat::PngImage => "PNG Image",
            ExportFormat::JpegImage => "JPEG Image",
            ExportFormat::SvgImage => "SVG Image",
        }
    }

    pub fn group(self) -> FormatGroup {
        use ExportFormat::*;
        match self {
            AdobeAse | AdobeAco | FigmaJson | SketchPalette | GimpGpl | CorelDrawCpl
            | Procreate | AdobeIllustratorAi => FormatGroup::DesignSoftware,
            CssCustomProperties | ScssVariables | TailwindConfig | BootstrapTheme
            | MaterialDesignJson | CssClasses => FormatGroup::WebDevelopment,
            JsonObject | JavaScriptArray | PythonDictionary | XmlFormat => {
                FormatGroup::ProgrammingApi
            }
            PantoneColorList | CmykValuesCsv | LabColorValues | PrintReadyPdf => {
                FormatGroup::PrintProduction
            }
            ExcelSpreadsheet | CsvData | PlainTextList => FormatGroup::DataDocumentation,
            PngImage | JpegImage | SvgImage => FormatGroup::ImageExports,
        }
    }

    pub fn mime_type(self) -> &'static str {
        use ExportFormat::*;
        match self {
            AdobeAse | AdobeAco | CorelDrawCpl | Procreate => "application/octet-stream",
            AdobeIllustratorAi => "application/postscript",
            FigmaJson | SketchPalette | MaterialDesignJson | JsonObject => "application/json",
            GimpGpl => "application/x-gimp-palette",
            CssCustomProperties | CssClasses => "text/css",
            ScssVariables | BootstrapTheme => "text/x-scss",
            TailwindConfig | JavaScriptArray => "application/javascript",
            PythonDictionary => "text/x-python",
            XmlFormat => "application/xml",
            CmykValuesCsv | LabColorValues | ExcelSpreadsheet | CsvData => "text/csv",
            PantoneColorList | PlainTextList => "text/plain",
            PrintReadyPdf => "application/pdf",
            PngImage => "image/png",
            JpegImage => "image/jpeg",
            SvgImage => "image/svg+xml",
        }
    }

    pub fn extension(self) -> &'static str {
        use ExportFormat::*;
        match self {
            AdobeAse => "ase",
            AdobeAco => "aco",
            FigmaJson | MaterialDesignJson | JsonObject => "json",
            SketchPalette => "sketchpalette",
            GimpGpl => "gpl",
            CorelDrawCpl => "cpl",
            Procreate => "swatches",
            AdobeIllustratorAi => "ai",
            CssCustomProperties | CssClasses => "css",
            ScssVariables | BootstrapTheme => "scss",
            TailwindConfig | JavaScriptArray => "js",
            PythonDictionary => "py",
            XmlFormat => "xml",
            CmykValuesCsv | LabColorValues | ExcelSpreadsheet | CsvData => "csv",
            PantoneColorList | PlainTextList => "txt",
            PrintReadyPdf => "pdf",
            PngImage => "png",
            JpegImage => "jpeg",
            SvgImage => "svg",
        }
    }

    /// Whether the encoder produces bytes rather than UTF-8 text
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            ExportFormat::AdobeAse
                | ExportFormat::AdobeAco
                | ExportFormat::PngImage
                | ExportFormat::JpegImage
        )
    }

    /// Whether an encoder exists for this format
    pub fn is_implemented(self) -> bool {
        !matches!(
            self,
            ExportFormat::CorelDrawCpl
                | ExportFormat::Procreate
                | ExportFormat::AdobeIllustratorAi
                | ExportFormat::PantoneColorList
                | ExportFormat::PrintReadyPdf
        )
    }

    /// Whether encoding needs a raster drawing surface
    pub fn needs_surface(self) -> bool {
        matches!(self, ExportFormat::PngImage | ExportFormat::JpegImage)
    }

    /// Download file name for a palette: whitespace runs become `-`,
    /// lowercased, plus this format's extension
    pub fn file_name(self, palette_name: &str) -> String {
        let stem = palette_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        let stem = if stem.is_empty() { "palette".to_string() } else { stem };
        format!("{}.{}", stem, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    /// Exact, case-sensitive match against [`ExportFormat::name`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| PaletteError::UnsupportedFormat { name: s.to_string() })
    }
}
