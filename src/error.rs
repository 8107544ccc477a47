//! Error types for the smart_palette library

use thiserror::Error;

/// Result type alias for smart_palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for extraction, harmony, export and persistence operations
#[derive(Error, Debug)]
pub enum PaletteError {
    /// A hex color string did not have the `#rrggbb` shape
    #[error("Invalid hex color: {input:?}")]
    InvalidHex { input: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Export format name is not one of the recognized identifiers
    #[error("Unsupported format: {name}")]
    UnsupportedFormat { name: String },

    /// Harmony name is not one of the recognized kinds
    #[error("Unknown harmony kind: {name}")]
    UnknownHarmony { name: String },

    /// Export format is recognized but has no encoder yet
    #[error("{format} export is not yet implemented")]
    NotImplemented { format: String },

    /// Drawing surface could not be created or encoded to bytes
    #[error("Raster surface error: {message}")]
    RasterSurfaceError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Structured payload could not be serialized
    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Persisted palettes or history could not be read or written
    #[error("Storage error: {message}")]
    StorageError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a raster surface error with context
    pub fn raster<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RasterSurfaceError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a storage error with context
    pub fn storage<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::StorageError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::SerializationError {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Input errors can be fixed by the user and retried; resource
    /// failures cannot be fixed by changing the palette.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::InvalidHex { .. }
                | PaletteError::InvalidParameter { .. }
                | PaletteError::UnsupportedFormat { .. }
                | PaletteError::UnknownHarmony { .. }
                | PaletteError::NotImplemented { .. }
        )
    }

    /// Check if this error is a drawing surface failure
    pub fn is_resource_failure(&self) -> bool {
        matches!(self, PaletteError::RasterSurfaceError { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidHex { input } => {
                format!("\"{}\" is not a valid hex color. Use the form #rrggbb.", input)
            }
            PaletteError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PaletteError::UnsupportedFormat { name } => {
                format!("\"{}\" is not a supported export format.", name)
            }
            PaletteError::UnknownHarmony { name } => {
                format!("\"{}\" is not a known color harmony.", name)
            }
            PaletteError::NotImplemented { format } => {
                format!("Export to {} is not available yet. Please choose another format.", format)
            }
            PaletteError::RasterSurfaceError { .. } => {
                "Could not render the palette image. Please try again.".to_string()
            }
            PaletteError::StorageError { .. } => {
                "Could not access saved palettes.".to_string()
            }
            _ => "Palette operation failed. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = PaletteError::UnsupportedFormat {
            name: "Foo Bar".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported format: Foo Bar");
        assert!(err.is_recoverable());
        assert!(!err.is_resource_failure());
    }

    #[test]
    fn test_raster_error_is_resource_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no surface");
        let err = PaletteError::raster("Could not get drawing surface", io);
        assert!(err.is_resource_failure());
        assert!(!err.is_recoverable());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = PaletteError::invalid_parameter("ranked_stride", 0);
        assert_eq!(err.to_string(), "Invalid parameter: ranked_stride = 0");
    }
}
