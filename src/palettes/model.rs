//! Palette record handed to export and persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::harmony::{generate_harmony, HarmonyKind};
use crate::color::ColorSample;

/// A named, ordered list of colors
///
/// Color order is significant: it is the export order and the on-screen
/// index. Palettes are values; transformations return a new palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub colors: Vec<ColorSample>,
    /// Harmony or category label this palette came from, e.g. `"triadic"`
    pub harmony: String,
    /// Serialized as an RFC 3339 string, e.g. `"2024-05-01T12:30:00Z"`
    pub created_at: DateTime<Utc>,
}

impl Palette {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        colors: Vec<ColorSample>,
        harmony: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
            harmony: harmony.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a palette with a random v4 UUID
    pub fn with_generated_id(
        name: impl Into<String>,
        colors: Vec<ColorSample>,
        harmony: impl Into<String>,
    ) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, colors, harmony)
    }

    /// Default display name for a harmony or category label
    pub fn default_name(harmony: &str) -> String {
        format!("{} Palette", harmony)
    }

    /// Build a new palette from a harmony of this palette's first color
    ///
    /// Returns `None` for an empty palette. The result gets a fresh id.
    pub fn harmonized(&self, kind: HarmonyKind) -> Option<Palette> {
        let base = self.colors.first()?;
        Some(Palette::with_generated_id(
            Self::default_name(kind.name()),
            generate_harmony(base, kind),
            kind.name(),
        ))
    }

    /// Copy of this palette under a new name, same id
    pub fn renamed(&self, name: impl Into<String>) -> Palette {
        Palette {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Hex strings in palette order
    pub fn hexes(&self) -> Vec<&str> {
        self.colors.iter().map(|c| c.hex.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_harmonized_is_new_value() {
        let palette = Palette::new(
            "p1",
            "Sunset",
            vec![ColorSample::from_rgb(255, 0, 0)],
            "dominant",
        );
        let triadic = palette.harmonized(HarmonyKind::Triadic).unwrap();

        assert_eq!(triadic.len(), 3);
        assert_eq!(triadic.harmony, "triadic");
        assert_eq!(triadic.name, "triadic Palette");
        assert_ne!(triadic.id, palette.id);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_harmonized_empty_palette() {
        let palette = Palette::new("p1", "Empty", Vec::new(), "dominant");
        assert!(palette.harmonized(HarmonyKind::Analogous).is_none());
    }

    #[test]
    fn test_renamed_keeps_id_and_colors() {
        let palette = Palette::with_generated_id("A", vec![ColorSample::from_rgb(1, 2, 3)], "muted");
        let renamed = palette.renamed("B");
        assert_eq!(renamed.id, palette.id);
        assert_eq!(renamed.colors, palette.colors);
        assert_eq!(renamed.name, "B");
        assert_eq!(palette.name, "A");
    }

    #[test]
    fn test_serialized_field_names() {
        let palette = Palette::new("p1", "Ink", vec![ColorSample::from_rgb(0, 0, 0)], "dark");
        let value = serde_json::to_value(&palette).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["harmony"], "dark");
        let back: Palette = serde_json::from_value(value).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn test_created_at_is_rfc3339() {
        let palette = Palette::new("p1", "Ink", Vec::new(), "dark");
        let value = serde_json::to_value(&palette).unwrap();
        let created = value["createdAt"].as_str().unwrap();
        assert_eq!(DateTime::parse_from_rfc3339(created).unwrap(), palette.created_at);
    }

    #[test]
    fn test_reads_millisecond_timestamps() {
        let json = r#"{"id":"p1","name":"Ink","colors":[],"harmony":"dark","createdAt":"2024-05-01T12:30:00.000Z"}"#;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }
}
