//! Recently analyzed images, newest first

use std::path::Path;

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{read_json_file, remove_file_if_exists, write_json_file};
use crate::constants::history::MAX_ITEMS;
use crate::Result;

/// One analyzed image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHistoryItem {
    pub id: String,
    pub name: String,
    /// RFC 3339 when serialized
    pub timestamp: DateTime<Utc>,
    /// Number of non-empty palettes produced for the image
    pub palette_count: usize,
    /// Hex strings of the leading dominant colors
    pub dominant_colors: Vec<String>,
    /// Encoded thumbnail or source image, e.g. base64 text
    pub image_data: String,
}

/// Bounded image history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHistory {
    items: Vec<ImageHistoryItem>,
}

impl ImageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image at the front, dropping the oldest beyond the limit
    pub fn record(
        &mut self,
        name: impl Into<String>,
        palette_count: usize,
        dominant_colors: Vec<String>,
        image_data: impl Into<String>,
    ) -> &ImageHistoryItem {
        let item = ImageHistoryItem {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            timestamp: Utc::now(),
            palette_count,
            dominant_colors,
            image_data: image_data.into(),
        };
        self.items.insert(0, item);
        self.items.truncate(MAX_ITEMS);
        &self.items[0]
    }

    /// Remove by id, returning whether an item was dropped
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ImageHistoryItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ImageHistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Load history from a JSON file
    ///
    /// A missing or unreadable file yields an empty history; history is a
    /// convenience and never blocks analysis.
    pub fn load(path: &Path) -> Self {
        match read_json_file::<Self>(path) {
            Ok(Some(mut history)) => {
                history.items.truncate(MAX_ITEMS);
                history
            }
            Ok(None) => Self::new(),
            Err(e) => {
                warn!("Error reading image history: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, self)
    }

    /// Delete the history file
    pub fn clear_file(path: &Path) -> Result<()> {
        remove_file_if_exists(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_newest_first_and_bounded() {
        let mut history = ImageHistory::new();
        for i in 0..25 {
            history.record(format!("img-{}", i), 3, vec!["#000000".into()], "");
        }
        assert_eq!(history.len(), 20);
        assert_eq!(history.items()[0].name, "img-24");
        assert_eq!(history.items()[19].name, "img-5");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut history = ImageHistory::new();
        let id = history.record("a", 1, Vec::new(), "data").id.clone();
        history.record("b", 2, Vec::new(), "data");

        assert!(history.remove(&id));
        assert!(!history.remove(&id));
        assert!(history.get(&id).is_none());
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("smart-palette-history-{}.json", Uuid::new_v4()));
        let mut history = ImageHistory::new();
        history.record("sunset.png", 5, vec!["#ff8800".into(), "#221100".into()], "aGVsbG8=");
        history.save(&path).unwrap();

        let loaded = ImageHistory::load(&path);
        assert_eq!(loaded, history);

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"paletteCount\": 5"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let stamp = value[0]["timestamp"].as_str().unwrap();
        assert_eq!(DateTime::parse_from_rfc3339(stamp).unwrap(), history.items()[0].timestamp);
        assert!(json.contains("\"dominantColors\""));

        ImageHistory::clear_file(&path).unwrap();
        assert!(ImageHistory::load(&path).is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let path = std::env::temp_dir().join(format!("smart-palette-history-{}.json", Uuid::new_v4()));
        std::fs::write(&path, "{oops").unwrap();
        assert!(ImageHistory::load(&path).is_empty());
        std::fs::remove_file(&path).unwrap();
    }
}
