//! Persistence for saved palettes and image history
//!
//! The core never touches storage on its own. Callers inject a
//! [`PaletteStore`]; [`MemoryPaletteStore`] serves tests and short-lived
//! sessions, [`JsonFilePaletteStore`] keeps a JSON array on disk.

pub mod history;

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use history::{ImageHistory, ImageHistoryItem};

use crate::palettes::Palette;
use crate::{PaletteError, Result};

/// Keyed palette collection, newest first
pub trait PaletteStore {
    /// All saved palettes in stored order
    fn list(&self) -> Result<Vec<Palette>>;

    /// Replace the palette with the same id in place, or insert at the front
    fn upsert(&mut self, palette: Palette) -> Result<()>;

    /// Remove the palette with `id`; unknown ids are ignored
    fn remove(&mut self, id: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

fn upsert_into(palettes: &mut Vec<Palette>, palette: Palette) {
    match palettes.iter_mut().find(|p| p.id == palette.id) {
        Some(existing) => *existing = palette,
        None => palettes.insert(0, palette),
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryPaletteStore {
    palettes: Vec<Palette>,
}

impl MemoryPaletteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaletteStore for MemoryPaletteStore {
    fn list(&self) -> Result<Vec<Palette>> {
        Ok(self.palettes.clone())
    }

    fn upsert(&mut self, palette: Palette) -> Result<()> {
        upsert_into(&mut self.palettes, palette);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.palettes.retain(|p| p.id != id);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.palettes.clear();
        Ok(())
    }
}

/// Store backed by a single JSON array file
///
/// Every operation reads and rewrites the whole file. A missing file is an
/// empty store.
#[derive(Debug, Clone)]
pub struct JsonFilePaletteStore {
    path: PathBuf,
}

impl JsonFilePaletteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, palettes: &[Palette]) -> Result<()> {
        write_json_file(&self.path, palettes)
    }
}

impl PaletteStore for JsonFilePaletteStore {
    fn list(&self) -> Result<Vec<Palette>> {
        Ok(read_json_file(&self.path)?.unwrap_or_default())
    }

    fn upsert(&mut self, palette: Palette) -> Result<()> {
        let mut palettes = self.list()?;
        upsert_into(&mut palettes, palette);
        self.write(&palettes)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let mut palettes = self.list()?;
        palettes.retain(|p| p.id != id);
        self.write(&palettes)
    }

    fn clear(&mut self) -> Result<()> {
        remove_file_if_exists(&self.path)
    }
}

/// Read a JSON document, `Ok(None)` if the file does not exist
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PaletteError::storage(
                format!("Failed to open {}", path.display()),
                e,
            ))
        }
    };
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        PaletteError::serialization(format!("Invalid JSON in {}", path.display()), e)
    })?;
    Ok(Some(value))
}

/// Write a pretty JSON document, creating parent directories as needed
pub(crate) fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PaletteError::storage(format!("Failed to create {}", parent.display()), e)
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        PaletteError::storage(format!("Failed to create {}", path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        PaletteError::serialization(format!("Failed to write {}", path.display()), e)
    })?;
    writer.flush().map_err(|e| {
        PaletteError::storage(format!("Failed to flush {}", path.display()), e)
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}

pub(crate) fn remove_file_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PaletteError::storage(
            format!("Failed to remove {}", path.display()),
            e,
        )),
    }
}
