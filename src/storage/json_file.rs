//! JSON snapshot file store.

use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{CatalogStore, StorageError};
use crate::inventory::Catalog;

/// Stores the catalog as one JSON object mapping product names to products.
///
/// A save writes a sibling temporary file first and renames it over the
/// target, so an interrupted save never leaves a truncated snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Option<Catalog>, StorageError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot found");
                return Ok(None);
            }
            Err(error) => return Err(StorageError::io(&self.path, error)),
        };
        let catalog: Catalog = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), products = catalog.len(), "snapshot loaded");
        Ok(Some(catalog))
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let temporary = self.temporary_path();
        let file = fs::File::create(&temporary).map_err(|error| StorageError::io(&temporary, error))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, catalog)?;
        writer
            .flush()
            .map_err(|error| StorageError::io(&temporary, error))?;
        fs::rename(&temporary, &self.path).map_err(|error| StorageError::io(&self.path, error))?;
        tracing::debug!(path = %self.path.display(), products = catalog.len(), "snapshot saved");
        Ok(())
    }
}
