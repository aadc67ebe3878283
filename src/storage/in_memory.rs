//! In-memory snapshot store.

use std::cell::{Cell, RefCell};

use super::{CatalogStore, StorageError};
use crate::inventory::Catalog;

/// Keeps the most recent snapshot as a JSON string.
///
/// The snapshot goes through the same encoding as [`JsonFileStore`](super::JsonFileStore),
/// so a loaded catalog never shares state with the one that was saved.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl InMemoryStore {
    /// Creates a store holding no snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] if the catalog cannot be encoded.
    pub fn with_catalog(catalog: &Catalog) -> Result<Self, StorageError> {
        let store = Self::new();
        store.save(catalog)?;
        store.saves.set(0);
        Ok(store)
    }

    /// Returns the raw JSON of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }

    /// Returns how many times [`CatalogStore::save`] has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Option<Catalog>, StorageError> {
        self.snapshot
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(catalog)?;
        *self.snapshot.borrow_mut() = Some(encoded);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
