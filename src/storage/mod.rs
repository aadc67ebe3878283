//! Whole-catalog persistence.
//!
//! The catalog is saved and loaded as a single snapshot; there is no
//! incremental format. Stores implement [`CatalogStore`]:
//!
//! - [`JsonFileStore`]: JSON snapshot in one file, replaced atomically on save
//! - [`InMemoryStore`]: serialized snapshot kept in memory
//!
//! # Examples
//!
//! ```rust
//! use stockroom::inventory::{Catalog, Product};
//! use stockroom::storage::{CatalogStore, InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! assert!(store.load().unwrap().is_none());
//!
//! let mut catalog = Catalog::new();
//! catalog.put("widget".to_string(), Product::new("widget"));
//! store.save(&catalog).unwrap();
//!
//! assert_eq!(store.load().unwrap(), Some(catalog));
//! ```

mod errors;
mod in_memory;
mod json_file;

pub use errors::StorageError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use crate::inventory::Catalog;

/// Loads and saves complete catalog snapshots.
pub trait CatalogStore {
    /// Returns the stored catalog, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Catalog>, StorageError>;

    /// Replaces the stored snapshot with `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot cannot be encoded or written.
    fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

/// Checks that every entry of a loaded catalog is keyed by its product's name.
///
/// # Errors
///
/// Returns [`StorageError::NameMismatch`] for the first entry in traversal
/// order whose key differs from [`Product::name`](crate::inventory::Product::name).
pub fn verify_catalog(catalog: &Catalog) -> Result<(), StorageError> {
    match catalog.iter().find(|(key, product)| key.as_str() != product.name()) {
        Some((key, product)) => Err(StorageError::NameMismatch {
            key: key.clone(),
            name: product.name().to_string(),
        }),
        None => Ok(()),
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn load(&self) -> Result<Option<Catalog>, StorageError> {
        (**self).load()
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        (**self).save(catalog)
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for Box<T> {
    fn load(&self) -> Result<Option<Catalog>, StorageError> {
        (**self).load()
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        (**self).save(catalog)
    }
}
