//! Inventory records and the catalog built on [`BucketedSortedMap`].
//!
//! - [`Product`]: name, stock amount, optional price, suppliers
//! - [`Suppliers`]: the sorted supplier list owned by one product
//! - [`Inventory`]: catalog operations keyed by product name
//! - [`InventoryError`]: failures of the above
//!
//! [`BucketedSortedMap`]: crate::collections::BucketedSortedMap

mod catalog;
mod errors;
mod product;
mod suppliers;

pub use catalog::Catalog;
pub use catalog::Inventory;
pub use errors::InventoryError;
pub use product::Product;
pub use suppliers::Suppliers;
