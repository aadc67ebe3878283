//! # stockroom
//!
//! A small inventory-tracking tool built on a fixed-size, sorted-bucket
//! hash map.
//!
//! ## Overview
//!
//! - **Collections**: [`BucketedSortedMap`](collections::BucketedSortedMap), a hash map
//!   with a constant number of buckets, each kept sorted and binary-searched
//! - **Inventory**: products with stock, price, and suppliers, and the catalog operations on them
//! - **Commands**: line parser and dispatcher for the interactive tool
//! - **Storage**: whole-catalog JSON snapshots
//! - **Session**: the load, run, save loop without process-wide state
//!
//! ## Feature Flags
//!
//! - `serde`: serialization of the map and records, plus the `storage` and
//!   `session` modules (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use stockroom::prelude::*;
//!
//! let mut inventory = Inventory::new();
//! inventory.add_product("widget").unwrap();
//! inventory.add_supplier("widget", "Acme").unwrap();
//!
//! let product = inventory.product("widget").unwrap();
//! assert_eq!(product.suppliers().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use stockroom::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::command::*;
    pub use crate::inventory::*;

    #[cfg(feature = "serde")]
    pub use crate::session::*;
    #[cfg(feature = "serde")]
    pub use crate::storage::*;
}

pub mod collections;
pub mod command;
pub mod config;
pub mod inventory;

#[cfg(feature = "serde")]
pub mod session;

#[cfg(feature = "serde")]
pub mod storage;
