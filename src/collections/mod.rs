//! Mutable associative containers.
//!
//! - [`BucketedSortedMap`]: fixed-size hash map whose buckets are kept
//!   sorted and searched with binary search
//!
//! # Examples
//!
//! ```rust
//! use stockroom::collections::{BucketedSortedMap, BUCKET_COUNT};
//!
//! let mut map = BucketedSortedMap::new();
//! map.put("widget".to_string(), 10);
//!
//! assert!(map.bucket_index("widget") < BUCKET_COUNT);
//! assert_eq!(map.get("widget"), Ok(&10));
//! ```

mod bucketed_sorted_map;

pub use bucketed_sorted_map::BUCKET_COUNT;
pub use bucketed_sorted_map::BucketedSortedMap;
pub use bucketed_sorted_map::BucketedSortedMapIterator;
pub use bucketed_sorted_map::DefaultHashBuilder;
pub use bucketed_sorted_map::KeyNotFound;
