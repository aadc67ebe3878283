//! Fixed-size hash map with sorted, binary-searched buckets.
//!
//! This module provides [`BucketedSortedMap`], a mutable key-value store
//! built from a constant number of hash buckets. Each bucket keeps its
//! entries in ascending key order, so lookups inside a bucket use binary
//! search instead of a linear scan.
//!
//! # Overview
//!
//! - The bucket count is fixed at [`BUCKET_COUNT`] (a prime) and never changes
//! - A key selects its bucket through `hash(key) % BUCKET_COUNT` on an unsigned hash
//! - Inside a bucket, keys are strictly ascending with no duplicates
//! - `put` is an upsert: it replaces the value of an existing key in place
//! - `keys`, `values`, and `entries` return owned snapshots
//!
//! # Time Complexity
//!
//! | Operation  | Complexity               |
//! |------------|--------------------------|
//! | `get`      | O(log b)                 |
//! | `put`      | O(log b) search + O(b) shift |
//! | `remove`   | O(log b) search + O(b) shift |
//! | `len`      | O(1)                     |
//! | `entries`  | O(n)                     |
//!
//! where `b` is the length of the target bucket.
//!
//! # Examples
//!
//! ```rust
//! use stockroom::collections::BucketedSortedMap;
//!
//! let mut map = BucketedSortedMap::new();
//! map.put("b".to_string(), 1);
//! map.put("a".to_string(), 2);
//! map.put("a".to_string(), 3);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("a"), Ok(&3));
//! assert_eq!(map.remove("b"), Ok(1));
//! assert!(map.get("b").is_err());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::iter::FromIterator;

use thiserror::Error;

/// Number of buckets in every [`BucketedSortedMap`].
pub const BUCKET_COUNT: usize = 17;

/// Hash builder used when none is supplied.
///
/// Every hasher it builds starts from the same fixed state, so a key lands in
/// the same bucket in every process.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

// =============================================================================
// KeyNotFound
// =============================================================================

/// Returned by [`BucketedSortedMap::get`] and [`BucketedSortedMap::remove`]
/// when no entry with the requested key exists.
///
/// A failed lookup never mutates the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found in bucket {bucket}{}", empty_suffix(.bucket_was_empty))]
pub struct KeyNotFound {
    /// Index of the bucket that was searched.
    pub bucket: usize,
    /// Whether the bucket held no entries at all.
    pub bucket_was_empty: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn empty_suffix(bucket_was_empty: &bool) -> &'static str {
    if *bucket_was_empty {
        " (bucket is empty)"
    } else {
        ""
    }
}

// =============================================================================
// Bucket
// =============================================================================

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Entries sharing one bucket index, ascending by key.
#[derive(Clone)]
struct Bucket<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord, V> Bucket<K, V> {
    /// Binary search over the half-open range `[low, high)`.
    ///
    /// Returns `Ok(index)` of the equal key, or `Err(position)` where the key
    /// would have to be inserted to keep the bucket ascending. The tested
    /// midpoint is always excluded from the next range, so the range shrinks
    /// on every step.
    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut low = 0;
        let mut high = self.entries.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match self.entries[middle].key.borrow().cmp(key) {
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
                Ordering::Equal => return Ok(middle),
            }
        }
        Err(low)
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key)
            .ok()
            .map(|index| &self.entries[index].value)
    }

    /// Returns `true` when a new entry was inserted.
    fn upsert(&mut self, key: K, value: V) -> bool {
        let inserted = match self.search(&key) {
            Ok(index) => {
                self.entries[index].value = value;
                false
            }
            Err(position) => {
                self.entries.insert(position, Entry { key, value });
                true
            }
        };
        self.debug_assert_sorted();
        inserted
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.search(key).ok()?;
        let entry = self.entries.remove(index);
        self.debug_assert_sorted();
        Some(entry.value)
    }

    #[inline]
    fn debug_assert_sorted(&self) {
        #[cfg(debug_assertions)]
        debug_assert!(
            self.entries
                .windows(2)
                .all(|pair| pair[0].key < pair[1].key),
            "bucket entries must be strictly ascending by key"
        );
    }
}

// =============================================================================
// BucketedSortedMap Definition
// =============================================================================

/// A hash map with a fixed number of sorted buckets.
///
/// Keys must be both hashable (to choose a bucket) and totally ordered (to
/// keep the bucket sorted). Lookups accept any borrowed form of the key, so a
/// `BucketedSortedMap<String, _>` can be queried with `&str`.
///
/// The map is single-threaded; callers sharing it across threads must guard
/// it with their own lock.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash` and `Ord`.
/// * `V` - The value type.
/// * `S` - The hash builder. Defaults to [`DefaultHashBuilder`].
///
/// # Examples
///
/// ```rust
/// use stockroom::collections::BucketedSortedMap;
///
/// let map: BucketedSortedMap<String, u32> = [("apple".to_string(), 3)].into_iter().collect();
/// assert_eq!(map.get("apple"), Ok(&3));
/// ```
#[derive(Clone)]
pub struct BucketedSortedMap<K, V, S = DefaultHashBuilder> {
    buckets: [Bucket<K, V>; BUCKET_COUNT],
    length: usize,
    hash_builder: S,
}

impl<K, V> BucketedSortedMap<K, V> {
    /// Creates an empty map with every bucket present and empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockroom::collections::BucketedSortedMap;
    ///
    /// let map: BucketedSortedMap<String, i32> = BucketedSortedMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 17);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K, V, S> BucketedSortedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            buckets: std::array::from_fn(|_| Bucket::new()),
            length: 0,
            hash_builder,
        }
    }

    /// Returns the number of entries across all buckets.
    ///
    /// # Complexity
    ///
    /// O(1); backed by a counter maintained by `put` and `remove`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of buckets, which is always [`BUCKET_COUNT`].
    #[inline]
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        BUCKET_COUNT
    }

    /// Removes every entry, keeping all buckets.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.entries.clear();
        }
        self.length = 0;
    }

    /// Returns the hash builder used to select buckets.
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns a borrowing iterator over all entries.
    ///
    /// Buckets are visited from index 0 to [`BUCKET_COUNT`] - 1, and the
    /// entries of each bucket in ascending key order.
    #[must_use]
    pub fn iter(&self) -> BucketedSortedMapIterator<'_, K, V> {
        BucketedSortedMapIterator {
            buckets: self.buckets.iter(),
            current: std::slice::Iter::default(),
            remaining: self.length,
        }
    }
}

impl<K, V, S> BucketedSortedMap<K, V, S>
where
    K: Hash + Ord,
    S: BuildHasher,
{
    /// Returns the index of the bucket that `key` belongs to.
    ///
    /// The result is always in `[0, BUCKET_COUNT)` because the reduction is
    /// performed on the unsigned 64-bit hash.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % BUCKET_COUNT as u64) as usize
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when the target bucket is empty or holds no
    /// entry comparing equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockroom::collections::BucketedSortedMap;
    ///
    /// let mut map = BucketedSortedMap::new();
    /// map.put("key".to_string(), 42);
    /// assert_eq!(map.get("key"), Ok(&42));
    /// assert!(map.get("other").is_err());
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &self.buckets[index];
        bucket.get(key).ok_or(KeyNotFound {
            bucket: index,
            bucket_was_empty: bucket.is_empty(),
        })
    }

    /// Returns `true` if the map holds an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Inserts `value` under `key`, replacing the value of an existing entry.
    ///
    /// A replaced entry keeps its position in the bucket. A new entry is
    /// placed where it keeps the bucket ascending, and the size grows by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockroom::collections::BucketedSortedMap;
    ///
    /// let mut map = BucketedSortedMap::new();
    /// map.put("a".to_string(), 1);
    /// map.put("a".to_string(), 2);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("a"), Ok(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) {
        let index = self.bucket_index(&key);
        if self.buckets[index].upsert(key, value) {
            self.length += 1;
        }
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when no entry matches; the map is left unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let bucket_was_empty = bucket.is_empty();
        let value = bucket.remove(key).ok_or(KeyNotFound {
            bucket: index,
            bucket_was_empty,
        })?;
        self.length -= 1;
        Ok(value)
    }
}

impl<K: Clone, V: Clone, S> BucketedSortedMap<K, V, S> {
    /// Returns a snapshot of every key in traversal order.
    ///
    /// Later mutation of the map does not affect the returned vector.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns a snapshot of every value in traversal order.
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns a snapshot of every `(key, value)` pair in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stockroom::collections::BucketedSortedMap;
    ///
    /// let mut map = BucketedSortedMap::new();
    /// map.put(1, "one");
    /// let snapshot = map.entries();
    /// map.put(2, "two");
    /// assert_eq!(snapshot, vec![(1, "one")]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over a [`BucketedSortedMap`].
///
/// Yields entries bucket by bucket, ascending by key within each bucket.
pub struct BucketedSortedMapIterator<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    current: std::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for BucketedSortedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.current = self.buckets.next()?.entries.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for BucketedSortedMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, K, V, S> IntoIterator for &'a BucketedSortedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = BucketedSortedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Traits
// =============================================================================

impl<K, V, S: Default> Default for BucketedSortedMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for BucketedSortedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for BucketedSortedMap<K, V, S>
where
    K: Hash + Ord,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_ok_and(|found| found == value))
    }
}

impl<K, V, S> Eq for BucketedSortedMap<K, V, S>
where
    K: Hash + Ord,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> FromIterator<(K, V)> for BucketedSortedMap<K, V, S>
where
    K: Hash + Ord,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for BucketedSortedMap<K, V, S>
where
    K: Hash + Ord,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for BucketedSortedMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct BucketedSortedMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<fn() -> BucketedSortedMap<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<K, V, S> BucketedSortedMapVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for BucketedSortedMapVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Ord,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = BucketedSortedMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Replaying put rebuilds bucket order whatever order the input has.
        let mut map = BucketedSortedMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for BucketedSortedMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Ord,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(BucketedSortedMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
