//! Property-based tests for BucketedSortedMap.
//!
//! Each property is checked against `std::collections::BTreeMap` as a model.

use std::collections::BTreeMap;

use proptest::prelude::*;
use stockroom::collections::{BUCKET_COUNT, BucketedSortedMap};

#[derive(Debug, Clone)]
enum Operation {
    Put(u16, i32),
    Remove(u16),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0u16..64, any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
        1 => (0u16..64).prop_map(Operation::Remove),
    ]
}

fn apply(
    operations: &[Operation],
) -> (BucketedSortedMap<u16, i32>, BTreeMap<u16, i32>) {
    let mut map = BucketedSortedMap::new();
    let mut model = BTreeMap::new();
    for operation in operations {
        match *operation {
            Operation::Put(key, value) => {
                map.put(key, value);
                model.insert(key, value);
            }
            Operation::Remove(key) => {
                let actual = map.remove(&key).ok();
                let expected = model.remove(&key);
                assert_eq!(actual, expected);
            }
        }
    }
    (map, model)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_size_matches_model(operations in prop::collection::vec(operation_strategy(), 0..200)) {
        let (map, model) = apply(&operations);
        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.is_empty(), model.is_empty());
    }

    #[test]
    fn prop_lookups_match_model(operations in prop::collection::vec(operation_strategy(), 0..200)) {
        let (map, model) = apply(&operations);
        for key in 0u16..64 {
            prop_assert_eq!(map.get(&key).ok(), model.get(&key));
        }
    }

    #[test]
    fn prop_put_then_get_returns_value(
        operations in prop::collection::vec(operation_strategy(), 0..100),
        key in any::<u16>(),
        value in any::<i32>(),
    ) {
        let (mut map, _) = apply(&operations);
        map.put(key, value);
        prop_assert_eq!(map.get(&key), Ok(&value));
    }

    #[test]
    fn prop_put_is_idempotent(
        operations in prop::collection::vec(operation_strategy(), 0..100),
        key in any::<u16>(),
        value in any::<i32>(),
    ) {
        let (mut once, _) = apply(&operations);
        once.put(key, value);
        let mut twice = once.clone();
        twice.put(key, value);
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.entries(), twice.entries());
    }

    #[test]
    fn prop_failed_lookup_leaves_map_unchanged(
        operations in prop::collection::vec(operation_strategy(), 0..100),
        missing in 1000u16..2000,
    ) {
        let (mut map, _) = apply(&operations);
        let before = map.entries();
        prop_assert!(map.get(&missing).is_err());
        prop_assert!(map.remove(&missing).is_err());
        prop_assert_eq!(map.entries(), before);
    }

    #[test]
    fn prop_entries_grouped_by_bucket_and_sorted_within(
        operations in prop::collection::vec(operation_strategy(), 0..200),
    ) {
        let (map, _) = apply(&operations);
        let entries = map.entries();
        for pair in entries.windows(2) {
            let (left, right) = (&pair[0].0, &pair[1].0);
            let (left_bucket, right_bucket) = (map.bucket_index(left), map.bucket_index(right));
            prop_assert!(left_bucket < BUCKET_COUNT);
            prop_assert!(left_bucket <= right_bucket);
            if left_bucket == right_bucket {
                prop_assert!(left < right);
            }
        }
    }

    #[test]
    fn prop_snapshots_are_complete(operations in prop::collection::vec(operation_strategy(), 0..200)) {
        let (map, model) = apply(&operations);
        let mut keys = map.keys();
        keys.sort_unstable();
        let expected: Vec<u16> = model.keys().copied().collect();
        prop_assert_eq!(keys, expected);

        let mut entries = map.entries();
        entries.sort_unstable();
        let expected: Vec<(u16, i32)> = model.into_iter().collect();
        prop_assert_eq!(entries, expected);
        prop_assert_eq!(map.values().len(), map.len());
    }
}
