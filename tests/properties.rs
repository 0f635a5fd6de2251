// ProbingMap property tests.
//
// Properties checked against a fresh map per case:
//  - insert then get returns the inserted value;
//  - a new map has no entries;
//  - remove makes the key absent and decrements len by one;
//  - removing an absent key changes nothing;
//  - growth keeps every distinct key reachable with its last value;
//  - start slots depend only on the key bytes and the capacity.
//
// Model test: insert/get sequences (no removals) against std::collections::HashMap.
use std::{
    collections::{HashMap, HashSet},
    num::NonZeroUsize,
};

use probing_map::{ProbingMap, djb2, start_slot};
use proptest::prelude::*;

fn small_capacity() -> impl Strategy<Value = NonZeroUsize> {
    (1usize..=32).prop_map(|slots| NonZeroUsize::new(slots).unwrap())
}

proptest! {
    #[test]
    fn prop_insert_then_get(capacity in small_capacity(), key in any::<Vec<u8>>(), value in any::<u32>()) {
        let mut map = ProbingMap::with_capacity(capacity);
        map.insert(&key, value);

        prop_assert_eq!(map.get(&key), Some(&value));
        prop_assert!(map.contains_key(&key));
        prop_assert_eq!(map.len(), 1);
    }

    #[test]
    fn prop_new_map_is_empty(capacity in small_capacity(), key in any::<Vec<u8>>()) {
        let map: ProbingMap<'_, u32> = ProbingMap::with_capacity(capacity);

        prop_assert_eq!(map.get(&key), None);
        prop_assert!(!map.contains_key(&key));
        prop_assert!(map.is_empty());
    }

    #[test]
    fn prop_remove_makes_absent(keys in proptest::collection::hash_set("[a-z]{1,8}", 1..50), pick in any::<prop::sample::Index>()) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut map = ProbingMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key, i);
        }
        let victim = pick.get(&keys);
        let before = map.len();

        prop_assert!(map.remove(victim).is_some());
        prop_assert_eq!(map.get(victim), None);
        prop_assert_eq!(map.len(), before - 1);
    }

    #[test]
    fn prop_remove_absent_is_noop(keys in proptest::collection::hash_set("[a-z]{1,8}", 0..50), absent in "[0-9]{1,8}") {
        let mut map = ProbingMap::new();
        for key in &keys {
            map.insert(key, ());
        }
        let before = map.len();

        prop_assert_eq!(map.remove(&absent), None);
        prop_assert_eq!(map.len(), before);
        for key in &keys {
            prop_assert!(map.contains_key(key));
        }
    }

    #[test]
    fn prop_growth_keeps_entries(capacity in small_capacity(), keys in proptest::collection::hash_set("[a-z]{1,8}", 1..300)) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut map = ProbingMap::with_capacity(capacity);
        for (i, key) in keys.iter().enumerate() {
            map.insert(key, i);
        }

        prop_assert_eq!(map.len(), keys.len());
        prop_assert!(map.len() <= map.capacity());
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(map.get(key), Some(&i));
        }
    }

    #[test]
    fn prop_start_slot_is_deterministic(key in any::<Vec<u8>>(), slots in 1usize..10_000) {
        let capacity = NonZeroUsize::new(slots).unwrap();
        let copy = key.clone();

        prop_assert_eq!(djb2(&key), djb2(&copy));
        prop_assert_eq!(start_slot(&key, capacity), start_slot(&copy, capacity));
        prop_assert!(start_slot(&key, capacity) < slots);
    }

    #[test]
    fn prop_matches_std_hashmap(ops in proptest::collection::vec((0usize..20, any::<i32>()), 1..200)) {
        let keys: Vec<String> = (0..20).map(|k| format!("k{k}")).collect();
        let mut map = ProbingMap::try_with_capacity(2).unwrap();
        let mut model = HashMap::new();
        let mut distinct = HashSet::new();

        for (k, value) in ops {
            map.insert(&keys[k], value);
            model.insert(k, value);
            distinct.insert(k);

            for (k, key) in keys.iter().enumerate() {
                prop_assert_eq!(map.get(key), model.get(&k));
            }
        }

        // overwrites are counted as well
        prop_assert!(map.len() >= distinct.len());
    }
}
