use chained_buckets::{hash, DuplicatePolicy, HashTable, TableConfig, TableError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

fn assert_placement(table: &HashTable) {
    let dump = table.dump();
    assert_eq!(dump.len(), table.capacity());
    for (i, bucket) in dump.iter().enumerate() {
        for &(key, _) in bucket {
            assert_eq!(hash(key, table.capacity()), i, "key {} in wrong bucket", key);
        }
    }
    assert_eq!(dump.iter().map(Vec::len).sum::<usize>(), table.len());
}

#[test]
fn test_demo_scenario() {
    let mut table = HashTable::new(8, 4).unwrap();
    table.add(2, 20).unwrap();
    table.add(3, 30).unwrap();
    table.add(25, 100).unwrap();
    table.add(35, 150).unwrap();

    assert_eq!(table.retrieve(3), Some(30));

    table.delete(3).unwrap();
    assert_eq!(table.retrieve(3), None);
    assert_eq!(table.len(), 3);
    assert_eq!(table.capacity(), 8);
    assert_placement(&table);
}

#[test]
fn test_demo_scenario_layout() {
    let mut table = HashTable::new(8, 4).unwrap();
    for (k, v) in [(2, 20), (3, 30), (25, 100), (35, 150)] {
        table.add(k, v).unwrap();
    }

    let mut expected: Vec<Vec<(i64, i64)>> = vec![Vec::new(); 8];
    expected[1].push((2, 20));
    expected[6].push((3, 30));
    expected[3].push((25, 100));
    expected[5].push((35, 150));
    assert_eq!(table.dump(), expected);
}

#[test]
fn test_keys_25_and_35_at_capacity_8() {
    assert_eq!(hash(25, 8), 3);
    assert_eq!(hash(35, 8), 5);

    // force them into one chain to check retrieval under collision too
    let mut table = HashTable::new(1, 8).unwrap();
    table.add(25, 100).unwrap();
    table.add(35, 150).unwrap();
    assert_eq!(table.dump(), vec![vec![(25, 100), (35, 150)]]);
    assert_eq!(table.retrieve(25), Some(100));
    assert_eq!(table.retrieve(35), Some(150));
}

#[test]
fn test_negative_one_value_is_distinguishable_from_missing() {
    let mut table = HashTable::default();
    table.add(4, -1).unwrap();
    assert_eq!(table.retrieve(4), Some(-1));
    assert_eq!(table.retrieve(5), None);
    assert!(table.contains_key(4));
    assert!(!table.contains_key(5));
}

#[test]
fn test_negative_keys_round_trip() {
    let mut table = HashTable::new(4, 2).unwrap();
    for key in -50..0 {
        table.add(key, key * 3).unwrap();
    }
    for key in -50..0 {
        assert_eq!(table.retrieve(key), Some(key * 3));
    }
    assert_placement(&table);
}

#[test]
fn test_overwrite_returns_last_value() {
    let mut table = HashTable::new(8, 4).unwrap();
    assert_eq!(table.add(7, 1).unwrap(), None);
    assert_eq!(table.add(7, 2).unwrap(), Some(1));
    assert_eq!(table.add(7, 3).unwrap(), Some(2));
    assert_eq!(table.retrieve(7), Some(3));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_append_returns_first_value() {
    let config = TableConfig::default().with_duplicates(DuplicatePolicy::Append);
    let mut table = HashTable::with_config(config).unwrap();
    table.add(7, 1).unwrap();
    table.add(7, 2).unwrap();
    table.add(7, 3).unwrap();
    assert_eq!(table.retrieve(7), Some(1));
    assert_eq!(table.len(), 3);

    table.delete(7).unwrap();
    table.delete(7).unwrap();
    assert_eq!(table.retrieve(7), Some(3));
    table.delete(7).unwrap();
    assert_eq!(table.retrieve(7), None);
    assert!(table.is_empty());
}

#[test]
fn test_resize_preserves_entries() {
    let mut table = HashTable::new(2, 1).unwrap();
    let keys: Vec<i64> = (0..200).map(|i| i * 7 - 300).collect();
    let mut capacities: Vec<usize> = vec![table.capacity()];

    for &key in &keys {
        table.add(key, key + 1).unwrap();
        if *capacities.last().unwrap() != table.capacity() {
            capacities.push(table.capacity());
            assert_placement(&table);
            for &seen in keys.iter().take_while(|&&k| k != key) {
                assert_eq!(table.retrieve(seen), Some(seen + 1));
            }
        }
    }
    assert_eq!(capacities, vec![2, 4, 8, 16, 32, 64, 128, 256]);

    for &key in keys.iter().rev() {
        let before = table.capacity();
        table.delete(key).unwrap();
        if before != table.capacity() {
            assert_eq!(table.capacity(), before / 2);
            assert_placement(&table);
        }
    }
    assert!(table.is_empty());
    assert!(table.capacity() >= 1);
}

#[test]
fn test_invalid_configuration() {
    assert!(matches!(HashTable::new(0, 1), Err(TableError::ZeroCapacity)));
    assert!(matches!(HashTable::new(1, 0), Err(TableError::ZeroLoadFactor)));
    let config = TableConfig::default().with_load_factor_threshold(0);
    assert!(matches!(HashTable::with_config(config), Err(TableError::ZeroLoadFactor)));
}

#[test]
fn test_random_operations_match_std_hashmap() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for policy in [DuplicatePolicy::Overwrite, DuplicatePolicy::Append] {
        let config = TableConfig::new(4, 2).with_duplicates(policy);
        let mut table = HashTable::with_config(config).unwrap();
        let mut model: HashMap<i64, Vec<i64>> = HashMap::new();

        for _ in 0..5000 {
            let key: i64 = rng.gen_range(-64..64);
            match rng.gen_range(0..3) {
                0 | 1 => {
                    let value: i64 = rng.gen();
                    let old = table.add(key, value).unwrap();
                    let values = model.entry(key).or_default();
                    match policy {
                        DuplicatePolicy::Overwrite => {
                            assert_eq!(old, values.first().copied());
                            values.clear();
                        }
                        DuplicatePolicy::Append => assert_eq!(old, None),
                    }
                    values.push(value);
                }
                _ => {
                    let removed = table.delete(key).unwrap();
                    let expected = match model.get_mut(&key) {
                        Some(values) if !values.is_empty() => Some(values.remove(0)),
                        _ => None,
                    };
                    assert_eq!(removed, expected);
                }
            }

            let expected_len: usize = model.values().map(Vec::len).sum();
            assert_eq!(table.len(), expected_len);
            assert_eq!(table.retrieve(key), model.get(&key).and_then(|v| v.first().copied()));
        }

        assert_placement(&table);
        for (&key, values) in &model {
            assert_eq!(table.retrieve(key), values.first().copied());
        }
    }
}
