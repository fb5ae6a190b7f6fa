use std::collections::HashMap;

use classics::{HashTableConfig, LqHashTable};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Insert(String),
    Fetch(String),
    Delete(String),
    Update(String, String),
}

fn key() -> impl Strategy<Value = String> {
    // A small alphabet keeps collisions and repeated keys frequent.
    "[abAB ]{0,5}"
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => key().prop_map(Operation::Insert),
        2 => key().prop_map(Operation::Fetch),
        2 => key().prop_map(Operation::Delete),
        1 => (key(), key()).prop_map(|(a, b)| Operation::Update(a, b)),
    ]
}

proptest! {
    #[test]
    fn test_table_matches_multiset(ops in proptest::collection::vec(operation(), 1..200)) {
        let config = HashTableConfig {
            load_factor: 1.0,
            preseed_size: false,
            ..HashTableConfig::default()
        };
        let mut table = LqHashTable::with_config(40, &config).unwrap();
        let mut model: HashMap<String, usize> = HashMap::new();
        let mut live = 0;

        for op in ops {
            match op {
                Operation::Insert(k) => {
                    let expected = live < table.capacity();
                    prop_assert_eq!(table.insert(k.clone()), expected, "insert {:?}", k);
                    if expected {
                        *model.entry(k).or_default() += 1;
                        live += 1;
                    }
                }
                Operation::Fetch(k) => {
                    let present = model.get(&k).is_some_and(|&c| c > 0);
                    prop_assert_eq!(table.fetch(&k), present.then_some(k.as_str()));
                }
                Operation::Delete(k) => {
                    let count = model.entry(k.clone()).or_default();
                    let expected = *count > 0;
                    prop_assert_eq!(table.delete(&k), expected, "delete {:?}", k);
                    if expected {
                        *count -= 1;
                        live -= 1;
                    }
                }
                Operation::Update(old, new) => {
                    let count = model.entry(old.clone()).or_default();
                    let expected = *count > 0;
                    prop_assert_eq!(table.update(&old, new.clone()), expected);
                    if expected {
                        *count -= 1;
                        *model.entry(new).or_default() += 1;
                    }
                }
            }
            prop_assert_eq!(table.len(), live);
            prop_assert_eq!(table.size(), live);
        }

        let mut stored: Vec<&str> = table.iter().collect();
        stored.sort_unstable();
        let mut expected: Vec<&str> = model
            .iter()
            .flat_map(|(k, &c)| std::iter::repeat(k.as_str()).take(c))
            .collect();
        expected.sort_unstable();
        prop_assert_eq!(stored, expected);
    }
}
