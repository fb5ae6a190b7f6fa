use classics::collections::hash::primes::four_k_plus_3;
use classics::collections::hash::Slot;
use classics::{HashTableConfig, LqHashTable};

fn unseeded() -> HashTableConfig {
    HashTableConfig {
        preseed_size: false,
        ..HashTableConfig::default()
    }
}

#[test]
fn test_capacity_is_inflated_four_k_plus_3_prime() {
    let table = LqHashTable::new(10);
    let pct = HashTableConfig::default().inflation_percent();
    assert_eq!(table.capacity(), four_k_plus_3(10, pct));
    assert_eq!(table.capacity(), 19);
    assert_eq!(table.size(), 10);
    assert!(table.is_empty());
}

#[test]
fn test_preseeded_counter_limits_inserts() {
    // size starts at 10 of 19 slots; 14 / 19 is the last ratio under 0.75.
    let mut table = LqHashTable::new(10);
    let accepted = (0..10).filter(|i| table.insert(format!("key{i}"))).count();
    assert_eq!(accepted, 5);
    assert_eq!(table.len(), 5);
    assert_eq!(table.size(), 15);
}

#[test]
fn test_unseeded_counter_fills_to_load_factor() {
    let mut table = LqHashTable::with_config(10, &unseeded()).unwrap();
    let accepted = (0..19).filter(|i| table.insert(format!("key{i}"))).count();
    // 15 / 19 is the first ratio at or over 0.75.
    assert_eq!(accepted, 15);
}

#[test]
fn test_probe_walks_past_tombstone() {
    // "a" folds to 97 and "t" to 116: both start at slot 2 of 19.
    let mut table = LqHashTable::with_config(10, &unseeded()).unwrap();
    assert_eq!(table.probe("a").next(), Some(2));
    assert_eq!(table.probe("t").next(), Some(2));

    assert!(table.insert("a"));
    assert!(table.insert("t"));
    assert_eq!(table.slot(2), Some(&Slot::Occupied("a".to_string())));
    assert_eq!(table.slot(8), Some(&Slot::Occupied("t".to_string())));

    assert!(table.delete("a"));
    assert_eq!(table.slot(2), Some(&Slot::Tombstone));
    assert_eq!(table.fetch("t"), Some("t"));
    assert_eq!(table.fetch("a"), None);

    // The tombstone is the first available slot on the probe.
    assert!(table.insert("a"));
    assert_eq!(table.slot(2), Some(&Slot::Occupied("a".to_string())));
    assert_eq!(table.tombstones(), 0);
}

#[test]
fn test_delete_and_update() {
    let mut table = LqHashTable::new(100);
    for name in ["Alice", "Bob", "Carol"] {
        assert!(table.insert(name));
    }
    assert!(table.delete("Bob"));
    assert!(!table.delete("Bob"));
    assert!(!table.contains("Bob"));
    assert_eq!(table.size(), 102);

    assert!(table.update("Alice", "Alicia"));
    assert_eq!(table.fetch("Alice"), None);
    assert_eq!(table.fetch("Alicia"), Some("Alicia"));
    assert!(!table.update("Nobody", "Somebody"));
    assert!(!table.contains("Somebody"));

    let mut keys: Vec<_> = table.iter().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["Alicia", "Carol"]);
}

#[test]
fn test_update_reuses_freed_load() {
    let mut table = LqHashTable::new(10);
    for i in 0..5 {
        assert!(table.insert(format!("k{i}")));
    }
    // The table is at its load factor, but the delete frees one unit of load.
    assert!(!table.insert("k5"));
    assert!(table.update("k0", "z0"));
    assert!(table.contains("z0"));
    assert_eq!(table.len(), 5);
}

#[test]
fn test_keys_are_case_sensitive() {
    let mut table = LqHashTable::new(20);
    table.insert("Key");
    assert!(table.contains("Key"));
    assert!(!table.contains("key"));
    assert!(!table.contains("Key "));
}

#[test]
fn test_rejects_invalid_config() {
    let config = HashTableConfig {
        load_factor: 1.5,
        ..HashTableConfig::default()
    };
    assert!(LqHashTable::with_config(10, &config).is_err());
}

#[test]
fn test_duplicates_fit_when_target_sizes_onto_default_quotient() {
    let mut table = LqHashTable::with_config(7494, &unseeded()).unwrap();
    assert!(table.capacity() > 9967);
    // "a" folds below the capacity, so its step is the default quotient.
    assert_eq!(table.probe("a").offset(), 9967);

    assert!(table.insert("a"));
    assert!(table.insert("a"));
    assert_eq!(table.len(), 2);

    let probe: Vec<_> = table.probe("a").take(2).collect();
    assert_ne!(probe[0], probe[1]);
    assert!(table.delete("a"));
    assert_eq!(table.fetch("a"), Some("a"));
    assert!(table.update("a", "b"));
    assert_eq!(table.len(), 1);
    assert!(!table.contains("a"));
}
