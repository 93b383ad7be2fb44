use serverlist_core::{CoreError, PlayerCache};
use std::sync::Arc;
use uuid::Uuid;

// ── Recording ────────────────────────────────────────────────────

#[test]
fn first_record_is_new_then_updates() {
    let cache = PlayerCache::new();
    let uuid = Uuid::new_v4();
    assert!(cache.record("10.0.0.1", "Steve", uuid));
    assert!(!cache.record("10.0.0.1", "Steve2", uuid));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&uuid).unwrap().name, "Steve2");
}

#[test]
fn find_by_address_returns_latest_player() {
    let cache = PlayerCache::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    cache.record("10.0.0.1", "Alice", a);
    cache.record("10.0.0.1", "Bob", b);
    assert_eq!(cache.find_by_address("10.0.0.1").unwrap().uuid, b);
    assert_eq!(cache.len(), 2);
}

#[test]
fn moving_address_drops_old_index_entry() {
    let cache = PlayerCache::new();
    let uuid = Uuid::new_v4();
    cache.record("10.0.0.1", "Steve", uuid);
    cache.record("10.0.0.2", "Steve", uuid);
    assert!(cache.find_by_address("10.0.0.1").is_none());
    assert_eq!(cache.find_by_address("10.0.0.2").unwrap().uuid, uuid);
}

#[test]
fn moving_address_keeps_other_players_index() {
    let cache = PlayerCache::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    cache.record("shared", "Alice", a);
    cache.record("shared", "Bob", b);
    cache.record("elsewhere", "Alice", a);
    assert_eq!(cache.find_by_address("shared").unwrap().uuid, b);
}

#[test]
fn unknown_lookups_are_none() {
    let cache = PlayerCache::new();
    assert!(cache.is_empty());
    assert!(cache.get(&Uuid::new_v4()).is_none());
    assert!(cache.find_by_address("127.0.0.1").is_none());
}

#[test]
fn record_is_visible_to_other_threads() {
    let cache = Arc::new(PlayerCache::new());
    let uuid = Uuid::new_v4();
    {
        let cache = Arc::clone(&cache);
        std::thread::spawn(move || cache.record("1.2.3.4", "Remote", uuid))
            .join()
            .unwrap();
    }
    assert_eq!(cache.get(&uuid).unwrap().address, "1.2.3.4");
}

// ── Persistence ──────────────────────────────────────────────────

#[test]
fn json_round_trip_preserves_records() {
    let cache = PlayerCache::new();
    cache.record("10.0.0.1", "Alice", Uuid::new_v4());
    cache.record("10.0.0.2", "Bob", Uuid::new_v4());

    let json = cache.to_json().unwrap();
    let restored = PlayerCache::from_json(&json).unwrap();
    assert_eq!(restored.snapshot(), cache.snapshot());
    assert_eq!(restored.find_by_address("10.0.0.2").unwrap().name, "Bob");
}

#[test]
fn snapshot_is_sorted_by_uuid() {
    let cache = PlayerCache::new();
    for i in 0..5 {
        cache.record(&format!("10.0.0.{i}"), &format!("p{i}"), Uuid::new_v4());
    }
    let snapshot = cache.snapshot();
    assert!(snapshot.windows(2).all(|w| w[0].uuid <= w[1].uuid));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = PlayerCache::from_json("{not json").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}
