// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::{QuoteCache, quote_stay};
use crate::error::CoreError;
use crate::quote::StayQuery;
use crate::store::StoreError;
use crate::tests::helpers::{StubStore, room_type, stay};
use std::time::Duration;
use stayquote_domain::HotelId;

fn cache() -> QuoteCache {
    QuoteCache::new(Duration::from_secs(600))
}

fn query(check_in: &str, check_out: &str, guests: u32) -> StayQuery {
    StayQuery::new(HotelId::new("H1"), stay(check_in, check_out), guests)
}

/// One room type, full availability across the stay, one overridden
/// night.
fn seeded_store() -> StubStore {
    let mut store = StubStore::default();
    store.room_types.push(room_type("RT1", 2, 500_000));
    store.set_available("RT1", "2025-10-15", 3);
    store.set_available("RT1", "2025-10-16", 3);
    store.set_available("RT1", "2025-10-17", 3);
    store.set_price("RT1", "2025-10-16", 600_000);
    store
}

#[test]
fn test_quote_concrete_scenario() {
    let mut store = seeded_store();
    let cache = cache();

    let quote = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();

    assert_eq!(quote.nights, 3);
    assert_eq!(quote.currency, "VND");
    assert_eq!(quote.rooms.len(), 1);

    let room = &quote.rooms[0];
    assert_eq!(room.room_type_id.value(), "RT1");
    assert_eq!(room.capacity, 2);
    assert_eq!(room.total, 1_600_000);
    assert!(room.available_all_nights);

    let prices: Vec<i64> = room.breakdown.iter().map(|night| night.price).collect();
    assert_eq!(prices, vec![500_000, 600_000, 500_000]);
}

#[test]
fn test_second_identical_request_skips_the_store() {
    let mut store = seeded_store();
    let cache = cache();

    let first = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();
    assert_eq!(store.room_type_calls, 1);
    assert_eq!(store.inventory_calls, 1);
    assert_eq!(store.price_calls, 1);

    let second = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();

    // Identical response, and not a single additional store call.
    assert_eq!(*first, *second);
    assert_eq!(store.room_type_calls, 1);
    assert_eq!(store.inventory_calls, 1);
    assert_eq!(store.price_calls, 1);
}

#[test]
fn test_guest_count_is_part_of_the_cache_key() {
    let mut store = seeded_store();
    store.room_types.push(room_type("RT2", 4, 900_000));
    for d in ["2025-10-15", "2025-10-16", "2025-10-17"] {
        store.set_available("RT2", d, 1);
    }
    let cache = cache();

    let for_two = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();
    let for_three = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 3)).unwrap();

    // Both requests computed independently.
    assert_eq!(store.room_type_calls, 2);
    // Two guests see both room types; three guests only the larger one.
    assert_eq!(for_two.rooms.len(), 2);
    assert_eq!(for_three.rooms.len(), 1);
    assert_eq!(for_three.rooms[0].room_type_id.value(), "RT2");
}

#[test]
fn test_capacity_filter_excludes_small_rooms() {
    let mut store = StubStore::default();
    // Fully available, but only sleeps one guest.
    store.room_types.push(room_type("RT1", 1, 300_000));
    store.set_available("RT1", "2025-10-15", 5);
    let cache = cache();

    let quote = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-16", 2)).unwrap();

    assert!(quote.rooms.is_empty());
}

#[test]
fn test_no_qualifying_room_types_short_circuits() {
    let mut store = StubStore::default();
    let cache = cache();

    let quote = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();

    assert_eq!(quote.nights, 3);
    assert_eq!(quote.currency, "VND");
    assert!(quote.rooms.is_empty());
    // The calendar lookups were never issued.
    assert_eq!(store.room_type_calls, 1);
    assert_eq!(store.inventory_calls, 0);
    assert_eq!(store.price_calls, 0);
}

#[test]
fn test_empty_quote_is_cached_too() {
    let mut store = StubStore::default();
    let cache = cache();

    let _ = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();
    let _ = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();

    // The doomed query hit the store exactly once.
    assert_eq!(store.room_type_calls, 1);
}

#[test]
fn test_store_failure_propagates_and_is_not_cached() {
    let mut store = seeded_store();
    store.failure = Some(StoreError::Unavailable(String::from("connection refused")));
    let cache = cache();

    let result = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2));
    assert!(matches!(result, Err(CoreError::StoreFailure(_))));

    // Nothing was cached: once the store recovers, the next request
    // computes a real quote.
    store.failure = None;
    let quote = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();
    assert_eq!(quote.rooms.len(), 1);
}

#[test]
fn test_cold_cache_changes_latency_not_correctness() {
    let mut store = seeded_store();
    let warm_cache = cache();

    let warm = quote_stay(&mut store, &warm_cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();

    // Same query against a fresh cache recomputes the identical quote.
    let cold_cache = cache();
    let cold = quote_stay(&mut store, &cold_cache, &query("2025-10-15", "2025-10-18", 2)).unwrap();

    assert_eq!(*warm, *cold);
}

#[test]
fn test_room_quotes_follow_store_order() {
    let mut store = StubStore::default();
    // Inserted out of order; the stub honors the ascending-id contract.
    store.room_types.push(room_type("RT3", 2, 300));
    store.room_types.push(room_type("RT1", 2, 100));
    store.room_types.push(room_type("RT2", 2, 200));
    for id in ["RT1", "RT2", "RT3"] {
        store.set_available(id, "2025-10-15", 1);
    }
    let cache = cache();

    let quote = quote_stay(&mut store, &cache, &query("2025-10-15", "2025-10-16", 2)).unwrap();

    let ids: Vec<&str> = quote
        .rooms
        .iter()
        .map(|room| room.room_type_id.value())
        .collect();
    assert_eq!(ids, vec!["RT1", "RT2", "RT3"]);
}
