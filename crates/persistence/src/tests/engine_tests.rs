// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end quote computation against the real `SQLite` store.

use super::{seeded_persistence, set_available, set_price};
use std::time::Duration;
use stayquote::{QuoteCache, StayQuery, quote_stay};
use stayquote_domain::{HotelId, StayRange};

fn query(hotel: &str, check_in: &str, check_out: &str, guests: u32) -> StayQuery {
    StayQuery::new(
        HotelId::new(hotel),
        StayRange::parse(check_in, check_out).unwrap(),
        guests,
    )
}

#[test]
fn test_quote_against_sqlite_store() {
    let mut persistence = seeded_persistence();
    for day in ["2025-10-15", "2025-10-16", "2025-10-17"] {
        set_available(&mut persistence, "RT1", day, 3);
    }
    set_price(&mut persistence, "RT1", "2025-10-16", 600_000);
    let cache = QuoteCache::new(Duration::from_secs(600));

    let quote = quote_stay(
        &mut persistence,
        &cache,
        &query("H1", "2025-10-15", "2025-10-18", 2),
    )
    .unwrap();

    assert_eq!(quote.nights, 3);
    assert_eq!(quote.currency, "VND");
    // RT2 has no inventory seeded, so only RT1 qualifies.
    assert_eq!(quote.rooms.len(), 1);
    assert_eq!(quote.rooms[0].room_type_id.value(), "RT1");
    assert_eq!(quote.rooms[0].total, 1_600_000);
}

#[test]
fn test_repeat_quote_is_served_from_cache() {
    let mut persistence = seeded_persistence();
    for day in ["2025-10-15", "2025-10-16", "2025-10-17"] {
        set_available(&mut persistence, "RT1", day, 3);
    }
    let cache = QuoteCache::new(Duration::from_secs(600));
    let q = query("H1", "2025-10-15", "2025-10-18", 2);

    let first = quote_stay(&mut persistence, &cache, &q).unwrap();

    // Mutate the calendar after the first quote. The cached entry keeps
    // serving the old value until its TTL elapses; this staleness window
    // is an accepted property of the system.
    set_available(&mut persistence, "RT1", "2025-10-16", 0);
    let second = quote_stay(&mut persistence, &cache, &q).unwrap();

    assert_eq!(*first, *second);

    // A fresh cache sees the mutation immediately.
    let cold_cache = QuoteCache::new(Duration::from_secs(600));
    let recomputed = quote_stay(&mut persistence, &cold_cache, &q).unwrap();
    assert!(recomputed.rooms.is_empty());
}

#[test]
fn test_unknown_hotel_quotes_empty_without_calendar_reads() {
    let mut persistence = seeded_persistence();
    let cache = QuoteCache::new(Duration::from_secs(600));

    let quote = quote_stay(
        &mut persistence,
        &cache,
        &query("H404", "2025-10-15", "2025-10-18", 2),
    )
    .unwrap();

    assert_eq!(quote.nights, 3);
    assert!(quote.rooms.is_empty());
}
