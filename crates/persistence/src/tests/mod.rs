// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod engine_tests;

use crate::Persistence;
use stayquote_domain::{
    Hotel, HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, parse_ymd,
};
use time::Date;

/// Parses an ISO date for fixtures.
fn date(s: &str) -> Date {
    parse_ymd(s).unwrap()
}

/// Builds a room type under the given hotel.
fn room_type(id: &str, hotel: &str, capacity: u32, base_price: i64) -> RoomType {
    RoomType::new(
        RoomTypeId::new(id),
        HotelId::new(hotel),
        format!("Room {id}"),
        capacity,
        base_price,
    )
}

/// Fresh in-memory store seeded with hotel `H1` and two room types:
/// `RT1` (capacity 2, base 500 000) and `RT2` (capacity 4, base 900 000).
fn seeded_persistence() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_hotel(&Hotel::new(HotelId::new("H1"), String::from("Riverside Inn")))
        .unwrap();
    persistence
        .create_room_type(&room_type("RT1", "H1", 2, 500_000))
        .unwrap();
    persistence
        .create_room_type(&room_type("RT2", "H1", 4, 900_000))
        .unwrap();
    persistence
}

/// Marks `(room_type, date)` as having `available` units.
fn set_available(persistence: &mut Persistence, room_type_id: &str, day: &str, available: i64) {
    persistence
        .set_inventory(&InventoryRecord::new(
            RoomTypeId::new(room_type_id),
            date(day),
            available,
        ))
        .unwrap();
}

/// Sets a price override for `(room_type, date)`.
fn set_price(persistence: &mut Persistence, room_type_id: &str, day: &str, price: i64) {
    persistence
        .set_price_override(&PriceOverride::new(
            RoomTypeId::new(room_type_id),
            date(day),
            price,
        ))
        .unwrap();
}
