// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API boundary tests.

use crate::request_response::QuoteRequest;
use std::time::Duration;
use stayquote::{AvailabilityStore, QuoteCache, StoreError};
use stayquote_domain::{
    HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, StayRange, parse_ymd,
};

/// Builds the cache used by boundary tests.
pub fn cache() -> QuoteCache {
    QuoteCache::new(Duration::from_secs(600))
}

/// A well-formed quote request for hotel `H1`.
pub fn valid_request() -> QuoteRequest {
    QuoteRequest {
        hotel_id: String::from("H1"),
        check_in: String::from("2025-10-15"),
        check_out: String::from("2025-10-18"),
        guests: 2,
    }
}

/// Minimal counting store: every read is tallied so tests can prove that
/// rejected requests never reach the store.
#[derive(Debug, Default)]
pub struct CountingStore {
    pub room_types: Vec<RoomType>,
    pub inventory: Vec<InventoryRecord>,
    pub price_overrides: Vec<PriceOverride>,
    pub calls: usize,
}

impl CountingStore {
    /// Seeds one fully-available room type with an override on the middle
    /// night of the canonical three-night stay.
    pub fn seeded() -> Self {
        let mut store = Self::default();
        store.room_types.push(RoomType::new(
            RoomTypeId::new("RT1"),
            HotelId::new("H1"),
            String::from("Deluxe Double"),
            2,
            500_000,
        ));
        for day in ["2025-10-15", "2025-10-16", "2025-10-17"] {
            store.inventory.push(InventoryRecord::new(
                RoomTypeId::new("RT1"),
                parse_ymd(day).unwrap(),
                3,
            ));
        }
        store.price_overrides.push(PriceOverride::new(
            RoomTypeId::new("RT1"),
            parse_ymd("2025-10-16").unwrap(),
            600_000,
        ));
        store
    }
}

impl AvailabilityStore for CountingStore {
    fn room_types_with_capacity(
        &mut self,
        hotel_id: &HotelId,
        min_capacity: u32,
    ) -> Result<Vec<RoomType>, StoreError> {
        self.calls += 1;
        let mut matches: Vec<RoomType> = self
            .room_types
            .iter()
            .filter(|rt| rt.hotel_id == *hotel_id && rt.capacity >= min_capacity)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.room_type_id.value().cmp(b.room_type_id.value()));
        Ok(matches)
    }

    fn inventory_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<InventoryRecord>, StoreError> {
        self.calls += 1;
        Ok(self
            .inventory
            .iter()
            .filter(|rec| {
                room_type_ids.contains(&rec.room_type_id)
                    && rec.date >= range.check_in()
                    && rec.date < range.check_out()
            })
            .cloned()
            .collect())
    }

    fn price_overrides_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<PriceOverride>, StoreError> {
        self.calls += 1;
        Ok(self
            .price_overrides
            .iter()
            .filter(|over| {
                room_type_ids.contains(&over.room_type_id)
                    && over.date >= range.check_in()
                    && over.date < range.check_out()
            })
            .cloned()
            .collect())
    }
}
