// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for core tests: fixture builders and a counting stub
//! store.

use crate::store::{AvailabilityStore, StoreError};
use stayquote_domain::{
    HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, StayRange, parse_ymd,
};
use time::Date;

/// Parses an ISO date for fixtures.
pub fn date(s: &str) -> Date {
    parse_ymd(s).unwrap()
}

/// Builds a validated stay range for fixtures.
pub fn stay(check_in: &str, check_out: &str) -> StayRange {
    StayRange::parse(check_in, check_out).unwrap()
}

/// Builds a room type under hotel `H1`.
pub fn room_type(id: &str, capacity: u32, base_price: i64) -> RoomType {
    RoomType::new(
        RoomTypeId::new(id),
        HotelId::new("H1"),
        format!("Room {id}"),
        capacity,
        base_price,
    )
}

/// In-memory `AvailabilityStore` stub that records how often each read is
/// issued, so tests can assert that cache hits skip the store entirely.
#[derive(Debug, Default)]
pub struct StubStore {
    pub room_types: Vec<RoomType>,
    pub inventory: Vec<InventoryRecord>,
    pub price_overrides: Vec<PriceOverride>,
    pub room_type_calls: usize,
    pub inventory_calls: usize,
    pub price_calls: usize,
    /// When set, every read fails with a clone of this error.
    pub failure: Option<StoreError>,
}

impl StubStore {
    /// Marks `(room_type, date)` as having `available` sellable units.
    pub fn set_available(&mut self, room_type_id: &str, date_str: &str, available: i64) {
        self.inventory.push(InventoryRecord::new(
            RoomTypeId::new(room_type_id),
            date(date_str),
            available,
        ));
    }

    /// Sets a nightly price override for `(room_type, date)`.
    pub fn set_price(&mut self, room_type_id: &str, date_str: &str, price: i64) {
        self.price_overrides.push(PriceOverride::new(
            RoomTypeId::new(room_type_id),
            date(date_str),
            price,
        ));
    }

    fn fail_if_configured(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl AvailabilityStore for StubStore {
    fn room_types_with_capacity(
        &mut self,
        hotel_id: &HotelId,
        min_capacity: u32,
    ) -> Result<Vec<RoomType>, StoreError> {
        self.room_type_calls += 1;
        self.fail_if_configured()?;

        let mut matches: Vec<RoomType> = self
            .room_types
            .iter()
            .filter(|rt| rt.hotel_id == *hotel_id && rt.capacity >= min_capacity)
            .cloned()
            .collect();
        // Honor the contract: ascending room-type id.
        matches.sort_by(|a, b| a.room_type_id.value().cmp(b.room_type_id.value()));
        Ok(matches)
    }

    fn inventory_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<InventoryRecord>, StoreError> {
        self.inventory_calls += 1;
        self.fail_if_configured()?;

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
        self.price_calls += 1;
        self.fail_if_configured()?;

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
