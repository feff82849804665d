// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store boundary for the quote engine.
//!
//! The engine reads three kinds of records and writes none. Implementors
//! are expected to satisfy each method with a single bulk query — the
//! engine calls each at most once per quote, so a full computation costs
//! at most one room-type query plus two calendar-range queries, never
//! O(rooms × nights) point reads.

use stayquote_domain::{HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, StayRange};
use thiserror::Error;

/// Errors raised by an [`AvailabilityStore`] implementation.
///
/// The engine does not retry store errors; they propagate to the caller
/// unrecovered. Retries, if any, belong to the storage client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    /// A query against the backing store failed.
    #[error("Store query failed: {0}")]
    QueryFailed(String),
}

/// Read-only access to room types, inventory, and the price calendar.
pub trait AvailabilityStore {
    /// Returns the room types of `hotel_id` whose capacity is at least
    /// `min_capacity`, ordered by ascending room-type id.
    ///
    /// The ordering is part of the contract: quote output preserves it,
    /// and callers may rely on it being deterministic.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store is unreachable or the query
    /// fails.
    fn room_types_with_capacity(
        &mut self,
        hotel_id: &HotelId,
        min_capacity: u32,
    ) -> Result<Vec<RoomType>, StoreError>;

    /// Returns every inventory record for the given room types within the
    /// stay's night range `[check_in, check_out)`.
    ///
    /// Dates with no record are simply absent; the lookup layer treats
    /// absence as zero availability.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store is unreachable or the query
    /// fails.
    fn inventory_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<InventoryRecord>, StoreError>;

    /// Returns every price override for the given room types within the
    /// stay's night range `[check_in, check_out)`.
    ///
    /// Dates with no record are simply absent; the lookup layer falls back
    /// to the room type's base price.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store is unreachable or the query
    /// fails.
    fn price_overrides_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<PriceOverride>, StoreError>;
}
