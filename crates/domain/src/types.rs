// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// The system's base currency. All prices are integer amounts of this
/// currency; there is no multi-currency conversion anywhere in the engine.
pub const BASE_CURRENCY: &str = "VND";

/// Opaque identifier for a hotel.
///
/// Hotel identifiers are supplied by the catalog owner and treated as
/// opaque strings; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotelId {
    /// The identifier value.
    value: String,
}

impl HotelId {
    /// Creates a new `HotelId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque identifier for a room type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomTypeId {
    /// The identifier value.
    value: String,
}

impl RoomTypeId {
    /// Creates a new `RoomTypeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A hotel in the catalog.
///
/// The quote engine only ever reads hotels; the catalog is owned by the
/// admin/seed surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// The hotel identifier.
    pub hotel_id: HotelId,
    /// The hotel display name.
    pub name: String,
}

impl Hotel {
    /// Creates a new `Hotel`.
    #[must_use]
    pub const fn new(hotel_id: HotelId, name: String) -> Self {
        Self { hotel_id, name }
    }
}

/// A bookable room category within a hotel (not an individual physical
/// room).
///
/// Read-only from the quote engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    /// The room type identifier.
    pub room_type_id: RoomTypeId,
    /// The hotel this room type belongs to.
    pub hotel_id: HotelId,
    /// The room type display name (e.g., "Deluxe Double").
    pub name: String,
    /// Maximum number of guests the room type accommodates.
    pub capacity: u32,
    /// Default nightly price in [`BASE_CURRENCY`] units, used for any
    /// night without an explicit [`PriceOverride`].
    pub base_price: i64,
}

impl RoomType {
    /// Creates a new `RoomType`.
    #[must_use]
    pub const fn new(
        room_type_id: RoomTypeId,
        hotel_id: HotelId,
        name: String,
        capacity: u32,
        base_price: i64,
    ) -> Self {
        Self {
            room_type_id,
            hotel_id,
            name,
            capacity,
            base_price,
        }
    }
}

/// Count of sellable units of a room type on a specific date.
///
/// Lifecycle is owned by the inventory-management subsystem; the quote
/// engine only reads these records. A count at or below zero means the
/// room type is not sellable on that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// The room type this record applies to.
    pub room_type_id: RoomTypeId,
    /// The calendar date this record applies to.
    pub date: Date,
    /// Number of sellable units on this date.
    pub available: i64,
}

impl InventoryRecord {
    /// Creates a new `InventoryRecord`.
    #[must_use]
    pub const fn new(room_type_id: RoomTypeId, date: Date, available: i64) -> Self {
        Self {
            room_type_id,
            date,
            available,
        }
    }
}

/// A date-specific nightly price that supersedes a room type's base price
/// (e.g., seasonal pricing). Absence for a date means "use the base
/// price".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOverride {
    /// The room type this override applies to.
    pub room_type_id: RoomTypeId,
    /// The calendar date this override applies to.
    pub date: Date,
    /// Overriding nightly price in [`BASE_CURRENCY`] units.
    pub price: i64,
}

impl PriceOverride {
    /// Creates a new `PriceOverride`.
    #[must_use]
    pub const fn new(room_type_id: RoomTypeId, date: Date, price: i64) -> Self {
        Self {
            room_type_id,
            date,
            price,
        }
    }
}
