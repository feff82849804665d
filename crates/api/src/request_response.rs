// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These types are distinct from domain types and represent the wire
//! contract. Numeric fields arrive as wide signed integers and are
//! narrowed during validation so that out-of-range values produce our
//! error messages instead of deserialization failures.

use serde::{Deserialize, Serialize};

/// Request body for the quote operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The hotel to quote.
    pub hotel_id: String,
    /// Check-in date (ISO `YYYY-MM-DD`).
    pub check_in: String,
    /// Check-out date (ISO `YYYY-MM-DD`), strictly after check-in.
    pub check_out: String,
    /// Number of guests, at least 1.
    pub guests: i64,
}

/// One night of a room quote's price breakdown, as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightPriceResponse {
    /// The occupied night (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Effective nightly price.
    pub price: i64,
}

/// One qualifying room type in a quote response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomQuoteResponse {
    /// The room type identifier.
    pub room_type_id: String,
    /// The room type display name.
    pub name: String,
    /// Maximum guests the room type accommodates.
    pub capacity: u32,
    /// Sum of the nightly effective prices.
    pub total: i64,
    /// Night-by-night prices in date order.
    pub breakdown: Vec<NightPriceResponse>,
    /// Always `true` for entries present in the response: room types that
    /// fail any night are dropped before serialization.
    pub available_all_nights: bool,
}

/// Response body for the quote operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Number of nights the quote covers.
    pub nights: u32,
    /// The system's base currency.
    pub currency: String,
    /// Qualifying room quotes in store order.
    pub rooms: Vec<RoomQuoteResponse>,
}

/// Request body for creating a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHotelRequest {
    /// The hotel identifier.
    pub hotel_id: String,
    /// The hotel display name.
    pub name: String,
}

/// Response body for a successful hotel creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHotelResponse {
    /// The created hotel's identifier.
    pub hotel_id: String,
    /// A success message.
    pub message: String,
}

/// Request body for creating a room type under a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomTypeRequest {
    /// The room type identifier.
    pub room_type_id: String,
    /// The owning hotel's identifier.
    pub hotel_id: String,
    /// The room type display name.
    pub name: String,
    /// Maximum guests, at least 1.
    pub capacity: i64,
    /// Default nightly price, non-negative.
    pub base_price: i64,
}

/// Response body for a successful room type creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomTypeResponse {
    /// The created room type's identifier.
    pub room_type_id: String,
    /// The owning hotel's identifier.
    pub hotel_id: String,
    /// A success message.
    pub message: String,
}

/// Request body for upserting one inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInventoryRequest {
    /// The room type the record applies to.
    pub room_type_id: String,
    /// The calendar date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Sellable unit count, non-negative (zero marks the date sold out).
    pub available: i64,
}

/// Request body for upserting one price override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPriceOverrideRequest {
    /// The room type the override applies to.
    pub room_type_id: String,
    /// The calendar date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Overriding nightly price, non-negative.
    pub price: i64,
}

/// Response body for a successful calendar upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertResponse {
    /// The room type written.
    pub room_type_id: String,
    /// The date written (ISO `YYYY-MM-DD`).
    pub date: String,
    /// A success message.
    pub message: String,
}

/// One room type in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeInfo {
    /// The room type identifier.
    pub room_type_id: String,
    /// The room type display name.
    pub name: String,
    /// Maximum guests the room type accommodates.
    pub capacity: u32,
    /// Default nightly price.
    pub base_price: i64,
}

/// Response body for listing a hotel's room types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomTypesResponse {
    /// The hotel whose room types are listed.
    pub hotel_id: String,
    /// The room types, ordered by ascending id.
    pub room_types: Vec<RoomTypeInfo>,
}
