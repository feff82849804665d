// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation for the catalog admin surface.
//!
//! Each function translates a raw admin request into a validated domain
//! value; persistence is the caller's concern. Booking-driven inventory
//! mutation lives in a separate subsystem — this surface only seeds and
//! corrects the catalog.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    CreateHotelRequest, CreateRoomTypeRequest, SetInventoryRequest, SetPriceOverrideRequest,
};
use stayquote_domain::{
    Hotel, HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, parse_ymd,
    validate_available, validate_capacity, validate_hotel_id, validate_name, validate_price,
    validate_room_type_id,
};
use time::Date;

fn parse_date_field(value: &str) -> Result<Date, ApiError> {
    parse_ymd(value).map_err(|err| ApiError::InvalidInput {
        field: String::from("date"),
        message: err.to_string(),
    })
}

/// Validates a hotel creation request into a domain [`Hotel`].
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the id is empty or the name is
/// empty.
pub fn validate_create_hotel(request: &CreateHotelRequest) -> Result<Hotel, ApiError> {
    validate_hotel_id(&request.hotel_id).map_err(translate_domain_error)?;
    validate_name(&request.name).map_err(translate_domain_error)?;

    Ok(Hotel::new(
        HotelId::new(&request.hotel_id),
        request.name.clone(),
    ))
}

/// Validates a room type creation request into a domain [`RoomType`].
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if any identifier or the name is
/// empty, the capacity is below 1, or the base price is negative.
pub fn validate_create_room_type(request: &CreateRoomTypeRequest) -> Result<RoomType, ApiError> {
    validate_room_type_id(&request.room_type_id).map_err(translate_domain_error)?;
    validate_hotel_id(&request.hotel_id).map_err(translate_domain_error)?;
    validate_name(&request.name).map_err(translate_domain_error)?;
    let capacity = validate_capacity(request.capacity).map_err(translate_domain_error)?;
    let base_price = validate_price(request.base_price).map_err(translate_domain_error)?;

    Ok(RoomType::new(
        RoomTypeId::new(&request.room_type_id),
        HotelId::new(&request.hotel_id),
        request.name.clone(),
        capacity,
        base_price,
    ))
}

/// Validates an inventory upsert request into a domain
/// [`InventoryRecord`].
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the room type id is empty, the
/// date fails to parse, or the count is negative.
pub fn validate_set_inventory(request: &SetInventoryRequest) -> Result<InventoryRecord, ApiError> {
    validate_room_type_id(&request.room_type_id).map_err(translate_domain_error)?;
    let date = parse_date_field(&request.date)?;
    let available = validate_available(request.available).map_err(translate_domain_error)?;

    Ok(InventoryRecord::new(
        RoomTypeId::new(&request.room_type_id),
        date,
        available,
    ))
}

/// Validates a price override upsert request into a domain
/// [`PriceOverride`].
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the room type id is empty, the
/// date fails to parse, or the price is negative.
pub fn validate_set_price_override(
    request: &SetPriceOverrideRequest,
) -> Result<PriceOverride, ApiError> {
    validate_room_type_id(&request.room_type_id).map_err(translate_domain_error)?;
    let date = parse_date_field(&request.date)?;
    let price = validate_price(request.price).map_err(translate_domain_error)?;

    Ok(PriceOverride::new(
        RoomTypeId::new(&request.room_type_id),
        date,
        price,
    ))
}
