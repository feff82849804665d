// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a hotel identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidHotelId` if the identifier is empty or
/// all whitespace.
pub fn validate_hotel_id(hotel_id: &str) -> Result<(), DomainError> {
    if hotel_id.trim().is_empty() {
        return Err(DomainError::InvalidHotelId(String::from(
            "Hotel id cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a room type identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidRoomTypeId` if the identifier is empty or
/// all whitespace.
pub fn validate_room_type_id(room_type_id: &str) -> Result<(), DomainError> {
    if room_type_id.trim().is_empty() {
        return Err(DomainError::InvalidRoomTypeId(String::from(
            "Room type id cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a display name (hotel or room type).
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates and narrows a room capacity.
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` if the capacity is below 1.
pub fn validate_capacity(capacity: i64) -> Result<u32, DomainError> {
    u32::try_from(capacity)
        .ok()
        .filter(|c| *c >= 1)
        .ok_or(DomainError::InvalidCapacity { capacity })
}

/// Validates a nightly price.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the price is negative.
pub const fn validate_price(price: i64) -> Result<i64, DomainError> {
    if price < 0 {
        return Err(DomainError::InvalidPrice { price });
    }
    Ok(price)
}

/// Validates an available unit count.
///
/// Zero is valid: it marks a date as sold out, which is distinct from
/// having no record at all.
///
/// # Errors
///
/// Returns `DomainError::InvalidAvailability` if the count is negative.
pub const fn validate_available(available: i64) -> Result<i64, DomainError> {
    if available < 0 {
        return Err(DomainError::InvalidAvailability { available });
    }
    Ok(available)
}

/// Validates and narrows a guest count.
///
/// # Errors
///
/// Returns `DomainError::InvalidGuestCount` if the count is below 1.
pub fn validate_guests(guests: i64) -> Result<u32, DomainError> {
    u32::try_from(guests)
        .ok()
        .filter(|g| *g >= 1)
        .ok_or(DomainError::InvalidGuestCount { guests })
}
