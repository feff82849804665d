// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    validate_available, validate_capacity, validate_guests, validate_hotel_id, validate_name,
    validate_price, validate_room_type_id,
};

#[test]
fn test_hotel_id_must_not_be_empty() {
    assert!(validate_hotel_id("H1").is_ok());
    assert!(matches!(
        validate_hotel_id(""),
        Err(DomainError::InvalidHotelId(_))
    ));
    assert!(matches!(
        validate_hotel_id("   "),
        Err(DomainError::InvalidHotelId(_))
    ));
}

#[test]
fn test_room_type_id_must_not_be_empty() {
    assert!(validate_room_type_id("RT1").is_ok());
    assert!(matches!(
        validate_room_type_id(""),
        Err(DomainError::InvalidRoomTypeId(_))
    ));
}

#[test]
fn test_name_must_not_be_empty() {
    assert!(validate_name("Deluxe Double").is_ok());
    assert!(matches!(validate_name(""), Err(DomainError::InvalidName(_))));
}

#[test]
fn test_capacity_bounds() {
    assert_eq!(validate_capacity(1).unwrap(), 1);
    assert_eq!(validate_capacity(8).unwrap(), 8);
    assert!(matches!(
        validate_capacity(0),
        Err(DomainError::InvalidCapacity { capacity: 0 })
    ));
    assert!(matches!(
        validate_capacity(-2),
        Err(DomainError::InvalidCapacity { capacity: -2 })
    ));
}

#[test]
fn test_price_must_not_be_negative() {
    assert_eq!(validate_price(0).unwrap(), 0);
    assert_eq!(validate_price(500_000).unwrap(), 500_000);
    assert!(matches!(
        validate_price(-1),
        Err(DomainError::InvalidPrice { price: -1 })
    ));
}

#[test]
fn test_zero_availability_is_valid() {
    // Zero marks a sold-out date; only negative counts are rejected.
    assert_eq!(validate_available(0).unwrap(), 0);
    assert!(matches!(
        validate_available(-3),
        Err(DomainError::InvalidAvailability { available: -3 })
    ));
}

#[test]
fn test_guest_count_bounds() {
    assert_eq!(validate_guests(1).unwrap(), 1);
    assert_eq!(validate_guests(4).unwrap(), 4);
    assert!(matches!(
        validate_guests(0),
        Err(DomainError::InvalidGuestCount { guests: 0 })
    ));
    assert!(matches!(
        validate_guests(-1),
        Err(DomainError::InvalidGuestCount { guests: -1 })
    ));
}
