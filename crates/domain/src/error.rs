// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Check-out is not strictly after check-in.
    CheckOutNotAfterCheckIn {
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// The stay covers fewer nights than the minimum of one.
    StayTooShort {
        /// The computed night count.
        nights: i64,
    },
    /// The stay exceeds the maximum supported night count.
    StayTooLong {
        /// The computed night count.
        nights: i64,
    },
    /// Guest count must be at least one.
    InvalidGuestCount {
        /// The invalid guest count.
        guests: i64,
    },
    /// Hotel identifier is empty or invalid.
    InvalidHotelId(String),
    /// Room type identifier is empty or invalid.
    InvalidRoomTypeId(String),
    /// Display name is empty or invalid.
    InvalidName(String),
    /// Room capacity must be at least one guest.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: i64,
    },
    /// Nightly price must not be negative.
    InvalidPrice {
        /// The invalid price value.
        price: i64,
    },
    /// Available unit count must not be negative.
    InvalidAvailability {
        /// The invalid available count.
        available: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::CheckOutNotAfterCheckIn { .. } => {
                write!(f, "checkOut must be after checkIn")
            }
            Self::StayTooShort { .. } => write!(f, "Nights must be >= 1"),
            Self::StayTooLong { .. } => write!(f, "Max 30 nights"),
            Self::InvalidGuestCount { .. } => write!(f, "Guests must be >= 1"),
            Self::InvalidHotelId(msg) => write!(f, "Invalid hotel id: {msg}"),
            Self::InvalidRoomTypeId(msg) => write!(f, "Invalid room type id: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be at least 1")
            }
            Self::InvalidPrice { price } => {
                write!(f, "Invalid price: {price}. Must not be negative")
            }
            Self::InvalidAvailability { available } => {
                write!(f, "Invalid available count: {available}. Must not be negative")
            }
        }
    }
}

impl std::error::Error for DomainError {}
