// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod stay_range;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use stay_range::{
    MAX_STAY_NIGHTS, NightIter, StayRange, format_ymd, format_ymd_compact, parse_ymd,
};
pub use types::{
    BASE_CURRENCY, Hotel, HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId,
};
pub use validation::{
    validate_available, validate_capacity, validate_guests, validate_hotel_id, validate_name,
    validate_price, validate_room_type_id,
};
