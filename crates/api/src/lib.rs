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
    clippy::all
)]

mod admin;
mod error;
mod quote;
mod request_response;

#[cfg(test)]
mod tests;

pub use admin::{
    validate_create_hotel, validate_create_room_type, validate_set_inventory,
    validate_set_price_override,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use quote::{parse_quote_request, quote, quote_to_response};
pub use request_response::{
    CreateHotelRequest, CreateHotelResponse, CreateRoomTypeRequest, CreateRoomTypeResponse,
    ListRoomTypesResponse, NightPriceResponse, QuoteRequest, QuoteResponse, RoomQuoteResponse,
    RoomTypeInfo, SetInventoryRequest, SetPriceOverrideRequest, UpsertResponse,
};
