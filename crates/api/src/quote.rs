// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The quote operation at the API boundary.
//!
//! Validates the raw request into a [`StayQuery`], drives the core engine,
//! and shapes the computed quote into the wire response. All validation
//! happens before the store or the cache is touched.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{NightPriceResponse, QuoteRequest, QuoteResponse, RoomQuoteResponse};
use stayquote::{AvailabilityStore, Quote, QuoteCache, StayQuery, quote_stay};
use stayquote_domain::{HotelId, StayRange, format_ymd, parse_ymd, validate_guests,
    validate_hotel_id};

/// Validates a raw quote request into a [`StayQuery`].
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the offending field if the
/// hotel id is empty, either date fails to parse, the range is invalid,
/// or the guest count is below 1.
pub fn parse_quote_request(request: &QuoteRequest) -> Result<StayQuery, ApiError> {
    validate_hotel_id(&request.hotel_id).map_err(translate_domain_error)?;

    let check_in = parse_ymd(&request.check_in).map_err(|err| ApiError::InvalidInput {
        field: String::from("check_in"),
        message: err.to_string(),
    })?;
    let check_out = parse_ymd(&request.check_out).map_err(|err| ApiError::InvalidInput {
        field: String::from("check_out"),
        message: err.to_string(),
    })?;

    let range = StayRange::new(check_in, check_out).map_err(translate_domain_error)?;
    let guests = validate_guests(request.guests).map_err(translate_domain_error)?;

    Ok(StayQuery::new(
        HotelId::new(&request.hotel_id),
        range,
        guests,
    ))
}

/// Shapes a computed quote into the wire response.
#[must_use]
pub fn quote_to_response(quote: &Quote) -> QuoteResponse {
    QuoteResponse {
        nights: quote.nights,
        currency: quote.currency.to_string(),
        rooms: quote
            .rooms
            .iter()
            .map(|room| RoomQuoteResponse {
                room_type_id: room.room_type_id.value().to_string(),
                name: room.name.clone(),
                capacity: room.capacity,
                total: room.total,
                breakdown: room
                    .breakdown
                    .iter()
                    .map(|night| NightPriceResponse {
                        date: format_ymd(night.date),
                        price: night.price,
                    })
                    .collect(),
                available_all_nights: room.available_all_nights,
            })
            .collect(),
    }
}

/// Computes an availability and pricing quote for a stay.
///
/// This function:
/// - Validates the request before any I/O
/// - Drives the core pipeline (cache → store reads → aggregation)
/// - Translates any errors to API errors
/// - Shapes the result into the wire response
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for validation failures and
/// `ApiError::Internal` for store failures.
pub fn quote<S: AvailabilityStore>(
    store: &mut S,
    cache: &QuoteCache,
    request: &QuoteRequest,
) -> Result<QuoteResponse, ApiError> {
    let query = parse_quote_request(request)?;
    let computed = quote_stay(store, cache, &query).map_err(translate_core_error)?;
    Ok(quote_to_response(&computed))
}
