// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stayquote_domain::{BASE_CURRENCY, HotelId, RoomTypeId, StayRange};
use time::Date;

/// A validated quote query: which hotel, which nights, how many guests.
///
/// Constructed fresh per request, after all field validation has
/// succeeded; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayQuery {
    /// The hotel being quoted.
    hotel_id: HotelId,
    /// The validated stay range.
    range: StayRange,
    /// Number of guests the room must accommodate.
    guests: u32,
}

impl StayQuery {
    /// Creates a new `StayQuery`.
    #[must_use]
    pub const fn new(hotel_id: HotelId, range: StayRange, guests: u32) -> Self {
        Self {
            hotel_id,
            range,
            guests,
        }
    }

    /// Returns the hotel identifier.
    #[must_use]
    pub const fn hotel_id(&self) -> &HotelId {
        &self.hotel_id
    }

    /// Returns the stay range.
    #[must_use]
    pub const fn range(&self) -> &StayRange {
        &self.range
    }

    /// Returns the guest count.
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.guests
    }
}

/// One night of a room quote's price breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightPrice {
    /// The occupied night.
    pub date: Date,
    /// Effective nightly price: the date's override, or the room type's
    /// base price when no override exists.
    pub price: i64,
}

/// The computed quote for a single room type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomQuote {
    /// The quoted room type.
    pub room_type_id: RoomTypeId,
    /// The room type display name.
    pub name: String,
    /// Maximum guests the room type accommodates.
    pub capacity: u32,
    /// Sum of the nightly effective prices.
    pub total: i64,
    /// Night-by-night prices in chronological order, one entry per night
    /// of the stay. Complete even when some night is unavailable.
    pub breakdown: Vec<NightPrice>,
    /// True only if every night of the stay has at least one sellable
    /// unit. Room quotes that fail this are filtered out of the final
    /// result; the flag stays on the type so the filter is testable.
    pub available_all_nights: bool,
}

/// The computed, ephemeral result of an availability/pricing query.
///
/// Never persisted; memoized only through the quote cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Number of nights the quote covers.
    pub nights: u32,
    /// The system's base currency.
    pub currency: &'static str,
    /// Room quotes that passed both the capacity filter and the all-nights
    /// availability filter, in store order.
    pub rooms: Vec<RoomQuote>,
}

impl Quote {
    /// Creates a quote with no qualifying room types.
    #[must_use]
    pub const fn empty(nights: u32) -> Self {
        Self {
            nights,
            currency: BASE_CURRENCY,
            rooms: Vec::new(),
        }
    }
}
