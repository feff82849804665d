// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quote aggregation.
//!
//! For every candidate room type, walk the stay's nights in chronological
//! order, pull each night's availability and effective price from the
//! lookup grids, and fold them into a [`RoomQuote`].
//!
//! ## Invariants
//!
//! - The breakdown holds exactly one entry per night of the stay, in date
//!   order, even for room types that turn out unavailable — an
//!   unavailable night clears the flag but never truncates the scan
//! - Totals are plain integer sums; prices are integer currency units and
//!   no rounding ever occurs
//! - Candidates arrive already capacity-filtered; this module only applies
//!   the all-nights availability filter

use crate::lookup::{InventoryGrid, PriceGrid};
use crate::quote::{NightPrice, RoomQuote};
use stayquote_domain::{RoomType, StayRange};

/// Computes the quote for a single room type across the stay.
///
/// The returned quote carries the honest `available_all_nights` flag;
/// filtering happens in [`aggregate_quote`].
#[must_use]
pub fn build_room_quote(
    room_type: &RoomType,
    range: &StayRange,
    inventory: &InventoryGrid,
    prices: &PriceGrid,
) -> RoomQuote {
    let mut total: i64 = 0;
    let mut available_all_nights = true;
    let mut breakdown: Vec<NightPrice> = Vec::with_capacity(range.iter_nights().len());

    for night in range.iter_nights() {
        let available = inventory.available_on(&room_type.room_type_id, night);
        if available <= 0 {
            // Keep scanning so the breakdown stays complete for
            // diagnostics; only the flag records the shortfall.
            available_all_nights = false;
        }

        let price = prices.price_on(&room_type.room_type_id, night, room_type.base_price);
        total += price;
        breakdown.push(NightPrice { date: night, price });
    }

    RoomQuote {
        room_type_id: room_type.room_type_id.clone(),
        name: room_type.name.clone(),
        capacity: room_type.capacity,
        total,
        breakdown,
        available_all_nights,
    }
}

/// Computes room quotes for every candidate room type and filters to
/// those sellable on every night of the stay.
///
/// Output order follows the input order of `room_types` (store order).
#[must_use]
pub fn aggregate_quote(
    room_types: &[RoomType],
    range: &StayRange,
    inventory: &InventoryGrid,
    prices: &PriceGrid,
) -> Vec<RoomQuote> {
    room_types
        .iter()
        .map(|room_type| build_room_quote(room_type, range, inventory, prices))
        .filter(|quote| quote.available_all_nights)
        .collect()
}
