// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The quote pipeline.
//!
//! A quote request enters the cache; on a miss it flows through the store
//! reads (capacity-filtered room types, then inventory and price
//! calendar) into the aggregator, and the result is written back into the
//! cache before being returned.
//!
//! Within one request the steps are strictly ordered: cache check →
//! capacity filter → bulk lookups → aggregation → cache write. Across
//! requests there is no mutual exclusion: two requests racing on a cold
//! key both compute and both write the same deterministic value.

use crate::aggregate::aggregate_quote;
use crate::error::CoreError;
use crate::lookup::{InventoryGrid, PriceGrid};
use crate::quote::{Quote, StayQuery};
use crate::store::AvailabilityStore;
use std::sync::Arc;
use stayquote_cache::{TtlCache, quote_cache_key};
use stayquote_domain::{BASE_CURRENCY, RoomTypeId};
use tracing::debug;

/// The memoization cache for computed quotes.
pub type QuoteCache = TtlCache<Quote>;

/// Computes the availability and pricing quote for a stay.
///
/// On a cache hit the stores are never touched. On a miss:
///
/// 1. Fetch the hotel's room types with `capacity >= guests`.
/// 2. If none qualify, short-circuit to an empty quote — no calendar
///    lookups are performed, but the empty quote is still cached so
///    repeated unsatisfiable queries do not hammer the store.
/// 3. Otherwise bulk-fetch inventory and price overrides for the night
///    range, aggregate per room type, and cache the result.
///
/// # Errors
///
/// Propagates store read failures as [`CoreError::StoreFailure`]. There is
/// no partial-result mode: either a full quote is produced or an error is
/// returned, and nothing is cached on error.
pub fn quote_stay<S: AvailabilityStore>(
    store: &mut S,
    cache: &QuoteCache,
    query: &StayQuery,
) -> Result<Arc<Quote>, CoreError> {
    let cache_key = quote_cache_key(query.hotel_id(), query.range(), query.guests());

    if let Some(cached) = cache.get(&cache_key) {
        debug!(key = %cache_key, "quote cache hit");
        return Ok(cached);
    }
    debug!(key = %cache_key, "quote cache miss");

    let room_types = store.room_types_with_capacity(query.hotel_id(), query.guests())?;
    if room_types.is_empty() {
        return Ok(cache.insert(cache_key, Quote::empty(query.range().nights())));
    }

    let room_type_ids: Vec<RoomTypeId> = room_types
        .iter()
        .map(|room_type| room_type.room_type_id.clone())
        .collect();

    let inventory =
        InventoryGrid::from_records(store.inventory_for_stay(&room_type_ids, query.range())?);
    let prices = PriceGrid::from_overrides(
        store.price_overrides_for_stay(&room_type_ids, query.range())?,
    );

    let rooms = aggregate_quote(&room_types, query.range(), &inventory, &prices);
    let quote = Quote {
        nights: query.range().nights(),
        currency: BASE_CURRENCY,
        rooms,
    };

    Ok(cache.insert(cache_key, quote))
}
