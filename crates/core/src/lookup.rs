// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Point-lookup structures over the bulk-fetched calendar records.
//!
//! Each grid is built once from a single bulk query and then answers
//! per-night lookups with an explicit, named default policy:
//!
//! - [`InventoryGrid::available_on`] — no record means **zero** sellable
//!   units
//! - [`PriceGrid::price_on`] — no override means the room type's **base
//!   price**
//!
//! The defaults live here, on the lookup structures, rather than as inline
//! fallbacks scattered through the aggregation.

use std::collections::HashMap;
use stayquote_domain::{InventoryRecord, PriceOverride, RoomTypeId};
use time::Date;

/// Per-night available-unit counts, keyed by room type and date.
#[derive(Debug, Default)]
pub struct InventoryGrid {
    /// room type → date → available units
    available: HashMap<RoomTypeId, HashMap<Date, i64>>,
}

impl InventoryGrid {
    /// Builds a grid from bulk-fetched inventory records.
    ///
    /// Duplicate `(room type, date)` records keep the last value seen.
    #[must_use]
    pub fn from_records(records: Vec<InventoryRecord>) -> Self {
        let mut available: HashMap<RoomTypeId, HashMap<Date, i64>> = HashMap::new();
        for record in records {
            available
                .entry(record.room_type_id)
                .or_default()
                .insert(record.date, record.available);
        }
        Self { available }
    }

    /// Returns the available unit count for a room type on a date.
    ///
    /// Default policy: a date with no inventory record has zero sellable
    /// units.
    #[must_use]
    pub fn available_on(&self, room_type_id: &RoomTypeId, date: Date) -> i64 {
        self.available
            .get(room_type_id)
            .and_then(|dates| dates.get(&date))
            .copied()
            .unwrap_or(0)
    }
}

/// Per-night price overrides, keyed by room type and date.
#[derive(Debug, Default)]
pub struct PriceGrid {
    /// room type → date → overriding nightly price
    overrides: HashMap<RoomTypeId, HashMap<Date, i64>>,
}

impl PriceGrid {
    /// Builds a grid from bulk-fetched price overrides.
    ///
    /// Duplicate `(room type, date)` records keep the last value seen.
    #[must_use]
    pub fn from_overrides(overrides: Vec<PriceOverride>) -> Self {
        let mut map: HashMap<RoomTypeId, HashMap<Date, i64>> = HashMap::new();
        for over in overrides {
            map.entry(over.room_type_id)
                .or_default()
                .insert(over.date, over.price);
        }
        Self { overrides: map }
    }

    /// Returns the effective nightly price for a room type on a date.
    ///
    /// Default policy: a date with no override sells at `base_price`.
    #[must_use]
    pub fn price_on(&self, room_type_id: &RoomTypeId, date: Date, base_price: i64) -> i64 {
        self.overrides
            .get(room_type_id)
            .and_then(|dates| dates.get(&date))
            .copied()
            .unwrap_or(base_price)
    }
}
