// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read queries over the catalog and calendar tables.
//!
//! The calendar queries are the bulk reads behind a quote: one query per
//! table for the whole night range, never per-night point reads.

use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::cast::ToPrimitive;
use stayquote_domain::{
    HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, StayRange, format_ymd,
    parse_ymd,
};

use crate::diesel_schema::{hotels, inventory, price_calendar, room_types};
use crate::error::PersistenceError;

/// Checks whether a hotel exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn hotel_exists(
    conn: &mut SqliteConnection,
    hotel_id: &HotelId,
) -> Result<bool, PersistenceError> {
    let count = hotels::table
        .filter(hotels::hotel_id.eq(hotel_id.value()))
        .count()
        .get_result::<i64>(conn)?;
    Ok(count > 0)
}

/// Checks whether a room type exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn room_type_exists(
    conn: &mut SqliteConnection,
    room_type_id: &RoomTypeId,
) -> Result<bool, PersistenceError> {
    let count = room_types::table
        .filter(room_types::room_type_id.eq(room_type_id.value()))
        .count()
        .get_result::<i64>(conn)?;
    Ok(count > 0)
}

/// Lists every room type of a hotel, ordered by ascending room-type id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_room_types(
    conn: &mut SqliteConnection,
    hotel_id: &HotelId,
) -> Result<Vec<RoomType>, PersistenceError> {
    let rows = room_types::table
        .filter(room_types::hotel_id.eq(hotel_id.value()))
        .order(room_types::room_type_id.asc())
        .select((
            room_types::room_type_id,
            room_types::hotel_id,
            room_types::name,
            room_types::capacity,
            room_types::base_price,
        ))
        .load::<(String, String, String, i32, i64)>(conn)?;

    Ok(rows.into_iter().map(row_to_room_type).collect())
}

/// Lists the room types of a hotel whose capacity is at least
/// `min_capacity`, ordered by ascending room-type id.
///
/// The ordering makes quote output deterministic; callers rely on it.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn room_types_with_capacity(
    conn: &mut SqliteConnection,
    hotel_id: &HotelId,
    min_capacity: u32,
) -> Result<Vec<RoomType>, PersistenceError> {
    let rows = room_types::table
        .filter(room_types::hotel_id.eq(hotel_id.value()))
        .filter(room_types::capacity.ge(min_capacity.to_i32().unwrap_or(i32::MAX)))
        .order(room_types::room_type_id.asc())
        .select((
            room_types::room_type_id,
            room_types::hotel_id,
            room_types::name,
            room_types::capacity,
            room_types::base_price,
        ))
        .load::<(String, String, String, i32, i64)>(conn)?;

    Ok(rows.into_iter().map(row_to_room_type).collect())
}

/// Fetches every inventory record for the given room types within the
/// stay's night range `[check_in, check_out)`.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is corrupt.
pub fn inventory_for_stay(
    conn: &mut SqliteConnection,
    room_type_ids: &[RoomTypeId],
    range: &StayRange,
) -> Result<Vec<InventoryRecord>, PersistenceError> {
    let ids: Vec<&str> = room_type_ids.iter().map(RoomTypeId::value).collect();
    let from = format_ymd(range.check_in());
    let to = format_ymd(range.check_out());

    let rows = inventory::table
        .filter(inventory::room_type_id.eq_any(&ids))
        .filter(inventory::date.ge(&from))
        .filter(inventory::date.lt(&to))
        .select((inventory::room_type_id, inventory::date, inventory::available))
        .load::<(String, String, i64)>(conn)?;

    rows.into_iter()
        .map(|(room_type_id, date, available)| {
            let date = parse_ymd(&date)
                .map_err(|e| PersistenceError::InvalidDateColumn(e.to_string()))?;
            Ok(InventoryRecord::new(
                RoomTypeId::new(&room_type_id),
                date,
                available,
            ))
        })
        .collect()
}

/// Fetches every price override for the given room types within the
/// stay's night range `[check_in, check_out)`.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is corrupt.
pub fn price_overrides_for_stay(
    conn: &mut SqliteConnection,
    room_type_ids: &[RoomTypeId],
    range: &StayRange,
) -> Result<Vec<PriceOverride>, PersistenceError> {
    let ids: Vec<&str> = room_type_ids.iter().map(RoomTypeId::value).collect();
    let from = format_ymd(range.check_in());
    let to = format_ymd(range.check_out());

    let rows = price_calendar::table
        .filter(price_calendar::room_type_id.eq_any(&ids))
        .filter(price_calendar::date.ge(&from))
        .filter(price_calendar::date.lt(&to))
        .select((
            price_calendar::room_type_id,
            price_calendar::date,
            price_calendar::price,
        ))
        .load::<(String, String, i64)>(conn)?;

    rows.into_iter()
        .map(|(room_type_id, date, price)| {
            let date = parse_ymd(&date)
                .map_err(|e| PersistenceError::InvalidDateColumn(e.to_string()))?;
            Ok(PriceOverride::new(
                RoomTypeId::new(&room_type_id),
                date,
                price,
            ))
        })
        .collect()
}

/// Converts a loaded room type row into the domain type.
fn row_to_room_type(row: (String, String, String, i32, i64)) -> RoomType {
    let (room_type_id, hotel_id, name, capacity, base_price) = row;
    RoomType::new(
        RoomTypeId::new(&room_type_id),
        HotelId::new(&hotel_id),
        name,
        capacity.to_u32().unwrap_or(0),
        base_price,
    )
}
