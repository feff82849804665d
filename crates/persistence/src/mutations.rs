// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed and correction writes for the catalog and calendar tables.
//!
//! The quote engine itself never writes; these mutations back the admin
//! surface and test fixtures. Calendar writes are upserts keyed on
//! `(room_type_id, date)` so re-seeding a date replaces the prior value.

use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::cast::ToPrimitive;
use stayquote_domain::{Hotel, InventoryRecord, PriceOverride, RoomType, format_ymd};

use crate::diesel_schema::{hotels, inventory, price_calendar, room_types};
use crate::error::PersistenceError;

/// Inserts a new hotel.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateRecord` if the hotel id already
/// exists, or another error if the insert fails.
pub fn insert_hotel(conn: &mut SqliteConnection, hotel: &Hotel) -> Result<(), PersistenceError> {
    diesel::insert_into(hotels::table)
        .values((
            hotels::hotel_id.eq(hotel.hotel_id.value()),
            hotels::name.eq(&hotel.name),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a new room type.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateRecord` if the room type id
/// already exists, `PersistenceError::ForeignKeyViolation` if the hotel
/// does not exist, or another error if the insert fails.
pub fn insert_room_type(
    conn: &mut SqliteConnection,
    room_type: &RoomType,
) -> Result<(), PersistenceError> {
    diesel::insert_into(room_types::table)
        .values((
            room_types::room_type_id.eq(room_type.room_type_id.value()),
            room_types::hotel_id.eq(room_type.hotel_id.value()),
            room_types::name.eq(&room_type.name),
            room_types::capacity.eq(room_type.capacity.to_i32().unwrap_or(0)),
            room_types::base_price.eq(room_type.base_price),
        ))
        .execute(conn)?;
    Ok(())
}

/// Upserts one inventory record, replacing any prior value for the same
/// `(room_type_id, date)`.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the room type does
/// not exist, or another error if the write fails.
pub fn upsert_inventory(
    conn: &mut SqliteConnection,
    record: &InventoryRecord,
) -> Result<(), PersistenceError> {
    diesel::replace_into(inventory::table)
        .values((
            inventory::room_type_id.eq(record.room_type_id.value()),
            inventory::date.eq(format_ymd(record.date)),
            inventory::available.eq(record.available),
        ))
        .execute(conn)?;
    Ok(())
}

/// Upserts one price override, replacing any prior value for the same
/// `(room_type_id, date)`.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the room type does
/// not exist, or another error if the write fails.
pub fn upsert_price_override(
    conn: &mut SqliteConnection,
    over: &PriceOverride,
) -> Result<(), PersistenceError> {
    diesel::replace_into(price_calendar::table)
        .values((
            price_calendar::room_type_id.eq(over.room_type_id.value()),
            price_calendar::date.eq(format_ymd(over.date)),
            price_calendar::price.eq(over.price),
        ))
        .execute(conn)?;
    Ok(())
}
