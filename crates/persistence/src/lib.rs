// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the StayQuote availability engine.
//!
//! Provides Diesel/`SQLite` storage for the room type catalog, nightly
//! inventory, and the price calendar, and adapts it to the engine's
//! [`AvailabilityStore`] boundary.
//!
//! `SQLite` is the only backend: file databases for deployments (with WAL
//! journaling), uniquely-named shared in-memory databases for tests.
//! Migrations are embedded and applied on every connection setup, and
//! foreign key enforcement is verified at startup so calendar rows can
//! never reference a missing room type.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use stayquote::{AvailabilityStore, StoreError};
use stayquote_domain::{
    Hotel, HotelId, InventoryRecord, PriceOverride, RoomType, RoomTypeId, StayRange,
};

mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the catalog and calendar tables.
///
/// Constructed once at startup and injected into request handling; the
/// connection is exclusive, so callers share the adapter behind a mutex.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("stayquote_memdb_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Catalog writes (admin/seed surface)
    // ========================================================================

    /// Creates a hotel.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateRecord` if the hotel id is
    /// taken.
    pub fn create_hotel(&mut self, hotel: &Hotel) -> Result<(), PersistenceError> {
        mutations::insert_hotel(&mut self.conn, hotel)
    }

    /// Creates a room type under an existing hotel.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateRecord` if the room type id is
    /// taken, or `PersistenceError::ForeignKeyViolation` if the hotel
    /// does not exist.
    pub fn create_room_type(&mut self, room_type: &RoomType) -> Result<(), PersistenceError> {
        mutations::insert_room_type(&mut self.conn, room_type)
    }

    /// Upserts one inventory record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyViolation` if the room type
    /// does not exist.
    pub fn set_inventory(&mut self, record: &InventoryRecord) -> Result<(), PersistenceError> {
        mutations::upsert_inventory(&mut self.conn, record)
    }

    /// Upserts one price override.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyViolation` if the room type
    /// does not exist.
    pub fn set_price_override(&mut self, over: &PriceOverride) -> Result<(), PersistenceError> {
        mutations::upsert_price_override(&mut self.conn, over)
    }

    // ========================================================================
    // Catalog reads
    // ========================================================================

    /// Checks whether a hotel exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn hotel_exists(&mut self, hotel_id: &HotelId) -> Result<bool, PersistenceError> {
        queries::hotel_exists(&mut self.conn, hotel_id)
    }

    /// Checks whether a room type exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn room_type_exists(
        &mut self,
        room_type_id: &RoomTypeId,
    ) -> Result<bool, PersistenceError> {
        queries::room_type_exists(&mut self.conn, room_type_id)
    }

    /// Lists every room type of a hotel, ordered by ascending room-type
    /// id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_room_types(
        &mut self,
        hotel_id: &HotelId,
    ) -> Result<Vec<RoomType>, PersistenceError> {
        queries::list_room_types(&mut self.conn, hotel_id)
    }
}

/// Maps a persistence failure onto the engine's store boundary.
fn to_store_error(err: PersistenceError) -> StoreError {
    match err {
        PersistenceError::DatabaseConnectionFailed(msg) => StoreError::Unavailable(msg),
        other => StoreError::QueryFailed(other.to_string()),
    }
}

impl AvailabilityStore for Persistence {
    fn room_types_with_capacity(
        &mut self,
        hotel_id: &HotelId,
        min_capacity: u32,
    ) -> Result<Vec<RoomType>, StoreError> {
        queries::room_types_with_capacity(&mut self.conn, hotel_id, min_capacity)
            .map_err(to_store_error)
    }

    fn inventory_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<InventoryRecord>, StoreError> {
        queries::inventory_for_stay(&mut self.conn, room_type_ids, range).map_err(to_store_error)
    }

    fn price_overrides_for_stay(
        &mut self,
        room_type_ids: &[RoomTypeId],
        range: &StayRange,
    ) -> Result<Vec<PriceOverride>, StoreError> {
        queries::price_overrides_for_stay(&mut self.conn, room_type_ids, range)
            .map_err(to_store_error)
    }
}
