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

mod aggregate;
mod engine;
mod error;
mod lookup;
mod quote;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{aggregate_quote, build_room_quote};
pub use engine::{QuoteCache, quote_stay};
pub use error::CoreError;
pub use lookup::{InventoryGrid, PriceGrid};
pub use quote::{NightPrice, Quote, RoomQuote, StayQuery};
pub use store::{AvailabilityStore, StoreError};
