// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay range validation and night enumeration.
//!
//! A stay covers the half-open range `[check_in, check_out)`: the guest
//! occupies a room on every night from check-in up to, but not including,
//! check-out. This module is the single source of truth for "which nights
//! does this stay cover" — both the store lookups and the quote
//! aggregation consume the same night set, so their views can never drift
//! apart.
//!
//! ## Invariants
//!
//! - `check_out` is strictly after `check_in`
//! - the night count is between 1 and [`MAX_STAY_NIGHTS`] inclusive
//! - validation happens at construction, before any I/O

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The maximum number of nights a single quote may cover.
pub const MAX_STAY_NIGHTS: i64 = 30;

/// ISO calendar date format (`YYYY-MM-DD`).
const YMD: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Compact calendar date format (`YYYYMMDD`), used in cache keys.
const YMD_COMPACT: &[BorrowedFormatItem<'_>] = format_description!("[year][month][day]");

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_ymd(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(date_string, YMD).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as an ISO calendar date (`YYYY-MM-DD`).
#[must_use]
pub fn format_ymd(date: Date) -> String {
    // Formatting with a static numeric description cannot fail for a valid Date.
    date.format(YMD).unwrap_or_default()
}

/// Formats a date compactly (`YYYYMMDD`).
#[must_use]
pub fn format_ymd_compact(date: Date) -> String {
    date.format(YMD_COMPACT).unwrap_or_default()
}

/// A validated stay: check-in date, check-out date, and night count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayRange {
    /// First occupied night (inclusive).
    check_in: Date,
    /// Departure date (exclusive).
    check_out: Date,
    /// Number of occupied nights.
    nights: u32,
}

impl StayRange {
    /// Creates a validated `StayRange` from two calendar dates.
    ///
    /// # Errors
    ///
    /// - `DomainError::CheckOutNotAfterCheckIn` if `check_out` is earlier
    ///   than `check_in`
    /// - `DomainError::StayTooShort` if the stay covers zero nights
    /// - `DomainError::StayTooLong` if the stay exceeds [`MAX_STAY_NIGHTS`]
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out < check_in {
            return Err(DomainError::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            });
        }

        let nights: i64 = i64::from(check_out.to_julian_day() - check_in.to_julian_day());
        if nights < 1 {
            return Err(DomainError::StayTooShort { nights });
        }
        if nights > MAX_STAY_NIGHTS {
            return Err(DomainError::StayTooLong { nights });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Safe cast: nights is range-checked to 1..=MAX_STAY_NIGHTS above
        let nights = nights as u32;

        Ok(Self {
            check_in,
            check_out,
            nights,
        })
    }

    /// Parses and validates a `StayRange` from two ISO date strings.
    ///
    /// # Errors
    ///
    /// Returns a date-parse error for malformed input, otherwise the same
    /// range errors as [`StayRange::new`].
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, DomainError> {
        Self::new(parse_ymd(check_in)?, parse_ymd(check_out)?)
    }

    /// Returns the check-in date (first occupied night).
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date (exclusive).
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of occupied nights.
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.nights
    }

    /// Iterates the occupied nights in chronological order:
    /// `check_in` inclusive up to `check_out` exclusive.
    #[must_use]
    pub const fn iter_nights(&self) -> NightIter {
        NightIter {
            current: self.check_in,
            end: self.check_out,
        }
    }
}

/// Iterator over the nights of a stay, in chronological order.
#[derive(Debug, Clone)]
pub struct NightIter {
    current: Date,
    end: Date,
}

impl Iterator for NightIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.current >= self.end {
            return None;
        }
        let night = self.current;
        self.current = night.next_day()?;
        Some(night)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(i64::from(
            self.end.to_julian_day() - self.current.to_julian_day(),
        ))
        .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NightIter {}
