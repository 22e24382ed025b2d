//! Known calendar fixtures.
//!
//! The BS/AD pairs here are Nepali new-year days and a handful of other
//! dates used across resolver tests.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::adapter::outbound::calendar::BsCalendar;
use crate::adapter::outbound::clock::FixedClock;
use crate::application::DateRangeResolver;
use crate::domain::BsDate;

/// (BS new-year, AD date) pairs.
pub const NEW_YEARS: [(i32, (i32, u32, u32)); 7] = [
    (2070, (2013, 4, 14)),
    (2073, (2016, 4, 13)),
    (2077, (2020, 4, 13)),
    (2080, (2023, 4, 14)),
    (2081, (2024, 4, 13)),
    (2082, (2025, 4, 14)),
    (2083, (2026, 4, 14)),
];

/// Build an AD date, panicking on invalid input.
pub fn ad(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid AD date")
}

/// Build a BS date, panicking on invalid input.
pub fn bs(year: i32, month: u32, day: u32) -> BsDate {
    BsDate::new(year, month, day).expect("valid BS date")
}

/// A Sunday: 2025-06-15.
pub fn sunday() -> NaiveDate {
    ad(2025, 6, 15)
}

/// A Saturday: 2025-06-21.
pub fn saturday() -> NaiveDate {
    ad(2025, 6, 21)
}

/// A Wednesday: 2025-06-18.
pub fn wednesday() -> NaiveDate {
    ad(2025, 6, 18)
}

/// Clock pinned to `date`.
pub fn clock(date: NaiveDate) -> FixedClock {
    FixedClock::new(date)
}

/// Resolver over the bundled BS table.
pub fn resolver() -> DateRangeResolver {
    DateRangeResolver::new(Arc::new(BsCalendar::new()))
}
