//! Calendar conversion port.
//!
//! This module defines the BS <-> AD conversion primitive the resolver is
//! built on. The resolver never asks for month lengths; it only converts
//! concrete dates.

use chrono::NaiveDate;

use crate::domain::calendar::{format_ad, parse_ad, BsDate};
use crate::error::Result;

/// Converts single dates between the Bikram-Sambat and Gregorian calendars.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Conversion must be deterministic and total over the supported range
/// - Dates outside the supported range fail with a `ConversionError`
pub trait CalendarConverter: Send + Sync {
    /// Convert a BS date to its AD equivalent.
    fn bs_to_ad(&self, date: BsDate) -> Result<NaiveDate>;

    /// Convert an AD date to its BS equivalent.
    fn ad_to_bs(&self, date: NaiveDate) -> Result<BsDate>;

    /// Convert a `YYYY-MM-DD` BS string to a `YYYY-MM-DD` AD string.
    ///
    /// Fails with `InvalidDateFormat` when the input does not parse.
    fn to_ad(&self, bs: &str) -> Result<String> {
        let date: BsDate = bs.parse()?;
        self.bs_to_ad(date).map(format_ad)
    }

    /// Convert a `YYYY-MM-DD` AD string to a `YYYY-MM-DD` BS string.
    fn to_bs(&self, ad: &str) -> Result<String> {
        let date = parse_ad(ad)?;
        self.ad_to_bs(date).map(|bs| bs.to_string())
    }

    /// Get the converter name for logging and debugging.
    fn name(&self) -> &'static str;
}
