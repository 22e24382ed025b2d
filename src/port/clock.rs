//! Clock port supplying "today".

use chrono::NaiveDate;

/// Source of the current calendar day.
///
/// Injected wherever a range is resolved so resolution can be tested
/// without depending on the wall clock.
pub trait Clock: Send + Sync {
    /// Today's AD date, with no time of day.
    fn today(&self) -> NaiveDate;
}
