//! Options for the BS year/month pickers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::calendar::{BsDate, BsMonth};
use crate::domain::DateRangeSelector;
use crate::error::Result;
use crate::port::CalendarConverter;

/// Earliest BS year offered by the reporting views.
pub const FIRST_SELECTABLE_YEAR: i32 = 2082;

/// Derives picker contents ("which years and months can be chosen") from
/// today's BS date.
#[derive(Clone)]
pub struct BsPicker {
    converter: Arc<dyn CalendarConverter>,
    first_year: i32,
}

impl BsPicker {
    #[must_use]
    pub fn new(converter: Arc<dyn CalendarConverter>, first_year: i32) -> Self {
        Self {
            converter,
            first_year,
        }
    }

    #[must_use]
    pub const fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Today's date in BS.
    pub fn current(&self, today: NaiveDate) -> Result<BsDate> {
        self.converter.ad_to_bs(today)
    }

    /// Years from the first selectable year through the current BS year.
    ///
    /// Empty when today falls before the first selectable year.
    pub fn years(&self, today: NaiveDate) -> Result<Vec<i32>> {
        let current = self.current(today)?;
        Ok((self.first_year..=current.year()).collect())
    }

    /// All twelve months, labelled Baishakh..Chaitra.
    #[must_use]
    pub fn months(&self) -> [BsMonth; 12] {
        BsMonth::ALL
    }

    /// The monthly selection a picker opens on: the current BS month.
    pub fn default_month(&self, today: NaiveDate) -> Result<DateRangeSelector> {
        let current = self.current(today)?;
        Ok(DateRangeSelector::monthly_bs(current.year(), current.month()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::calendar::BsCalendar;

    fn picker() -> BsPicker {
        BsPicker::new(Arc::new(BsCalendar::new()), FIRST_SELECTABLE_YEAR)
    }

    fn ad(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn years_run_through_current_bs_year() {
        assert_eq!(picker().years(ad(2026, 10, 16)).unwrap(), vec![2082, 2083]);
        assert_eq!(picker().years(ad(2025, 6, 15)).unwrap(), vec![2082]);
    }

    #[test]
    fn years_are_empty_before_first_selectable_year() {
        assert!(picker().years(ad(2024, 6, 1)).unwrap().is_empty());
    }

    #[test]
    fn default_month_is_current_bs_month() {
        // 2025-06-01 AD falls in Jestha 2082.
        assert_eq!(
            picker().default_month(ad(2025, 6, 1)).unwrap(),
            DateRangeSelector::monthly_bs(2082, 2)
        );
    }
}
