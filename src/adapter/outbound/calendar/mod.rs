//! Table-driven Bikram-Sambat calendar.
//!
//! Converts by counting days from a single anchor (BS 2070-01-01 =
//! AD 2013-04-14) through the published month lengths in [`table`].

pub mod table;

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::domain::calendar::BsDate;
use crate::error::{ConversionError, Result};
use crate::port::CalendarConverter;

/// Bikram-Sambat calendar backed by the month-length table.
#[derive(Debug, Clone)]
pub struct BsCalendar {
    anchor: NaiveDate,
    /// Day offset of each year's Baishakh 1 from the anchor, plus one
    /// trailing entry holding the total day count.
    year_offsets: Vec<u64>,
}

impl BsCalendar {
    #[must_use]
    pub fn new() -> Self {
        let mut year_offsets = Vec::with_capacity(table::MONTH_DAYS.len() + 1);
        let mut offset = 0u64;
        year_offsets.push(offset);
        for row in &table::MONTH_DAYS {
            offset += row.iter().map(|&d| u64::from(d)).sum::<u64>();
            year_offsets.push(offset);
        }

        Self {
            anchor: table::anchor(),
            year_offsets,
        }
    }

    /// BS years this calendar can convert.
    #[must_use]
    pub const fn supported_years(&self) -> RangeInclusive<i32> {
        table::FIRST_YEAR..=table::LAST_YEAR
    }

    /// First AD date this calendar can convert.
    #[must_use]
    pub const fn min_ad(&self) -> NaiveDate {
        self.anchor
    }

    /// Last AD date this calendar can convert.
    #[must_use]
    pub fn max_ad(&self) -> NaiveDate {
        let last = self.total_days().saturating_sub(1);
        self.anchor
            .checked_add_days(Days::new(last))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of days in a BS month.
    pub fn days_in_month(&self, year: i32, month: u32) -> std::result::Result<u32, ConversionError> {
        let row = self.row(year)?;
        let index = month
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < 12)
            .ok_or(ConversionError::MonthOutOfRange { month })?;
        Ok(u32::from(row[index]))
    }

    fn row(&self, year: i32) -> std::result::Result<&'static [u8; 12], ConversionError> {
        table::row(year).ok_or(ConversionError::YearOutOfRange {
            year,
            min: table::FIRST_YEAR,
            max: table::LAST_YEAR,
        })
    }

    fn total_days(&self) -> u64 {
        self.year_offsets.last().copied().unwrap_or(0)
    }

    fn offset_of(&self, date: BsDate) -> std::result::Result<u64, ConversionError> {
        let row = self.row(date.year())?;
        let max = self.days_in_month(date.year(), date.month())?;
        if date.day() > max {
            return Err(ConversionError::DayOutOfRange {
                year: date.year(),
                month: date.month(),
                day: date.day(),
                max,
            });
        }

        // row() succeeded, so the year index is in bounds
        let year_index = (date.year() - table::FIRST_YEAR) as usize;
        let months_before = (date.month() - 1) as usize;
        let before: u64 = row[..months_before].iter().map(|&d| u64::from(d)).sum();
        Ok(self.year_offsets[year_index] + before + u64::from(date.day() - 1))
    }
}

impl Default for BsCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarConverter for BsCalendar {
    fn bs_to_ad(&self, date: BsDate) -> Result<NaiveDate> {
        let offset = self.offset_of(date)?;
        let ad = self
            .anchor
            .checked_add_days(Days::new(offset))
            .ok_or(ConversionError::Overflow { date: self.anchor })?;
        trace!(bs = %date, ad = %ad, "converted BS to AD");
        Ok(ad)
    }

    fn ad_to_bs(&self, date: NaiveDate) -> Result<BsDate> {
        let out_of_range = || ConversionError::AdOutOfRange {
            date,
            min: self.min_ad(),
            max: self.max_ad(),
        };

        let offset = u64::try_from((date - self.anchor).num_days()).map_err(|_| out_of_range())?;
        if offset >= self.total_days() {
            return Err(out_of_range().into());
        }

        // Index of the last year starting on or before `offset`.
        let year_index = self.year_offsets.partition_point(|&start| start <= offset) - 1;
        let mut remaining = offset - self.year_offsets[year_index];
        let row = &table::MONTH_DAYS[year_index];

        let mut month = 1u32;
        for &days in row {
            let days = u64::from(days);
            if remaining < days {
                break;
            }
            remaining -= days;
            month += 1;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let year = table::FIRST_YEAR + year_index as i32;
        #[allow(clippy::cast_possible_truncation)]
        let day = remaining as u32 + 1;
        let bs = BsDate::new(year, month, day)?;
        trace!(ad = %date, bs = %bs, "converted AD to BS");
        Ok(bs)
    }

    fn name(&self) -> &'static str {
        "bs-table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn ad(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bs(y: i32, m: u32, d: u32) -> BsDate {
        BsDate::new(y, m, d).unwrap()
    }

    #[test]
    fn new_year_anchors_match_published_dates() {
        let calendar = BsCalendar::new();
        assert_eq!(calendar.bs_to_ad(bs(2070, 1, 1)).unwrap(), ad(2013, 4, 14));
        assert_eq!(calendar.bs_to_ad(bs(2073, 1, 1)).unwrap(), ad(2016, 4, 13));
        assert_eq!(calendar.bs_to_ad(bs(2077, 1, 1)).unwrap(), ad(2020, 4, 13));
        assert_eq!(calendar.bs_to_ad(bs(2080, 1, 1)).unwrap(), ad(2023, 4, 14));
        assert_eq!(calendar.bs_to_ad(bs(2081, 1, 1)).unwrap(), ad(2024, 4, 13));
        assert_eq!(calendar.bs_to_ad(bs(2082, 1, 1)).unwrap(), ad(2025, 4, 14));
        assert_eq!(calendar.bs_to_ad(bs(2083, 1, 1)).unwrap(), ad(2026, 4, 14));
    }

    #[test]
    fn ad_to_bs_inverts_bs_to_ad() {
        let calendar = BsCalendar::new();
        let mut day = calendar.min_ad();
        while day <= calendar.max_ad() {
            let converted = calendar.ad_to_bs(day).unwrap();
            assert_eq!(calendar.bs_to_ad(converted).unwrap(), day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn last_day_of_chaitra_precedes_new_year() {
        let calendar = BsCalendar::new();
        assert_eq!(calendar.ad_to_bs(ad(2025, 4, 13)).unwrap(), bs(2081, 12, 31));
        assert_eq!(calendar.ad_to_bs(ad(2025, 4, 14)).unwrap(), bs(2082, 1, 1));
    }

    #[test]
    fn rejects_day_past_month_end() {
        let calendar = BsCalendar::new();
        let err = calendar.bs_to_ad(bs(2082, 1, 32)).unwrap_err();
        assert!(matches!(
            err,
            Error::Conversion(ConversionError::DayOutOfRange { max: 31, .. })
        ));
    }

    #[test]
    fn rejects_years_outside_table() {
        let calendar = BsCalendar::new();
        assert!(matches!(
            calendar.bs_to_ad(bs(2150, 1, 1)),
            Err(Error::Conversion(ConversionError::YearOutOfRange { .. }))
        ));
        assert!(matches!(
            calendar.ad_to_bs(ad(1990, 1, 1)),
            Err(Error::Conversion(ConversionError::AdOutOfRange { .. }))
        ));
        let after = calendar.max_ad().succ_opt().unwrap();
        assert!(calendar.ad_to_bs(after).is_err());
    }

    #[test]
    fn string_interface_round_trips() {
        let calendar = BsCalendar::new();
        assert_eq!(calendar.to_ad("2082-01-01").unwrap(), "2025-04-14");
        assert_eq!(calendar.to_bs("2025-04-14").unwrap(), "2082-01-01");
        assert!(matches!(
            calendar.to_ad(""),
            Err(Error::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn days_in_month_reads_table() {
        let calendar = BsCalendar::new();
        assert_eq!(calendar.days_in_month(2082, 1).unwrap(), 31);
        assert_eq!(calendar.days_in_month(2082, 3).unwrap(), 32);
        assert!(calendar.days_in_month(2082, 13).is_err());
    }
}
