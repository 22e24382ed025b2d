//! Date-range resolution.
//!
//! Turns a [`DateRangeSelector`] plus "today" into the concrete AD range the
//! reporting API is queried with. Resolution is pure: identical inputs give
//! identical output, and nothing is cached between calls.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::domain::calendar::{ad_month_name, parse_ad, BsDate, CalendarSystem};
use crate::domain::selector::{CustomRange, DateRangeSelector, MonthSelection};
use crate::domain::ResolvedRange;
use crate::error::{ConversionError, Error, Result};
use crate::port::{CalendarConverter, Clock};

/// Layout used in human-readable labels, e.g. `Jun 15, 2025`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Resolves named date ranges against an injected calendar converter.
#[derive(Clone)]
pub struct DateRangeResolver {
    converter: Arc<dyn CalendarConverter>,
}

impl DateRangeResolver {
    #[must_use]
    pub fn new(converter: Arc<dyn CalendarConverter>) -> Self {
        Self { converter }
    }

    /// The converter this resolver delegates BS conversions to.
    #[must_use]
    pub fn converter(&self) -> &Arc<dyn CalendarConverter> {
        &self.converter
    }

    /// Resolve `selector` relative to `today`.
    ///
    /// Weeks start on Sunday. `Monthly` and `Custom` selections go through
    /// the calendar converter; the other modes are plain AD arithmetic.
    ///
    /// # Errors
    ///
    /// - `InvalidDateFormat` when a custom bound does not parse
    /// - `Conversion` when the converter cannot represent a date
    /// - `InvertedRange` when custom bounds are in the wrong order
    /// - `InvalidMonth` when a monthly selection names a month outside 1-12
    pub fn resolve(&self, selector: &DateRangeSelector, today: NaiveDate) -> Result<ResolvedRange> {
        let range = match selector {
            DateRangeSelector::Today => ResolvedRange::single(today),
            DateRangeSelector::Yesterday => ResolvedRange::single(days_before(today, 1)?),
            DateRangeSelector::ThisWeek => {
                let start = week_start(today)?;
                ResolvedRange::new(start, days_after(start, 6)?)?
            }
            DateRangeSelector::PreviousWeek => {
                let end = days_before(week_start(today)?, 1)?;
                ResolvedRange::new(days_before(end, 6)?, end)?
            }
            DateRangeSelector::Monthly(month) => self.monthly(month)?,
            DateRangeSelector::Custom(custom) => self.custom(custom)?,
        };

        debug!(
            range = %selector.kind(),
            today = %today,
            from = %range.from_iso(),
            to = %range.to_iso(),
            "resolved date range"
        );
        Ok(range)
    }

    /// Resolve `selector` against the clock's current day.
    pub fn resolve_now(&self, selector: &DateRangeSelector, clock: &dyn Clock) -> Result<ResolvedRange> {
        self.resolve(selector, clock.today())
    }

    fn monthly(&self, selection: &MonthSelection) -> Result<ResolvedRange> {
        if !(1..=12).contains(&selection.month) {
            return Err(Error::InvalidMonth {
                month: selection.month,
            });
        }
        match selection.calendar {
            CalendarSystem::Bs => self.bs_month(selection.year, selection.month),
            CalendarSystem::Ad => ad_month(selection.year, selection.month),
        }
    }

    /// AD range of a whole BS month.
    ///
    /// The converter only maps concrete dates, so the month's last day is
    /// found by round trip:
    ///
    /// 1. take the first day of the following BS month (Chaitra rolls into
    ///    Baishakh of the next year) and convert it to AD;
    /// 2. step back one AD day;
    /// 3. convert that back to BS, which is the canonical last day of the
    ///    requested month;
    /// 4. convert the first day and that last day to AD.
    fn bs_month(&self, year: i32, month: u32) -> Result<ResolvedRange> {
        let first = BsDate::first_of_month(year, month)?;
        let next_start = self.converter.bs_to_ad(first.next_month_start()?)?;
        let last = self.converter.ad_to_bs(days_before(next_start, 1)?)?;

        let from = self.converter.bs_to_ad(first)?;
        let to = self.converter.bs_to_ad(last)?;
        ResolvedRange::new(from, to)
    }

    fn custom(&self, custom: &CustomRange) -> Result<ResolvedRange> {
        let (from, to) = match custom.calendar {
            CalendarSystem::Bs => {
                let from: BsDate = custom.from.parse()?;
                let to: BsDate = custom.to.parse()?;
                (self.converter.bs_to_ad(from)?, self.converter.bs_to_ad(to)?)
            }
            CalendarSystem::Ad => (parse_ad(&custom.from)?, parse_ad(&custom.to)?),
        };
        ResolvedRange::new(from, to)
    }
}

/// Human-readable description of a resolved selection, as shown next to the
/// range picker.
#[must_use]
pub fn describe(selector: &DateRangeSelector, range: &ResolvedRange) -> String {
    let day = |date: NaiveDate| date.format(DISPLAY_FORMAT).to_string();
    let kind = selector.kind();

    match selector {
        DateRangeSelector::Today | DateRangeSelector::Yesterday => {
            format!("{kind} ({})", day(range.from()))
        }
        DateRangeSelector::ThisWeek | DateRangeSelector::PreviousWeek => {
            format!("{kind} ({} - {})", day(range.from()), day(range.to()))
        }
        DateRangeSelector::Monthly(selection) => {
            let name = match selection.calendar {
                CalendarSystem::Bs => BsDate::first_of_month(selection.year, selection.month)
                    .map(|d| d.bs_month().label())
                    .ok(),
                CalendarSystem::Ad => ad_month_name(selection.month),
            };
            format!(
                "{kind} ({} {} {})",
                name.unwrap_or("?"),
                selection.year,
                selection.calendar
            )
        }
        DateRangeSelector::Custom(custom) => {
            format!("{kind} ({} - {} {})", custom.from, custom.to, custom.calendar)
        }
    }
}

/// Sunday on or before `today`.
fn week_start(today: NaiveDate) -> Result<NaiveDate> {
    days_before(today, u64::from(today.weekday().num_days_from_sunday()))
}

fn ad_month(year: i32, month: u32) -> Result<ResolvedRange> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(ConversionError::AdYearOutOfRange { year })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(ConversionError::Overflow { date: first })?;
    ResolvedRange::new(first, days_before(next, 1)?)
}

fn days_before(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or_else(|| ConversionError::Overflow { date }.into())
}

fn days_after(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| ConversionError::Overflow { date }.into())
}
