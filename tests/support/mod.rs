#![allow(dead_code)]

use chrono::{Days, NaiveDate};

/// Every day from `start` for `count` days.
pub fn days_from(start: NaiveDate, count: u64) -> impl Iterator<Item = NaiveDate> {
    (0..count).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().expect("next day")
}

pub fn prev_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("previous day")
}
