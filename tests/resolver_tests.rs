//! Resolver behaviour across many days and the whole calendar table.

mod support;

use std::sync::Arc;

use chrono::{Datelike, Weekday};
use sambat::adapter::outbound::calendar::BsCalendar;
use sambat::application::{describe, DateRangeResolver};
use sambat::domain::DateRangeSelector;
use sambat::error::Error;
use sambat::port::CalendarConverter;
use sambat::testkit::dates::{self, ad, bs};

use support::{days_from, next_day, prev_day};

#[test]
fn today_and_yesterday_are_single_days() {
    let resolver = dates::resolver();
    for day in days_from(ad(2024, 1, 1), 800) {
        let today = resolver.resolve(&DateRangeSelector::Today, day).unwrap();
        assert_eq!((today.from(), today.to()), (day, day));

        let yesterday = resolver.resolve(&DateRangeSelector::Yesterday, day).unwrap();
        assert_eq!(yesterday.from(), prev_day(day));
        assert_eq!(yesterday.from(), yesterday.to());
    }
}

#[test]
fn weeks_run_sunday_to_saturday() {
    let resolver = dates::resolver();
    for day in days_from(ad(2024, 1, 1), 800) {
        let week = resolver.resolve(&DateRangeSelector::ThisWeek, day).unwrap();
        assert_eq!(week.from().weekday(), Weekday::Sun, "week of {day}");
        assert_eq!(week.to().weekday(), Weekday::Sat, "week of {day}");
        assert_eq!(week.len_days(), 7);
        assert!(week.contains(day));

        let previous = resolver
            .resolve(&DateRangeSelector::PreviousWeek, day)
            .unwrap();
        assert_eq!(previous.len_days(), 7);
        assert_eq!(next_day(previous.to()), week.from());
    }
}

#[test]
fn week_examples() {
    let resolver = dates::resolver();

    let week = resolver
        .resolve(&DateRangeSelector::ThisWeek, dates::sunday())
        .unwrap();
    assert_eq!(week.from_iso(), "2025-06-15");
    assert_eq!(week.to_iso(), "2025-06-21");

    let week = resolver
        .resolve(&DateRangeSelector::ThisWeek, dates::saturday())
        .unwrap();
    assert_eq!(week.from(), dates::sunday());

    let previous = resolver
        .resolve(&DateRangeSelector::PreviousWeek, dates::wednesday())
        .unwrap();
    assert_eq!(previous.from(), ad(2025, 6, 8));
    assert_eq!(previous.to(), ad(2025, 6, 14));
}

#[test]
fn monthly_ranges_cover_whole_bs_months() {
    let calendar = Arc::new(BsCalendar::new());
    let resolver = DateRangeResolver::new(calendar.clone());
    let today = dates::sunday();

    for year in 2070..=2090 {
        for month in 1..=12 {
            let range = resolver
                .resolve(&DateRangeSelector::monthly_bs(year, month), today)
                .unwrap();

            assert_eq!(calendar.ad_to_bs(range.from()).unwrap(), bs(year, month, 1));
            let last = calendar.ad_to_bs(range.to()).unwrap();
            assert_eq!((last.year(), last.month()), (year, month));
            assert_eq!(
                range.len_days(),
                i64::from(calendar.days_in_month(year, month).unwrap())
            );
            assert_eq!(calendar.ad_to_bs(next_day(range.to())).unwrap().day(), 1);
        }
    }
}

#[test]
fn consecutive_months_are_contiguous() {
    let resolver = dates::resolver();
    let today = dates::sunday();
    let mut previous_end = None;

    for year in 2080..=2084 {
        for month in 1..=12 {
            let range = resolver
                .resolve(&DateRangeSelector::monthly_bs(year, month), today)
                .unwrap();
            if let Some(end) = previous_end {
                assert_eq!(next_day(end), range.from(), "gap before {year}-{month}");
            }
            previous_end = Some(range.to());
        }
    }
}

#[test]
fn new_years_match_known_dates() {
    let resolver = dates::resolver();
    for (year, (y, m, d)) in dates::NEW_YEARS {
        let range = resolver
            .resolve(&DateRangeSelector::monthly_bs(year, 1), dates::sunday())
            .unwrap();
        assert_eq!(range.from(), ad(y, m, d), "Baishakh {year}");
    }
}

#[test]
fn baishakh_2082() {
    let range = dates::resolver()
        .resolve(&DateRangeSelector::monthly_bs(2082, 1), dates::sunday())
        .unwrap();
    assert_eq!(range.from_iso(), "2025-04-14");
    assert_eq!(range.to_iso(), "2025-05-14");
}

#[test]
fn chaitra_ends_the_day_before_new_year() {
    let range = dates::resolver()
        .resolve(&DateRangeSelector::monthly_bs(2081, 12), dates::sunday())
        .unwrap();
    assert_eq!(range.to_iso(), "2025-04-13");
}

#[test]
fn yesterday_crosses_month_end() {
    let range = dates::resolver()
        .resolve(&DateRangeSelector::Yesterday, ad(2025, 3, 1))
        .unwrap();
    assert_eq!(range.from_iso(), "2025-02-28");
}

#[test]
fn monthly_does_not_depend_on_today() {
    let resolver = dates::resolver();
    let selector = DateRangeSelector::monthly_bs(2081, 12);
    let a = resolver.resolve(&selector, ad(2020, 1, 1)).unwrap();
    let b = resolver.resolve(&selector, ad(2030, 12, 31)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn chaitra_of_last_table_year_cannot_resolve() {
    let err = dates::resolver()
        .resolve(&DateRangeSelector::monthly_bs(2091, 12), dates::sunday())
        .unwrap_err();
    assert!(matches!(err, Error::Conversion(_)), "got {err:?}");
}

#[test]
fn custom_bs_range() {
    let selector = DateRangeSelector::custom_bs("2082-01-01", "2082-01-15");
    let range = dates::resolver().resolve(&selector, dates::sunday()).unwrap();
    assert_eq!(range.from_iso(), "2025-04-14");
    assert_eq!(range.to_iso(), "2025-04-28");
    assert_eq!(
        describe(&selector, &range),
        "Custom (2082-01-01 - 2082-01-15 BS)"
    );
}

#[test]
fn custom_single_day() {
    let selector = DateRangeSelector::custom_bs("2082-01-01", "2082-01-01");
    let range = dates::resolver().resolve(&selector, dates::sunday()).unwrap();
    assert_eq!(range.from(), range.to());
}

#[test]
fn custom_rejects_missing_and_malformed_bounds() {
    let resolver = dates::resolver();
    for (from, to) in [("", "2082-01-15"), ("2082-01-01", ""), ("2082/01/01", "2082-01-15")] {
        let err = resolver
            .resolve(&DateRangeSelector::custom_bs(from, to), dates::sunday())
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidDateFormat { .. }),
            "{from:?}..{to:?} gave {err:?}"
        );
    }
}

#[test]
fn custom_rejects_reversed_bounds() {
    let err = dates::resolver()
        .resolve(
            &DateRangeSelector::custom_bs("2082-01-15", "2082-01-01"),
            dates::sunday(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvertedRange { .. }));
}

#[test]
fn custom_ad_range_skips_conversion() {
    let range = dates::resolver()
        .resolve(
            &DateRangeSelector::custom_ad("2025-06-01", "2025-06-30"),
            dates::sunday(),
        )
        .unwrap();
    assert_eq!(range.len_days(), 30);
}

#[test]
fn resolution_is_repeatable() {
    let resolver = dates::resolver();
    let selectors = [
        DateRangeSelector::Today,
        DateRangeSelector::Yesterday,
        DateRangeSelector::ThisWeek,
        DateRangeSelector::PreviousWeek,
        DateRangeSelector::monthly_bs(2082, 3),
        DateRangeSelector::custom_bs("2082-02-01", "2082-02-10"),
    ];
    for selector in &selectors {
        let first = resolver.resolve(selector, dates::wednesday()).unwrap();
        let second = resolver.resolve(selector, dates::wednesday()).unwrap();
        assert_eq!(first, second, "{selector:?}");
    }
}

#[test]
fn resolve_now_reads_the_clock() {
    let clock = dates::clock(dates::wednesday());
    let range = dates::resolver()
        .resolve_now(&DateRangeSelector::Yesterday, &clock)
        .unwrap();
    assert_eq!(range.from(), ad(2025, 6, 17));
}
