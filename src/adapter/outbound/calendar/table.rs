//! Published BS month lengths.
//!
//! Bikram-Sambat month lengths follow the solar transits and are announced
//! per year, so they live in a table rather than a rule.

use chrono::NaiveDate;

/// First BS year covered by [`MONTH_DAYS`].
pub const FIRST_YEAR: i32 = 2070;

/// AD date of BS `FIRST_YEAR-01-01`.
pub const ANCHOR_AD: (i32, u32, u32) = (2013, 4, 14);

/// Days in each month, Baishakh through Chaitra, one row per BS year from
/// [`FIRST_YEAR`].
pub const MONTH_DAYS: [[u8; 12]; 22] = [
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2081
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2091
];

/// Last BS year covered by [`MONTH_DAYS`].
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const LAST_YEAR: i32 = FIRST_YEAR + MONTH_DAYS.len() as i32 - 1;

/// The anchor as a date.
#[must_use]
pub fn anchor() -> NaiveDate {
    let (y, m, d) = ANCHOR_AD;
    // Constant, known-valid date.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Row for `year`, if the table covers it.
#[must_use]
pub fn row(year: i32) -> Option<&'static [u8; 12]> {
    let index = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
    MONTH_DAYS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_has_plausible_length() {
        for (i, row) in MONTH_DAYS.iter().enumerate() {
            for (m, days) in row.iter().enumerate() {
                assert!(
                    (29..=32).contains(days),
                    "BS {}-{:02} has {days} days",
                    FIRST_YEAR + i as i32,
                    m + 1
                );
            }
        }
    }

    #[test]
    fn every_year_is_a_solar_year() {
        for (i, row) in MONTH_DAYS.iter().enumerate() {
            let total: u32 = row.iter().map(|&d| u32::from(d)).sum();
            assert!(
                total == 365 || total == 366,
                "BS {} has {total} days",
                FIRST_YEAR + i as i32
            );
        }
    }

    #[test]
    fn row_lookup_respects_bounds() {
        assert!(row(FIRST_YEAR - 1).is_none());
        assert!(row(LAST_YEAR + 1).is_none());
        assert_eq!(row(2082).map(|r| r[0]), Some(31));
        assert_eq!(LAST_YEAR, 2091);
    }
}
