//! Calendar primitives shared by the resolver and the conversion adapters.
//!
//! AD dates are plain [`chrono::NaiveDate`] values. BS dates get their own
//! [`BsDate`] type because their month lengths are not rule-based and can
//! only be checked against a calendar table.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Error, Result};

/// Longest month any BS year has.
pub const MAX_BS_MONTH_DAYS: u32 = 32;

/// ISO layout used for every AD date string crossing the API boundary.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar system a date or selection is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalendarSystem {
    /// Bikram Sambat.
    #[default]
    Bs,
    /// Gregorian.
    Ad,
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bs => write!(f, "BS"),
            Self::Ad => write!(f, "AD"),
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BS" => Ok(Self::Bs),
            "AD" => Ok(Self::Ad),
            _ => Err(Error::invalid_format(s, "expected AD or BS")),
        }
    }
}

/// A Bikram-Sambat calendar date.
///
/// Construction only checks the shape (month 1-12, day 1-32). Whether the day
/// actually exists in that year's month is decided by the calendar table at
/// conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BsDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BsDate {
    /// Create a BS date, rejecting months outside 1-12 and days outside 1-32.
    pub fn new(year: i32, month: u32, day: u32) -> std::result::Result<Self, ConversionError> {
        if !(1..=12).contains(&month) {
            return Err(ConversionError::MonthOutOfRange { month });
        }
        if !(1..=MAX_BS_MONTH_DAYS).contains(&day) {
            return Err(ConversionError::DayOutOfRange {
                year,
                month,
                day,
                max: MAX_BS_MONTH_DAYS,
            });
        }
        Ok(Self { year, month, day })
    }

    /// First day of the given BS month.
    pub fn first_of_month(year: i32, month: u32) -> std::result::Result<Self, ConversionError> {
        Self::new(year, month, 1)
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// First day of the month after this one, rolling into the next year
    /// after Chaitra.
    ///
    /// Fails with `YearOutOfRange` when Chaitra of the largest representable
    /// year has no following year.
    pub fn next_month_start(&self) -> std::result::Result<Self, ConversionError> {
        if self.month < 12 {
            return Ok(Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            });
        }
        let year = self
            .year
            .checked_add(1)
            .ok_or(ConversionError::YearOutOfRange {
                year: self.year,
                min: i32::MIN,
                max: i32::MAX - 1,
            })?;
        Ok(Self {
            year,
            month: 1,
            day: 1,
        })
    }

    /// Named month of this date.
    #[must_use]
    pub fn bs_month(&self) -> BsMonth {
        // month is validated to 1..=12 on construction
        BsMonth::from_number(self.month).unwrap_or(BsMonth::Baishakh)
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BsDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD` (single-digit month and day are accepted).
    fn from_str(s: &str) -> Result<Self> {
        let (year, month, day) = split_ymd(s)?;
        Self::new(year, month, day).map_err(|e| Error::invalid_format(s, e.to_string()))
    }
}

/// Parse an AD ISO date (`YYYY-MM-DD`).
pub fn parse_ad(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_format(s, "date is empty"));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|e| Error::invalid_format(s, e.to_string()))
}

/// Render an AD date as an ISO string, dropping any time of day.
#[must_use]
pub fn format_ad(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn split_ymd(s: &str) -> Result<(i32, u32, u32)> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_format(s, "date is empty"));
    }

    let parts: Vec<&str> = trimmed.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(Error::invalid_format(s, "expected YYYY-MM-DD"));
    };

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_format(s, "year must have four digits"));
    }
    let year = year
        .parse::<i32>()
        .map_err(|e| Error::invalid_format(s, e.to_string()))?;
    let month = parse_component(s, month, "month")?;
    let day = parse_component(s, day, "day")?;
    Ok((year, month, day))
}

fn parse_component(input: &str, part: &str, name: &str) -> Result<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_format(
            input,
            format!("{name} must be one or two digits"),
        ));
    }
    part.parse::<u32>()
        .map_err(|e| Error::invalid_format(input, e.to_string()))
}

/// The twelve BS months, numbered from Baishakh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BsMonth {
    Baishakh = 1,
    Jestha = 2,
    Ashadh = 3,
    Shrawan = 4,
    Bhadra = 5,
    Ashwin = 6,
    Kartik = 7,
    Mangsir = 8,
    Poush = 9,
    Magh = 10,
    Falgun = 11,
    Chaitra = 12,
}

impl BsMonth {
    pub const ALL: [Self; 12] = [
        Self::Baishakh,
        Self::Jestha,
        Self::Ashadh,
        Self::Shrawan,
        Self::Bhadra,
        Self::Ashwin,
        Self::Kartik,
        Self::Mangsir,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chaitra,
    ];

    #[must_use]
    pub fn from_number(month: u32) -> Option<Self> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baishakh => "Baishakh",
            Self::Jestha => "Jestha",
            Self::Ashadh => "Ashadh",
            Self::Shrawan => "Shrawan",
            Self::Bhadra => "Bhadra",
            Self::Ashwin => "Ashwin",
            Self::Kartik => "Kartik",
            Self::Mangsir => "Mangsir",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }
}

impl fmt::Display for BsMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BsMonth {
    type Err = Error;

    /// Accepts a month number (`1`..`12`) or a name, including the common
    /// alternate romanisations.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).ok_or(Error::InvalidMonth { month: number });
        }

        let month = match trimmed.to_ascii_lowercase().as_str() {
            "baishakh" | "baisakh" | "baisak" => Self::Baishakh,
            "jestha" | "jeth" => Self::Jestha,
            "ashadh" | "asar" | "ashar" => Self::Ashadh,
            "shrawan" | "saun" | "sawan" => Self::Shrawan,
            "bhadra" | "bhadau" => Self::Bhadra,
            "ashwin" | "asoj" => Self::Ashwin,
            "kartik" => Self::Kartik,
            "mangsir" => Self::Mangsir,
            "poush" | "push" | "paush" => Self::Poush,
            "magh" => Self::Magh,
            "falgun" | "fagun" => Self::Falgun,
            "chaitra" | "chait" => Self::Chaitra,
            _ => return Err(Error::invalid_format(s, "unknown BS month")),
        };
        Ok(month)
    }
}

/// English name of a Gregorian month number, used for AD-mode labels.
#[must_use]
pub fn ad_month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    chrono::Month::try_from(month).ok().map(|m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bs_date_parses_padded_and_unpadded() {
        let padded: BsDate = "2082-01-05".parse().unwrap();
        let bare: BsDate = "2082-1-5".parse().unwrap();
        assert_eq!(padded, bare);
        assert_eq!(padded.to_string(), "2082-01-05");
    }

    #[test]
    fn bs_date_rejects_empty_input() {
        let err = "".parse::<BsDate>().unwrap_err();
        assert!(matches!(err, Error::InvalidDateFormat { .. }));
    }

    #[test]
    fn bs_date_rejects_wrong_shape() {
        for input in ["2082/01/01", "2082-01", "82-01-01", "2082-001-01", "abcd-01-01"] {
            assert!(
                matches!(
                    input.parse::<BsDate>(),
                    Err(Error::InvalidDateFormat { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn bs_date_rejects_month_thirteen() {
        let err = "2082-13-01".parse::<BsDate>().unwrap_err();
        assert!(err.to_string().contains("month 13"));
    }

    #[test]
    fn next_month_rolls_year_after_chaitra() {
        let chaitra = BsDate::new(2081, 12, 30).unwrap();
        assert_eq!(chaitra.next_month_start().unwrap(), BsDate::new(2082, 1, 1).unwrap());

        let baishakh = BsDate::new(2082, 1, 15).unwrap();
        assert_eq!(baishakh.next_month_start().unwrap(), BsDate::new(2082, 2, 1).unwrap());
    }

    #[test]
    fn next_month_after_last_representable_chaitra_fails() {
        let chaitra = BsDate::new(i32::MAX, 12, 1).unwrap();
        assert!(matches!(
            chaitra.next_month_start(),
            Err(ConversionError::YearOutOfRange { year: i32::MAX, .. })
        ));
    }

    #[test]
    fn month_names_round_trip() {
        for month in BsMonth::ALL {
            assert_eq!(month.label().parse::<BsMonth>().unwrap(), month);
            assert_eq!(BsMonth::from_number(month.number()), Some(month));
        }
        assert_eq!("asar".parse::<BsMonth>().unwrap(), BsMonth::Ashadh);
        assert_eq!("12".parse::<BsMonth>().unwrap(), BsMonth::Chaitra);
        assert!(BsMonth::from_number(0).is_none());
        assert!(BsMonth::from_number(13).is_none());
    }

    #[test]
    fn ad_helpers_use_iso_layout() {
        let date = parse_ad("2025-03-01").unwrap();
        assert_eq!(format_ad(date), "2025-03-01");
        assert!(parse_ad("").is_err());
        assert!(parse_ad("2025-02-30").is_err());
        assert_eq!(ad_month_name(6), Some("June"));
        assert_eq!(ad_month_name(13), None);
    }
}
