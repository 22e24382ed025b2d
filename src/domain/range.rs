//! The resolved `{from, to}` pair handed to the reporting API.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::calendar::format_ad;
use crate::error::{Error, Result};

/// An inclusive AD date range with `from <= to`.
///
/// Serializes as ISO date strings, which is the form the reporting API
/// expects in its `from` / `to` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedRange {
    #[serde(serialize_with = "serialize_iso")]
    from: NaiveDate,
    #[serde(serialize_with = "serialize_iso")]
    to: NaiveDate,
}

impl ResolvedRange {
    /// Build a range, rejecting bounds in the wrong order.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(Error::InvertedRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// A range covering a single day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    /// `from` as `YYYY-MM-DD`.
    #[must_use]
    pub fn from_iso(&self) -> String {
        format_ad(self.from)
    }

    /// `to` as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_iso(&self) -> String {
        format_ad(self.to)
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// `from` / `to` pairs ready to be appended as query parameters.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [("from", self.from_iso()), ("to", self.to_iso())]
    }
}

impl fmt::Display for ResolvedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", format_ad(self.from), format_ad(self.to))
    }
}

fn serialize_iso<S: Serializer>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_ad(*date))
}
