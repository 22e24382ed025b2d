//! Named date-range selectors offered by the reporting views.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::calendar::CalendarSystem;
use crate::error::{Error, Result};

/// The bare range mode, without its parameters.
///
/// Parses the labels the dashboard's dropdown uses ("This Week"), and is
/// lenient about case and separators (`this-week`, `THIS_WEEK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RangeKind {
    Today,
    Yesterday,
    ThisWeek,
    PreviousWeek,
    Monthly,
    Custom,
}

impl RangeKind {
    pub const ALL: [Self; 6] = [
        Self::Today,
        Self::Yesterday,
        Self::ThisWeek,
        Self::PreviousWeek,
        Self::Monthly,
        Self::Custom,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::PreviousWeek => "Previous Week",
            Self::Monthly => "Monthly",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "today" => Ok(Self::Today),
            "yesterday" => Ok(Self::Yesterday),
            "thisweek" => Ok(Self::ThisWeek),
            "previousweek" | "lastweek" => Ok(Self::PreviousWeek),
            "monthly" => Ok(Self::Monthly),
            "custom" => Ok(Self::Custom),
            _ => Err(Error::UnknownSelector(s.to_string())),
        }
    }
}

/// A calendar month picked in the "Monthly" popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthSelection {
    pub calendar: CalendarSystem,
    pub year: i32,
    /// 1-based month number in `calendar`.
    pub month: u32,
}

/// Explicit bounds typed into the "Custom" popup.
///
/// The strings are kept verbatim; they are only parsed at resolution time so
/// a malformed value surfaces as a resolution error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CustomRange {
    pub calendar: CalendarSystem,
    pub from: String,
    pub to: String,
}

/// A fully parameterised range selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum DateRangeSelector {
    Today,
    Yesterday,
    ThisWeek,
    PreviousWeek,
    Monthly(MonthSelection),
    Custom(CustomRange),
}

impl DateRangeSelector {
    /// Monthly selection of a BS year and month.
    #[must_use]
    pub const fn monthly_bs(year: i32, month: u32) -> Self {
        Self::Monthly(MonthSelection {
            calendar: CalendarSystem::Bs,
            year,
            month,
        })
    }

    /// Monthly selection of a Gregorian year and month.
    #[must_use]
    pub const fn monthly_ad(year: i32, month: u32) -> Self {
        Self::Monthly(MonthSelection {
            calendar: CalendarSystem::Ad,
            year,
            month,
        })
    }

    /// Custom range between two BS date strings.
    pub fn custom_bs(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Custom(CustomRange {
            calendar: CalendarSystem::Bs,
            from: from.into(),
            to: to.into(),
        })
    }

    /// Custom range between two AD ISO date strings.
    pub fn custom_ad(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Custom(CustomRange {
            calendar: CalendarSystem::Ad,
            from: from.into(),
            to: to.into(),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> RangeKind {
        match self {
            Self::Today => RangeKind::Today,
            Self::Yesterday => RangeKind::Yesterday,
            Self::ThisWeek => RangeKind::ThisWeek,
            Self::PreviousWeek => RangeKind::PreviousWeek,
            Self::Monthly(_) => RangeKind::Monthly,
            Self::Custom(_) => RangeKind::Custom,
        }
    }
}

impl TryFrom<RangeKind> for DateRangeSelector {
    type Error = Error;

    /// Convert a parameterless mode; `Monthly` and `Custom` need their
    /// parameters and are rejected.
    fn try_from(kind: RangeKind) -> Result<Self> {
        match kind {
            RangeKind::Today => Ok(Self::Today),
            RangeKind::Yesterday => Ok(Self::Yesterday),
            RangeKind::ThisWeek => Ok(Self::ThisWeek),
            RangeKind::PreviousWeek => Ok(Self::PreviousWeek),
            RangeKind::Monthly | RangeKind::Custom => {
                Err(Error::UnknownSelector(format!("{kind} requires parameters")))
            }
        }
    }
}
