//! Calendar-agnostic domain types: dates, selectors and resolved ranges.

pub mod calendar;
pub mod range;
pub mod selector;

pub use calendar::{BsDate, BsMonth, CalendarSystem};
pub use range::ResolvedRange;
pub use selector::{CustomRange, DateRangeSelector, MonthSelection, RangeKind};
