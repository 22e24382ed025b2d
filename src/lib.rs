//! Sambat - Bikram-Sambat aware date ranges for reporting queries.
//!
//! Turns a named range ("Today", "This Week", a BS month, a custom BS span)
//! into a pair of Gregorian dates that reporting APIs accept, without
//! exposing Gregorian dates to users who think in Bikram Sambat.
//!
//! # Architecture
//!
//! - **`domain`** - Calendar values, selectors and resolved ranges
//! - **`port`** - Seams for calendar conversion and "today"
//! - **`adapter`** - Table-driven BS calendar, clocks and the CLI
//! - **`application`** - Resolver, year/month picker, report URLs and
//!   response sequencing
//! - **`infrastructure`** - Configuration and logging
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use sambat::adapter::outbound::calendar::BsCalendar;
//! use sambat::application::DateRangeResolver;
//! use sambat::domain::DateRangeSelector;
//!
//! let resolver = DateRangeResolver::new(Arc::new(BsCalendar::new()));
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let range = resolver
//!     .resolve(&DateRangeSelector::monthly_bs(2082, 1), today)
//!     .unwrap();
//! assert_eq!(range.from_iso(), "2025-04-14");
//! assert_eq!(range.to_iso(), "2025-05-14");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
