//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`CalendarConverter`] - BS <-> AD conversion of single dates
//! - [`Clock`] - Source of today's date

mod calendar;
mod clock;

pub use calendar::CalendarConverter;
pub use clock::Clock;
