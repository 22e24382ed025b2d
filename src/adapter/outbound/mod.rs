//! Outbound adapters: concrete implementations of the ports.

pub mod calendar;
pub mod clock;
