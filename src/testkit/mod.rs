//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`dates`] - Known BS/AD pairs and fixed clocks.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod dates;
